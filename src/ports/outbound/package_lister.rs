use crate::shared::Result;

/// PackageLister port for enumerating installed packages
///
/// Implementations run a package manager in "freeze" mode and hand back
/// its standard output untouched.
pub trait PackageLister {
    /// Captures the freeze listing
    ///
    /// # Returns
    /// The raw bytes the package manager wrote to stdout
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package manager executable cannot be started
    /// - The package manager exits with a non-zero status
    fn freeze(&self) -> Result<Vec<u8>>;

    /// Human-readable form of the command being run (e.g. `pip freeze`)
    fn describe(&self) -> String;
}
