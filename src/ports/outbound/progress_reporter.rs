/// ProgressReporter port for reporting progress during an export
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so that stdout stays free for machine-readable output.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Signals that a blocking step has started (e.g. waiting on a subprocess)
    ///
    /// # Arguments
    /// * `message` - Description of what is being waited on
    fn start_waiting(&self, message: &str);

    /// Signals that the blocking step started by `start_waiting` has ended
    fn finish_waiting(&self);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
