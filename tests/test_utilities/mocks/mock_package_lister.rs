use freeze_export::prelude::*;

/// Mock PackageLister returning canned freeze output
pub struct MockPackageLister {
    pub output: Vec<u8>,
    pub should_fail: bool,
}

impl MockPackageLister {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.as_bytes().to_vec(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            output: Vec::new(),
            should_fail: true,
        }
    }
}

impl PackageLister for MockPackageLister {
    fn freeze(&self) -> Result<Vec<u8>> {
        if self.should_fail {
            return Err(ExportError::PackageManagerFailed {
                program: "pip".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "Mock freeze failure".to_string(),
            }
            .into());
        }
        Ok(self.output.clone())
    }

    fn describe(&self) -> String {
        "pip freeze".to_string()
    }
}
