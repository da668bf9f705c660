use bower_sbom::prelude::*;
use std::path::Path;

/// Mock ProjectConfigReader for testing
#[derive(Default)]
pub struct MockProjectConfigReader {
    pub directory: Option<String>,
    pub should_fail: bool,
}

impl MockProjectConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: &str) -> Self {
        Self {
            directory: Some(directory.to_string()),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            directory: None,
            should_fail: true,
        }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn read_directory_override(&self, _project_path: &Path) -> Result<Option<String>> {
        if self.should_fail {
            anyhow::bail!("Mock .bowerrc read failure");
        }
        Ok(self.directory.clone())
    }
}
