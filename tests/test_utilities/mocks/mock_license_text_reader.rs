use bower_sbom::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock LicenseTextReader serving license files from memory
#[derive(Default)]
pub struct MockLicenseTextReader {
    files: HashMap<PathBuf, String>,
}

impl MockLicenseTextReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl LicenseTextReader for MockLicenseTextReader {
    fn read_license_text(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }
}
