use bower_sbom::prelude::*;
use bower_sbom::shared::error::SbomError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifests from memory
///
/// Manifests are listed per install directory in the order they were added.
#[derive(Default)]
pub struct MockManifestReader {
    listings: HashMap<PathBuf, Vec<PathBuf>>,
    contents: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `<install_dir>/<package>/.bower.json` with the given JSON
    pub fn with_manifest(mut self, install_dir: &Path, package: &str, json: &str) -> Self {
        let manifest_path = install_dir.join(package).join(".bower.json");
        self.listings
            .entry(install_dir.to_path_buf())
            .or_default()
            .push(manifest_path.clone());
        self.contents.insert(manifest_path, json.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn discover_manifests(&self, install_dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.listings.get(install_dir).cloned().unwrap_or_default())
    }

    fn read_manifest(&self, manifest_path: &Path) -> Result<BowerManifest> {
        let content = self.contents.get(manifest_path).ok_or_else(|| {
            SbomError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: "not found".to_string(),
            }
        })?;

        BowerManifest::from_json(content).map_err(|e| {
            SbomError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
