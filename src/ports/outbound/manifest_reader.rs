use crate::sbom_generation::domain::BowerManifest;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ManifestReader port for locating and parsing installed component manifests
pub trait ManifestReader {
    /// Lists every `.bower.json` below an install directory
    ///
    /// The order of the returned paths is the discovery order and must be
    /// stable for a given filesystem state. A missing install directory
    /// yields an empty list.
    fn discover_manifests(&self, install_dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads and parses one manifest
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid manifest
    fn read_manifest(&self, manifest_path: &Path) -> Result<BowerManifest>;
}
