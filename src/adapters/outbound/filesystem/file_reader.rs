use crate::ports::outbound::{LicenseTextReader, ManifestReader, ProjectConfigReader};
use crate::sbom_generation::domain::{BowerManifest, MANIFEST_FILENAME};
use crate::shared::error::SbomError;
use crate::shared::security::{read_regular_file, read_regular_file_bytes};
use crate::shared::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Name of the Bower client configuration file at the project root
const BOWERRC_FILENAME: &str = ".bowerrc";

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the ManifestReader, ProjectConfigReader and
/// LicenseTextReader ports. Every read goes through the shared security
/// checks, so symbolic links, non-regular files and oversized files are
/// never read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn discover_manifests(&self, install_dir: &Path) -> Result<Vec<PathBuf>> {
        if !install_dir.is_dir() {
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/**/{}",
            Pattern::escape(&install_dir.to_string_lossy()),
            MANIFEST_FILENAME
        );
        let entries = glob::glob(&pattern).map_err(|e| SbomError::FileReadError {
            path: install_dir.to_path_buf(),
            details: format!("Invalid manifest search pattern: {}", e),
        })?;

        // Unreadable subdirectories are skipped, not fatal.
        let mut manifests: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        manifests.sort();
        Ok(manifests)
    }

    fn read_manifest(&self, manifest_path: &Path) -> Result<BowerManifest> {
        let content = read_regular_file(manifest_path, MANIFEST_FILENAME).map_err(|e| {
            SbomError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        BowerManifest::from_json(&content).map_err(|e| {
            SbomError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn read_directory_override(&self, project_path: &Path) -> Result<Option<String>> {
        let bowerrc_path = project_path.join(BOWERRC_FILENAME);
        if !bowerrc_path.exists() {
            return Ok(None);
        }

        let content = read_regular_file(&bowerrc_path, BOWERRC_FILENAME).map_err(|e| {
            SbomError::FileReadError {
                path: bowerrc_path.clone(),
                details: e.to_string(),
            }
        })?;

        let bowerrc: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| SbomError::ProjectConfigParseError {
                path: bowerrc_path,
                details: e.to_string(),
            })?;

        Ok(bowerrc
            .get("directory")
            .and_then(|directory| directory.as_str())
            .filter(|directory| !directory.trim().is_empty())
            .map(str::to_string))
    }
}

impl LicenseTextReader for FileSystemReader {
    fn read_license_text(&self, path: &Path) -> Option<String> {
        // Invalid UTF-8 is replaced, not rejected.
        read_regular_file_bytes(path, "license file")
            .ok()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .filter(|content| !content.is_empty())
    }
}
