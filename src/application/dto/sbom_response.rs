use crate::sbom_generation::domain::{Component, SbomMetadata};
use std::path::PathBuf;

/// SbomResponse - Internal response DTO from the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// Deduplicated components in first-seen order
    pub components: Vec<Component>,
    /// Document metadata (timestamp, tool info, serial number)
    pub metadata: SbomMetadata,
    /// Manifests skipped because they could not be read or parsed
    pub skipped_manifests: Vec<PathBuf>,
    /// Manifests excluded because they yield no purl
    pub excluded_packages: Vec<PathBuf>,
}
