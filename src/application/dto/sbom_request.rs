use crate::sbom_generation::policies::{ManifestErrorPolicy, MissingIdentifierPolicy};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Project directory holding `.bowerrc` and the install directories
    pub project_path: PathBuf,
    /// Whether the document carries a random `urn:uuid:` serial number
    pub include_serial_number: bool,
    /// What to do with manifests that yield no purl
    pub missing_identifier: MissingIdentifierPolicy,
    /// What to do with manifests that cannot be read or parsed
    pub manifest_errors: ManifestErrorPolicy,
}

impl SbomRequest {
    pub fn builder() -> SbomRequestBuilder {
        SbomRequestBuilder::default()
    }
}

/// Builder for [`SbomRequest`]
///
/// `project_path` is required; every other field has a default.
#[derive(Debug, Clone)]
pub struct SbomRequestBuilder {
    project_path: Option<PathBuf>,
    include_serial_number: bool,
    missing_identifier: MissingIdentifierPolicy,
    manifest_errors: ManifestErrorPolicy,
}

impl Default for SbomRequestBuilder {
    fn default() -> Self {
        Self {
            project_path: None,
            include_serial_number: true,
            missing_identifier: MissingIdentifierPolicy::default(),
            manifest_errors: ManifestErrorPolicy::default(),
        }
    }
}

impl SbomRequestBuilder {
    pub fn project_path(mut self, project_path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(project_path.into());
        self
    }

    pub fn include_serial_number(mut self, include_serial_number: bool) -> Self {
        self.include_serial_number = include_serial_number;
        self
    }

    pub fn missing_identifier(mut self, policy: MissingIdentifierPolicy) -> Self {
        self.missing_identifier = policy;
        self
    }

    pub fn manifest_errors(mut self, policy: ManifestErrorPolicy) -> Self {
        self.manifest_errors = policy;
        self
    }

    /// # Errors
    /// Returns a validation error if no non-empty project path was given
    pub fn build(self) -> Result<SbomRequest> {
        let project_path = self
            .project_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| SbomError::Validation {
                message: "project path is required".to_string(),
            })?;

        Ok(SbomRequest {
            project_path,
            include_serial_number: self.include_serial_number,
            missing_identifier: self.missing_identifier,
            manifest_errors: self.manifest_errors,
        })
    }
}
