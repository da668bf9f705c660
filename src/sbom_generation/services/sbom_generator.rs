use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// SbomGenerator service for generating document metadata
///
/// Creates the run-scoped values of one bill of materials: the generation
/// timestamp, the tool identity and the optional random serial number.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates metadata with the current timestamp
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the document
    /// * `tool_version` - Version of the tool
    /// * `include_serial_number` - Whether to draw a `urn:uuid:` serial
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        include_serial_number: bool,
    ) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number =
            include_serial_number.then(|| format!("urn:uuid:{}", Uuid::new_v4()));

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Metadata naming this crate as the generating tool
    pub fn generate_default_metadata(include_serial_number: bool) -> SbomMetadata {
        Self::generate_metadata(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            include_serial_number,
        )
    }
}
