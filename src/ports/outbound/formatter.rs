use crate::sbom_generation::domain::{Component, SbomMetadata};
use crate::shared::Result;

/// SbomFormatter port for serializing the final component set
///
/// Implementations receive components already deduplicated and in output
/// order; they must not reorder them.
pub trait SbomFormatter {
    /// Formats the SBOM document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, components: &[Component], metadata: &SbomMetadata) -> Result<String>;
}
