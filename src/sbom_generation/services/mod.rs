mod component_builder;
mod deduplicator;
mod identifier_resolver;
mod license_resolver;
mod license_text_locator;
mod sbom_generator;

pub use component_builder::{BuildOutcome, ComponentBuilder};
pub use deduplicator::ComponentDeduplicator;
pub use identifier_resolver::{IdentifierResolver, BOWER_PURL_TYPE};
pub use license_resolver::{LicenseResolver, ResolvedLicenses};
pub use license_text_locator::LicenseTextLocator;
pub use sbom_generator::SbomGenerator;
