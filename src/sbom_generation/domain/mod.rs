pub mod component;
pub mod license;
pub mod license_vocabulary;
pub mod manifest;
pub mod package_identity;
pub mod sbom_metadata;

pub use component::{Component, ComponentType, ExternalReference, ReferenceType};
pub use license::{
    LicenseContentType, LicenseDeclaration, LicenseEntry, LicenseIdentity, LicenseRecord,
    LicenseText,
};
pub use license_vocabulary::LicenseVocabulary;
pub use manifest::{BowerManifest, MANIFEST_FILENAME};
pub use package_identity::{PackageIdentity, PackageUrl};
pub use sbom_metadata::SbomMetadata;
