/// Domain layer - pure SBOM generation logic
///
/// Value objects, policies and services that turn a bower manifest into a
/// canonical component record. Filesystem access is only reached through
/// the `LicenseTextReader` port.
pub mod domain;
pub mod policies;
pub mod services;
