mod generation_policies;
mod install_locations;
mod license_file_candidates;

pub use generation_policies::{ManifestErrorPolicy, MissingIdentifierPolicy};
pub use install_locations::{InstallLocations, DEFAULT_INSTALL_DIRECTORIES};
pub use license_file_candidates::{LicenseFileCandidates, LICENSE_FILE_STEMS};
