/// Mock implementations for testing
mod mock_license_text_reader;
mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_project_config_reader;

pub use mock_license_text_reader::MockLicenseTextReader;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_config_reader::MockProjectConfigReader;
