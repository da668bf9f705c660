/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod license_text_reader;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_config_reader;

pub use formatter::SbomFormatter;
pub use license_text_reader::LicenseTextReader;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_config_reader::ProjectConfigReader;
