mod cli;

use bower_sbom::adapters::outbound::console::StderrProgressReporter;
use bower_sbom::adapters::outbound::filesystem::FileSystemReader;
use bower_sbom::application::dto::SbomRequest;
use bower_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bower_sbom::application::use_cases::GenerateSbomUseCase;
use bower_sbom::config::{self, ConfigFile};
use bower_sbom::sbom_generation::domain::LicenseVocabulary;
use bower_sbom::sbom_generation::policies::{ManifestErrorPolicy, MissingIdentifierPolicy};
use bower_sbom::shared::error::{ExitCode, SbomError};
use bower_sbom::shared::security::read_regular_file;
use bower_sbom::shared::Result;
use cli::Args;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // CLI flags take precedence over the config file
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };
    let settings = Settings::merge(args, config);

    let vocabulary = load_vocabulary(settings.license_list.as_deref())?;

    // Create adapters (Dependency Injection)
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        vocabulary,
    );

    let request = SbomRequest::builder()
        .project_path(project_path)
        .include_serial_number(settings.include_serial_number)
        .missing_identifier(settings.missing_identifier)
        .manifest_errors(settings.manifest_errors)
        .build()?;

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let document = formatter.format(&response.components, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&document)?;

    Ok(())
}

/// Effective options after merging CLI arguments over the config file
struct Settings {
    format: bower_sbom::application::dto::OutputFormat,
    output: Option<PathBuf>,
    include_serial_number: bool,
    missing_identifier: MissingIdentifierPolicy,
    manifest_errors: ManifestErrorPolicy,
    license_list: Option<PathBuf>,
}

impl Settings {
    fn merge(args: Args, config: ConfigFile) -> Self {
        let missing_identifier = if args.warn_missing_identifier {
            MissingIdentifierPolicy::Warn
        } else {
            config.missing_identifier_policy().unwrap_or_default()
        };
        let manifest_errors = if args.fail_on_invalid_manifest {
            ManifestErrorPolicy::Abort
        } else {
            config.manifest_error_policy().unwrap_or_default()
        };

        Self {
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            output: args.output,
            include_serial_number: !args.no_serial_number && config.serial_number.unwrap_or(true),
            missing_identifier,
            manifest_errors,
            license_list: args.license_list.or(config.license_list),
        }
    }
}

fn load_vocabulary(license_list: Option<&Path>) -> Result<LicenseVocabulary> {
    let Some(path) = license_list else {
        return LicenseVocabulary::bundled();
    };

    let content = read_regular_file(path, "license list").map_err(|e| {
        SbomError::VocabularyLoadError {
            source_name: path.display().to_string(),
            details: e.to_string(),
        }
    })?;
    LicenseVocabulary::from_json(&content, &path.display().to_string())
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bower_sbom::application::dto::OutputFormat;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let err = validate_project_path(Path::new("/nonexistent/path/that/does/not/exist"))
            .unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bower.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_project_path(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_settings_defaults() {
        let args = Args::try_parse_from(["bower-sbom"]).unwrap();
        let settings = Settings::merge(args, ConfigFile::default());

        assert_eq!(settings.format, OutputFormat::Xml);
        assert!(settings.include_serial_number);
        assert_eq!(settings.missing_identifier, MissingIdentifierPolicy::Drop);
        assert_eq!(settings.manifest_errors, ManifestErrorPolicy::Skip);
        assert!(settings.license_list.is_none());
    }

    #[test]
    fn test_settings_config_applies_without_flags() {
        let args = Args::try_parse_from(["bower-sbom"]).unwrap();
        let config = ConfigFile {
            format: Some("json".to_string()),
            serial_number: Some(false),
            missing_identifier: Some("warn".to_string()),
            manifest_errors: Some("abort".to_string()),
            license_list: Some(PathBuf::from("licenses.json")),
            ..ConfigFile::default()
        };
        let settings = Settings::merge(args, config);

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.include_serial_number);
        assert_eq!(settings.missing_identifier, MissingIdentifierPolicy::Warn);
        assert_eq!(settings.manifest_errors, ManifestErrorPolicy::Abort);
        assert_eq!(settings.license_list, Some(PathBuf::from("licenses.json")));
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let args = Args::try_parse_from([
            "bower-sbom",
            "--format",
            "xml",
            "--license-list",
            "cli.json",
        ])
        .unwrap();
        let config = ConfigFile {
            format: Some("json".to_string()),
            license_list: Some(PathBuf::from("config.json")),
            ..ConfigFile::default()
        };
        let settings = Settings::merge(args, config);

        assert_eq!(settings.format, OutputFormat::Xml);
        assert_eq!(settings.license_list, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_load_vocabulary_bundled() {
        let vocabulary = load_vocabulary(None).unwrap();
        assert!(vocabulary.contains("MIT"));
    }

    #[test]
    fn test_load_vocabulary_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("licenses.json");
        fs::write(&path, r#"["In-House-1.0"]"#).unwrap();

        let vocabulary = load_vocabulary(Some(&path)).unwrap();
        assert!(vocabulary.contains("In-House-1.0"));
        assert!(!vocabulary.contains("MIT"));
    }

    #[test]
    fn test_load_vocabulary_missing_file() {
        let err = load_vocabulary(Some(Path::new("/nonexistent/licenses.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load license vocabulary"));
    }
}
