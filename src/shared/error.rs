use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a generated SBOM,
/// a usage mistake and a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated successfully
    Success = 0,
    /// Application error (unreadable vocabulary, file I/O error, aborted run, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to load license vocabulary: {source_name}\nDetails: {details}\n\n💡 Hint: The vocabulary must be a non-empty JSON array of SPDX license identifiers")]
    VocabularyLoadError {
        source_name: String,
        details: String,
    },

    #[error("Failed to parse bower manifest: {path}\nDetails: {details}\n\n💡 Hint: Reinstall the component or rerun without --fail-on-invalid-manifest to skip it")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to parse project configuration: {path}\nDetails: {details}\n\n💡 Hint: Please verify that .bowerrc contains valid JSON")]
    ProjectConfigParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
