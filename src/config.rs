//! Configuration file support for bower-sbom.
//!
//! Provides YAML-based configuration through `bower-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::sbom_generation::policies::{ManifestErrorPolicy, MissingIdentifierPolicy};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bower-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub serial_number: Option<bool>,
    pub missing_identifier: Option<String>,
    pub manifest_errors: Option<String>,
    /// Alternative vocabulary snapshot, relative to the config file's directory.
    pub license_list: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    pub fn missing_identifier_policy(&self) -> Option<MissingIdentifierPolicy> {
        self.missing_identifier
            .as_deref()
            .and_then(|p| p.parse().ok())
    }

    pub fn manifest_error_policy(&self) -> Option<ManifestErrorPolicy> {
        self.manifest_errors.as_deref().and_then(|p| p.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(license_list), Some(config_dir)) = (&config.license_list, path.parent()) {
        if license_list.is_relative() {
            config.license_list = Some(config_dir.join(license_list));
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }
    if let Some(ref policy) = config.missing_identifier {
        if let Err(e) = policy.parse::<MissingIdentifierPolicy>() {
            bail!("Invalid config: missing_identifier: {}", e);
        }
    }
    if let Some(ref policy) = config.manifest_errors {
        if let Err(e) = policy.parse::<ManifestErrorPolicy>() {
            bail!("Invalid config: manifest_errors: {}", e);
        }
    }
    if let Some(ref license_list) = config.license_list {
        if license_list.as_os_str().is_empty() {
            bail!(
                "Invalid config: license_list must not be empty.\n\n\
                 💡 Hint: Point it at a JSON array of SPDX license identifiers, or remove the field."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
