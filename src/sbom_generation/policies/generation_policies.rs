use std::fmt;
use std::str::FromStr;

/// What to do with a package whose manifest yields no usable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingIdentifierPolicy {
    /// Exclude the package without a diagnostic
    #[default]
    Drop,
    /// Exclude the package and report a warning
    Warn,
}

impl FromStr for MissingIdentifierPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(MissingIdentifierPolicy::Drop),
            "warn" => Ok(MissingIdentifierPolicy::Warn),
            _ => Err(format!(
                "Invalid missing identifier policy: {}. Please specify 'drop' or 'warn'",
                s
            )),
        }
    }
}

impl fmt::Display for MissingIdentifierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingIdentifierPolicy::Drop => write!(f, "drop"),
            MissingIdentifierPolicy::Warn => write!(f, "warn"),
        }
    }
}

/// What to do with a manifest that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestErrorPolicy {
    /// Report the manifest and continue with the rest
    #[default]
    Skip,
    /// Fail the whole run
    Abort,
}

impl FromStr for ManifestErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(ManifestErrorPolicy::Skip),
            "abort" => Ok(ManifestErrorPolicy::Abort),
            _ => Err(format!(
                "Invalid manifest error policy: {}. Please specify 'skip' or 'abort'",
                s
            )),
        }
    }
}

impl fmt::Display for ManifestErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestErrorPolicy::Skip => write!(f, "skip"),
            ManifestErrorPolicy::Abort => write!(f, "abort"),
        }
    }
}
