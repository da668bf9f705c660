use crate::shared::error::SbomError;
use crate::shared::Result;

/// Vocabulary snapshot bundled with the binary
const BUNDLED_SPDX_LICENSES: &str = include_str!("../../../data/spdx-licenses.json");

/// LicenseVocabulary value object holding the recognized SPDX license identifiers
///
/// Built once at startup and shared by reference with every resolver call.
/// Entries are kept sorted so that lookups are a binary search; matching is
/// exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseVocabulary {
    identifiers: Vec<String>,
}

impl LicenseVocabulary {
    /// Loads the snapshot compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SPDX_LICENSES, "bundled SPDX license list")
    }

    /// Parses a vocabulary snapshot: a JSON array of license identifier strings
    ///
    /// # Errors
    /// Returns `SbomError::VocabularyLoadError` when the content is not an
    /// array, contains a non-string entry, or is empty.
    pub fn from_json(content: &str, source_name: &str) -> Result<Self> {
        let load_error = |details: String| SbomError::VocabularyLoadError {
            source_name: source_name.to_string(),
            details,
        };

        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| load_error(e.to_string()))?;

        let entries = value
            .as_array()
            .ok_or_else(|| load_error("expected a JSON array of license identifiers".to_string()))?;

        let mut identifiers = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let id = entry
                .as_str()
                .ok_or_else(|| load_error(format!("entry {} is not a string: {}", index, entry)))?;
            identifiers.push(id.to_string());
        }

        if identifiers.is_empty() {
            return Err(load_error("the license list is empty".to_string()).into());
        }

        Ok(Self::new(identifiers))
    }

    /// Builds a vocabulary from arbitrary identifiers, sorting and de-duplicating them
    pub fn new(mut identifiers: Vec<String>) -> Self {
        identifiers.sort();
        identifiers.dedup();
        Self { identifiers }
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, license_id: &str) -> bool {
        self.identifiers
            .binary_search_by(|probe| probe.as_str().cmp(license_id))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}
