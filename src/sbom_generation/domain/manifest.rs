use super::LicenseDeclaration;
use serde::Deserialize;
use serde_json::Value;

/// Name of the manifest file the bower installer writes into each component
pub const MANIFEST_FILENAME: &str = ".bower.json";

/// Parsed `.bower.json` of an installed component
///
/// Only the fields used to build a component are decoded. `keywords`, `bugs`
/// and `repository` stay loosely typed: a `null` or oddly shaped value
/// contributes nothing instead of failing the manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BowerManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, rename = "_release")]
    pub release: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseDeclaration>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<Value>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub bugs: Option<Value>,
    #[serde(default)]
    pub repository: Option<Value>,
}

impl BowerManifest {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Declared version, falling back to the installer's `_release` string
    pub fn resolved_version(&self) -> Option<&str> {
        non_empty(self.version.as_deref()).or_else(|| non_empty(self.release.as_deref()))
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .as_ref()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    pub fn bugs_url(&self) -> Option<&str> {
        url_field(self.bugs.as_ref())
    }

    pub fn repository_url(&self) -> Option<&str> {
        url_field(self.repository.as_ref())
    }

    /// `name:version` label used in diagnostics
    pub fn display_label(&self) -> String {
        format!(
            "{}:{}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.version.as_deref().unwrap_or("<unversioned>")
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn url_field(field: Option<&Value>) -> Option<&str> {
    non_empty(field?.get("url")?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = BowerManifest::from_json(
            r#"{
                "name": "jquery",
                "version": "3.7.1",
                "license": "MIT",
                "description": "JavaScript library for DOM operations",
                "keywords": ["jquery", "javascript"],
                "homepage": "https://jquery.com",
                "bugs": {"url": "https://github.com/jquery/jquery/issues"},
                "repository": {"type": "git", "url": "https://github.com/jquery/jquery.git"},
                "_release": "3.7.1",
                "_resolution": {"type": "version", "tag": "3.7.1"}
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("jquery"));
        assert_eq!(manifest.resolved_version(), Some("3.7.1"));
        assert_eq!(manifest.keywords().collect::<Vec<_>>(), ["jquery", "javascript"]);
        assert_eq!(manifest.homepage.as_deref(), Some("https://jquery.com"));
        assert_eq!(
            manifest.bugs_url(),
            Some("https://github.com/jquery/jquery/issues")
        );
        assert_eq!(
            manifest.repository_url(),
            Some("https://github.com/jquery/jquery.git")
        );
    }

    #[test]
    fn test_version_falls_back_to_release() {
        let manifest = BowerManifest::from_json(r#"{"name": "x", "_release": "e4f1c2a"}"#).unwrap();
        assert_eq!(manifest.resolved_version(), Some("e4f1c2a"));

        let manifest =
            BowerManifest::from_json(r#"{"name": "x", "version": "", "_release": "master"}"#)
                .unwrap();
        assert_eq!(manifest.resolved_version(), Some("master"));
    }

    #[test]
    fn test_no_version_at_all() {
        let manifest = BowerManifest::from_json(r#"{"name": "x"}"#).unwrap();
        assert_eq!(manifest.resolved_version(), None);
    }

    #[test]
    fn test_string_bugs_and_repository_contribute_nothing() {
        let manifest = BowerManifest::from_json(
            r#"{"name": "x", "bugs": "https://example.com/issues", "repository": "git://example.com/x.git"}"#,
        )
        .unwrap();
        assert_eq!(manifest.bugs_url(), None);
        assert_eq!(manifest.repository_url(), None);
    }

    #[test]
    fn test_non_string_keywords_are_ignored() {
        let manifest =
            BowerManifest::from_json(r#"{"name": "x", "keywords": ["ui", 3, "Framework"]}"#)
                .unwrap();
        assert_eq!(manifest.keywords().collect::<Vec<_>>(), ["ui", "Framework"]);
    }

    #[test]
    fn test_null_or_scalar_keywords_are_ignored() {
        let manifest =
            BowerManifest::from_json(r#"{"name": "x", "keywords": null}"#).unwrap();
        assert_eq!(manifest.keywords().count(), 0);

        let manifest =
            BowerManifest::from_json(r#"{"name": "x", "keywords": "framework"}"#).unwrap();
        assert_eq!(manifest.keywords().count(), 0);
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        assert!(BowerManifest::from_json("{\"name\": ").is_err());
        assert!(BowerManifest::from_json(r#"{"name": 12}"#).is_err());
    }

    #[test]
    fn test_display_label() {
        let manifest = BowerManifest::from_json(r#"{"name": "plain-lib"}"#).unwrap();
        assert_eq!(manifest.display_label(), "plain-lib:<unversioned>");
    }
}
