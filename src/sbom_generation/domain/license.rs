use serde::Deserialize;
use serde_json::Value;

/// Raw `license` field of a bower manifest, decoded once at the input boundary
///
/// Bower manifests declare licenses as a single string, an array, or an
/// object carrying a `type` field. Anything else is kept as `Other` so that
/// it can be reported instead of failing the whole manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LicenseDeclaration {
    Single(String),
    Multiple(Vec<Value>),
    Structured {
        #[serde(rename = "type")]
        license_type: Value,
    },
    Other(Value),
}

/// One element of a normalized license declaration
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseEntry {
    /// A declared license token
    Token(String),
    /// An element that is not a string; reported and dropped by the resolver
    Invalid(Value),
}

impl LicenseDeclaration {
    /// Normalizes the declaration to an ordered list of entries
    ///
    /// Falsy declarations (empty string, `false`, `0`) declare nothing.
    pub fn entries(&self) -> Vec<LicenseEntry> {
        match self {
            LicenseDeclaration::Single(token) if token.is_empty() => Vec::new(),
            LicenseDeclaration::Single(token) => vec![LicenseEntry::Token(token.clone())],
            LicenseDeclaration::Multiple(values) => values.iter().map(Self::entry_from).collect(),
            LicenseDeclaration::Structured { license_type } => match license_type {
                Value::Array(values) => values.iter().map(Self::entry_from).collect(),
                value if is_falsy(value) => vec![LicenseEntry::Invalid(self.to_value())],
                value => vec![Self::entry_from(value)],
            },
            LicenseDeclaration::Other(value) if is_falsy(value) => Vec::new(),
            LicenseDeclaration::Other(value) => vec![LicenseEntry::Invalid(value.clone())],
        }
    }

    fn entry_from(value: &Value) -> LicenseEntry {
        match value {
            Value::String(token) => LicenseEntry::Token(token.clone()),
            other => LicenseEntry::Invalid(other.clone()),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            LicenseDeclaration::Single(token) => Value::String(token.clone()),
            LicenseDeclaration::Multiple(values) => Value::Array(values.clone()),
            LicenseDeclaration::Structured { license_type } => {
                serde_json::json!({ "type": license_type })
            }
            LicenseDeclaration::Other(value) => value.clone(),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// How a resolved license is identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseIdentity {
    /// Exact match against the license vocabulary
    Recognized(String),
    /// Unrecognized token carried as a human-readable name
    FreeText(String),
}

impl LicenseIdentity {
    pub fn as_str(&self) -> &str {
        match self {
            LicenseIdentity::Recognized(id) => id,
            LicenseIdentity::FreeText(name) => name,
        }
    }
}

/// Content types probed when looking for license text, in probe order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseContentType {
    Plain,
    Txt,
    Markdown,
    Xml,
}

impl LicenseContentType {
    pub const ALL: [LicenseContentType; 4] = [
        LicenseContentType::Plain,
        LicenseContentType::Txt,
        LicenseContentType::Markdown,
        LicenseContentType::Xml,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            LicenseContentType::Plain => "",
            LicenseContentType::Txt => ".txt",
            LicenseContentType::Markdown => ".md",
            LicenseContentType::Xml => ".xml",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            LicenseContentType::Plain => "text/plain",
            LicenseContentType::Txt => "text/txt",
            LicenseContentType::Markdown => "text/markdown",
            LicenseContentType::Xml => "text/xml",
        }
    }

    pub fn is_default(self) -> bool {
        self == LicenseContentType::Plain
    }
}

/// License text found next to a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText {
    content: String,
    content_type: LicenseContentType,
}

impl LicenseText {
    /// Returns `None` for empty content; license text is never empty
    pub fn new(content: String, content_type: LicenseContentType) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        Some(Self {
            content,
            content_type,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> LicenseContentType {
        self.content_type
    }

    /// MIME type to emit, `None` when it is the default `text/plain`
    pub fn explicit_content_type(&self) -> Option<&'static str> {
        if self.content_type.is_default() {
            None
        } else {
            Some(self.content_type.mime_type())
        }
    }
}

/// A single resolved license of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    identity: LicenseIdentity,
    text: Option<LicenseText>,
}

impl LicenseRecord {
    pub fn new(identity: LicenseIdentity, text: Option<LicenseText>) -> Self {
        Self { identity, text }
    }

    pub fn identity(&self) -> &LicenseIdentity {
        &self.identity
    }

    pub fn recognized_id(&self) -> Option<&str> {
        match &self.identity {
            LicenseIdentity::Recognized(id) => Some(id),
            LicenseIdentity::FreeText(_) => None,
        }
    }

    pub fn free_text(&self) -> Option<&str> {
        match &self.identity {
            LicenseIdentity::FreeText(name) => Some(name),
            LicenseIdentity::Recognized(_) => None,
        }
    }

    pub fn text(&self) -> Option<&LicenseText> {
        self.text.as_ref()
    }
}
