use super::{LicenseRecord, PackageUrl};

/// Classification of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Framework,
    Library,
}

impl ComponentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Framework => "framework",
            ComponentType::Library => "library",
        }
    }
}

/// Kind of an external reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceType {
    Website,
    IssueTracker,
    Vcs,
}

impl ReferenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceType::Website => "website",
            ReferenceType::IssueTracker => "issue-tracker",
            ReferenceType::Vcs => "vcs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub reference_type: ReferenceType,
    pub url: String,
}

impl ExternalReference {
    pub fn new(reference_type: ReferenceType, url: impl Into<String>) -> Self {
        Self {
            reference_type,
            url: url.into(),
        }
    }
}

/// Component record describing one installed package
///
/// `external_references` is `None` rather than an empty list when no
/// reference contributes, so serializers omit the field entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub component_type: ComponentType,
    pub scope: Option<String>,
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub licenses: Vec<LicenseRecord>,
    pub external_references: Option<Vec<ExternalReference>>,
    pub purl: PackageUrl,
}

impl Component {
    /// Serialized purl, the deduplication key
    pub fn purl_string(&self) -> String {
        self.purl.to_string()
    }
}
