use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    Component, ExternalReference, LicenseRecord, LicenseText, SbomMetadata,
};
use crate::shared::Result;
use serde::Serialize;

/// CycloneDX schema version of the JSON document
const SPEC_VERSION: &str = "1.2";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom<'a> {
    bom_format: &'static str,
    spec_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    serial_number: Option<&'a str>,
    version: u32,
    metadata: Metadata<'a>,
    components: Vec<JsonComponent<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tools: Vec<Tool<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonComponent<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<LicenseChoice<'a>>,
    purl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_references: Option<Vec<JsonReference<'a>>>,
}

#[derive(Debug, Serialize)]
struct LicenseChoice<'a> {
    license: JsonLicense<'a>,
}

#[derive(Debug, Serialize)]
struct JsonLicense<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<AttachedText<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AttachedText<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<&'static str>,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonReference<'a> {
    #[serde(rename = "type")]
    reference_type: &'static str,
    url: &'a str,
}

/// CycloneDxJsonFormatter adapter for generating CycloneDX 1.2 JSON
pub struct CycloneDxJsonFormatter;

impl CycloneDxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxJsonFormatter {
    fn format(&self, components: &[Component], metadata: &SbomMetadata) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: SPEC_VERSION,
            serial_number: metadata.serial_number(),
            version: 1,
            metadata: Metadata {
                timestamp: metadata.timestamp(),
                tools: vec![Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                }],
            },
            components: components.iter().map(build_component).collect(),
        };

        let mut json = serde_json::to_string_pretty(&bom)?;
        json.push('\n');
        Ok(json)
    }
}

fn build_component(component: &Component) -> JsonComponent<'_> {
    JsonComponent {
        component_type: component.component_type.as_str(),
        group: component.scope.as_deref(),
        name: &component.name,
        version: component.version.as_deref(),
        description: component.description.as_deref(),
        licenses: component.licenses.iter().map(build_license).collect(),
        purl: component.purl_string(),
        external_references: component
            .external_references
            .as_ref()
            .map(|references| references.iter().map(build_reference).collect()),
    }
}

fn build_license(license: &LicenseRecord) -> LicenseChoice<'_> {
    LicenseChoice {
        license: JsonLicense {
            id: license.recognized_id(),
            name: license.free_text(),
            text: license.text().map(build_text),
        },
    }
}

fn build_text(text: &LicenseText) -> AttachedText<'_> {
    AttachedText {
        content_type: text.explicit_content_type(),
        content: text.content(),
    }
}

fn build_reference(reference: &ExternalReference) -> JsonReference<'_> {
    JsonReference {
        reference_type: reference.reference_type.as_str(),
        url: &reference.url,
    }
}
