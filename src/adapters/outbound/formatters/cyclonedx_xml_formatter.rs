use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    Component, ExternalReference, LicenseRecord, LicenseText, SbomMetadata,
};
use crate::shared::Result;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::borrow::Cow;

/// Namespace of the CycloneDX 1.1 XML schema
pub const CYCLONEDX_XML_NAMESPACE: &str = "http://cyclonedx.org/schema/bom/1.1";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Stand-in for characters XML 1.0 cannot carry, even escaped
const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

// Attributes are declared ahead of child elements in every struct below.
#[derive(Debug, Serialize)]
struct XmlBom<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@serialNumber", skip_serializing_if = "Option::is_none")]
    serial_number: Option<&'a str>,
    #[serde(rename = "@version")]
    version: u32,
    components: XmlComponents<'a>,
}

#[derive(Debug, Serialize)]
struct XmlComponents<'a> {
    component: Vec<XmlComponent<'a>>,
}

/// Children follow the sequence order of the 1.1 schema
#[derive(Debug, Serialize)]
struct XmlComponent<'a> {
    #[serde(rename = "@type")]
    component_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<XmlLicenses<'a>>,
    purl: String,
    #[serde(rename = "externalReferences", skip_serializing_if = "Option::is_none")]
    external_references: Option<XmlReferences<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlLicenses<'a> {
    license: Vec<XmlLicense<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlLicense<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<XmlText<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlText<'a> {
    #[serde(rename = "@content-type", skip_serializing_if = "Option::is_none")]
    content_type: Option<&'static str>,
    #[serde(rename = "$text")]
    content: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
struct XmlReferences<'a> {
    reference: Vec<XmlReference<'a>>,
}

#[derive(Debug, Serialize)]
struct XmlReference<'a> {
    #[serde(rename = "@type")]
    reference_type: &'static str,
    url: &'a str,
}

/// CycloneDxXmlFormatter adapter for generating CycloneDX 1.1 XML
///
/// Produces a pretty-printed document with two-space indentation. The
/// metadata timestamp and tool are not part of the 1.1 schema and are not
/// written; only the optional serial number is.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxXmlFormatter {
    fn format(&self, components: &[Component], metadata: &SbomMetadata) -> Result<String> {
        let bom = XmlBom {
            xmlns: CYCLONEDX_XML_NAMESPACE,
            serial_number: metadata.serial_number(),
            version: 1,
            components: XmlComponents {
                component: components.iter().map(build_component).collect(),
            },
        };

        let mut body = String::new();
        let mut serializer = Serializer::with_root(&mut body, Some("bom"))
            .map_err(|e| anyhow::anyhow!("Failed to start XML document: {}", e))?;
        serializer.indent(' ', 2);
        bom.serialize(serializer)
            .map_err(|e| anyhow::anyhow!("Failed to serialize XML document: {}", e))?;

        Ok(format!("{}\n{}\n", XML_DECLARATION, body))
    }
}

fn build_component(component: &Component) -> XmlComponent<'_> {
    let licenses = (!component.licenses.is_empty()).then(|| XmlLicenses {
        license: component.licenses.iter().map(build_license).collect(),
    });

    XmlComponent {
        component_type: component.component_type.as_str(),
        group: component.scope.as_deref(),
        name: &component.name,
        version: component.version.as_deref(),
        description: component.description.as_deref().map(xml_safe),
        licenses,
        purl: component.purl_string(),
        external_references: component
            .external_references
            .as_ref()
            .map(|references| XmlReferences {
                reference: references.iter().map(build_reference).collect(),
            }),
    }
}

fn build_license(license: &LicenseRecord) -> XmlLicense<'_> {
    XmlLicense {
        id: license.recognized_id(),
        name: license.free_text().map(xml_safe),
        text: license.text().map(build_text),
    }
}

fn build_text(text: &LicenseText) -> XmlText<'_> {
    XmlText {
        content_type: text.explicit_content_type(),
        content: xml_safe(text.content()),
    }
}

/// Replaces characters outside the XML 1.0 `Char` production
///
/// Form feeds are common in GPL license files; escaping does not make them
/// legal, so they are swapped for U+FFFD.
fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { REPLACEMENT_CHARACTER })
            .collect(),
    )
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn build_reference(reference: &ExternalReference) -> XmlReference<'_> {
    XmlReference {
        reference_type: reference.reference_type.as_str(),
        url: &reference.url,
    }
}
