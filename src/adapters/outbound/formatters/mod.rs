/// Formatter adapters for the supported document formats
mod cyclonedx_json_formatter;
mod cyclonedx_xml_formatter;

pub use cyclonedx_json_formatter::CycloneDxJsonFormatter;
pub use cyclonedx_xml_formatter::{CycloneDxXmlFormatter, CYCLONEDX_XML_NAMESPACE};
