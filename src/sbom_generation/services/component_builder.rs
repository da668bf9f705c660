use super::{IdentifierResolver, LicenseResolver};
use crate::ports::outbound::LicenseTextReader;
use crate::sbom_generation::domain::{
    BowerManifest, Component, ComponentType, ExternalReference, LicenseVocabulary, ReferenceType,
};
use std::path::Path;

/// Keyword that marks a package as a framework, compared case-insensitively
const FRAMEWORK_KEYWORD: &str = "framework";

/// Result of building one manifest
///
/// `component` is `None` when the manifest yields no usable purl.
/// `diagnostics` holds the informational lines raised along the way and is
/// filled in either case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    pub component: Option<Component>,
    pub diagnostics: Vec<String>,
}

/// ComponentBuilder service assembling a component from a parsed manifest
pub struct ComponentBuilder<'a, R> {
    license_resolver: LicenseResolver<'a, R>,
}

impl<'a, R: LicenseTextReader> ComponentBuilder<'a, R> {
    pub fn new(vocabulary: &'a LicenseVocabulary, reader: &'a R) -> Self {
        Self {
            license_resolver: LicenseResolver::new(vocabulary, reader),
        }
    }

    /// Builds the component of a manifest installed at `package_root`
    pub fn build(&self, manifest: &BowerManifest, package_root: &Path) -> BuildOutcome {
        let licenses = self.license_resolver.resolve(manifest, package_root);

        let component =
            IdentifierResolver::resolve(manifest.name.as_deref(), manifest.resolved_version())
                .map(|(identity, purl)| Component {
                    component_type: Self::classify(manifest),
                    scope: identity.scope().map(str::to_string),
                    name: identity.local_name().to_string(),
                    version: identity.version().map(str::to_string),
                    description: manifest.description.clone().filter(|d| !d.is_empty()),
                    licenses: licenses.records,
                    external_references: Self::external_references(manifest),
                    purl,
                });

        BuildOutcome {
            component,
            diagnostics: licenses.diagnostics,
        }
    }

    fn classify(manifest: &BowerManifest) -> ComponentType {
        if manifest
            .keywords()
            .any(|keyword| keyword.to_lowercase() == FRAMEWORK_KEYWORD)
        {
            ComponentType::Framework
        } else {
            ComponentType::Library
        }
    }

    fn external_references(manifest: &BowerManifest) -> Option<Vec<ExternalReference>> {
        let references: Vec<ExternalReference> = [
            (
                ReferenceType::Website,
                manifest.homepage.as_deref().filter(|url| !url.is_empty()),
            ),
            (ReferenceType::IssueTracker, manifest.bugs_url()),
            (ReferenceType::Vcs, manifest.repository_url()),
        ]
        .into_iter()
        .filter_map(|(reference_type, url)| Some(ExternalReference::new(reference_type, url?)))
        .collect();

        if references.is_empty() {
            None
        } else {
            Some(references)
        }
    }
}
