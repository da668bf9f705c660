use super::LicenseTextLocator;
use crate::ports::outbound::LicenseTextReader;
use crate::sbom_generation::domain::{
    BowerManifest, LicenseEntry, LicenseIdentity, LicenseRecord, LicenseVocabulary,
};
use std::path::Path;

/// Licenses of one package plus the diagnostics raised while resolving them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLicenses {
    pub records: Vec<LicenseRecord>,
    pub diagnostics: Vec<String>,
}

/// LicenseResolver service turning a manifest's `license` field into license records
///
/// Each declared token becomes a recognized identifier when it is an exact
/// vocabulary member, and a free-text name otherwise. Non-string entries are
/// dropped one by one with a diagnostic; the remaining entries keep their
/// declaration order.
pub struct LicenseResolver<'a, R> {
    vocabulary: &'a LicenseVocabulary,
    text_locator: LicenseTextLocator<'a, R>,
}

impl<'a, R: LicenseTextReader> LicenseResolver<'a, R> {
    pub fn new(vocabulary: &'a LicenseVocabulary, reader: &'a R) -> Self {
        Self {
            vocabulary,
            text_locator: LicenseTextLocator::new(reader),
        }
    }

    pub fn resolve(&self, manifest: &BowerManifest, package_root: &Path) -> ResolvedLicenses {
        let Some(declaration) = &manifest.license else {
            return ResolvedLicenses::default();
        };

        let mut resolved = ResolvedLicenses::default();
        for entry in declaration.entries() {
            match entry {
                LicenseEntry::Token(token) => {
                    let text = self.text_locator.locate(package_root, &token);
                    resolved
                        .records
                        .push(LicenseRecord::new(self.identify(token), text));
                }
                LicenseEntry::Invalid(_) => resolved.diagnostics.push(format!(
                    "Invalid license definition for {}. Skipping",
                    manifest.display_label()
                )),
            }
        }
        resolved
    }

    fn identify(&self, token: String) -> LicenseIdentity {
        if self.vocabulary.contains(&token) {
            LicenseIdentity::Recognized(token)
        } else {
            LicenseIdentity::FreeText(token)
        }
    }
}
