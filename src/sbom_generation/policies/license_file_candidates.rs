use crate::sbom_generation::domain::LicenseContentType;
use std::path::{Path, PathBuf};

/// Filename stems probed for license text, in probe order
pub const LICENSE_FILE_STEMS: [&str; 9] = [
    "LICENSE", "License", "license", "LICENCE", "Licence", "licence", "NOTICE", "Notice", "notice",
];

/// LicenseFileCandidates policy for the order in which license files are probed
///
/// Three nested axes, outermost first:
/// 1. name suffix: `.{token}` (license-specific) before no suffix
/// 2. filename stem: `LICENSE`, `License`, ... `notice`
/// 3. content type: no extension, `.txt`, `.md`, `.xml`
///
/// Candidates are produced lazily so the caller can stop at the first hit.
/// An empty token only yields the generic, unsuffixed names.
pub struct LicenseFileCandidates;

impl LicenseFileCandidates {
    pub fn for_token<'a>(
        root: &'a Path,
        token: &str,
    ) -> impl Iterator<Item = (PathBuf, LicenseContentType)> + 'a {
        let suffixes: Vec<String> = if token.is_empty() {
            vec![String::new()]
        } else {
            vec![format!(".{}", token), String::new()]
        };

        suffixes.into_iter().flat_map(move |suffix| {
            LICENSE_FILE_STEMS.into_iter().flat_map(move |stem| {
                let suffix = suffix.clone();
                LicenseContentType::ALL.into_iter().map(move |content_type| {
                    let filename = format!("{}{}{}", stem, suffix, content_type.extension());
                    (root.join(filename), content_type)
                })
            })
        })
    }
}
