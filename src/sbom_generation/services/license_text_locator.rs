use crate::ports::outbound::LicenseTextReader;
use crate::sbom_generation::domain::LicenseText;
use crate::sbom_generation::policies::LicenseFileCandidates;
use std::path::Path;

/// LicenseTextLocator service for finding license text next to a package
///
/// Walks the candidates of `LicenseFileCandidates` in order and returns the
/// first one the reader yields non-empty content for.
pub struct LicenseTextLocator<'a, R> {
    reader: &'a R,
}

impl<'a, R: LicenseTextReader> LicenseTextLocator<'a, R> {
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }

    pub fn locate(&self, package_root: &Path, license_token: &str) -> Option<LicenseText> {
        LicenseFileCandidates::for_token(package_root, license_token).find_map(
            |(path, content_type)| {
                let content = self.reader.read_license_text(&path)?;
                LicenseText::new(content, content_type)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::LicenseContentType;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Default)]
    struct InMemoryReader {
        files: HashMap<PathBuf, String>,
        probed: RefCell<Vec<PathBuf>>,
    }

    impl InMemoryReader {
        fn with_file(mut self, path: &str, content: &str) -> Self {
            self.files.insert(PathBuf::from(path), content.to_string());
            self
        }
    }

    impl LicenseTextReader for InMemoryReader {
        fn read_license_text(&self, path: &Path) -> Option<String> {
            self.probed.borrow_mut().push(path.to_path_buf());
            self.files.get(path).cloned()
        }
    }

    #[test]
    fn test_no_candidate_found() {
        let reader = InMemoryReader::default();
        let locator = LicenseTextLocator::new(&reader);

        assert!(locator.locate(Path::new("/pkg"), "MIT").is_none());
        assert_eq!(reader.probed.borrow().len(), 72);
    }

    #[test]
    fn test_license_specific_file_wins_over_generic() {
        let reader = InMemoryReader::default()
            .with_file("/pkg/LICENSE", "generic")
            .with_file("/pkg/notice.MIT.xml", "<license>MIT</license>");
        let locator = LicenseTextLocator::new(&reader);

        let text = locator.locate(Path::new("/pkg"), "MIT").unwrap();
        assert_eq!(text.content(), "<license>MIT</license>");
        assert_eq!(text.content_type(), LicenseContentType::Xml);
    }

    #[test]
    fn test_plain_text_wins_over_markup() {
        let reader = InMemoryReader::default()
            .with_file("/pkg/LICENSE.md", "# MIT")
            .with_file("/pkg/LICENSE", "MIT License");
        let locator = LicenseTextLocator::new(&reader);

        let text = locator.locate(Path::new("/pkg"), "Apache-2.0").unwrap();
        assert_eq!(text.content(), "MIT License");
        assert_eq!(text.explicit_content_type(), None);
    }

    #[test]
    fn test_stem_order_beats_extension_order() {
        let reader = InMemoryReader::default()
            .with_file("/pkg/LICENSE.txt", "from LICENSE.txt")
            .with_file("/pkg/license", "from license");
        let locator = LicenseTextLocator::new(&reader);

        let text = locator.locate(Path::new("/pkg"), "MIT").unwrap();
        assert_eq!(text.content(), "from LICENSE.txt");
        assert_eq!(text.explicit_content_type(), Some("text/txt"));
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let reader = InMemoryReader::default()
            .with_file("/pkg/LICENSE.MIT", "")
            .with_file("/pkg/NOTICE", "Copyright notice");
        let locator = LicenseTextLocator::new(&reader);

        let text = locator.locate(Path::new("/pkg"), "MIT").unwrap();
        assert_eq!(text.content(), "Copyright notice");
    }

    #[test]
    fn test_stops_at_first_hit() {
        let reader = InMemoryReader::default().with_file("/pkg/LICENSE.MIT", "MIT");
        let locator = LicenseTextLocator::new(&reader);

        locator.locate(Path::new("/pkg"), "MIT").unwrap();
        assert_eq!(*reader.probed.borrow(), [PathBuf::from("/pkg/LICENSE.MIT")]);
    }
}
