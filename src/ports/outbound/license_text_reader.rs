use std::path::Path;

/// LicenseTextReader port for reading license text candidates
///
/// Absence is a normal outcome of the license text search, so this port
/// never fails: missing, unreadable, rejected or empty files are all `None`.
pub trait LicenseTextReader {
    /// Reads the full contents of a candidate license file
    fn read_license_text(&self, path: &Path) -> Option<String>;
}
