/// Directory names bower installs into when `.bowerrc` does not override it
pub const DEFAULT_INSTALL_DIRECTORIES: [&str; 2] = ["components", "bower_components"];

/// InstallLocations policy for choosing the directories scanned for manifests
///
/// A non-empty `directory` override from `.bowerrc` replaces the defaults;
/// otherwise both conventional names are scanned in order.
pub struct InstallLocations;

impl InstallLocations {
    pub fn resolve(directory_override: Option<&str>) -> Vec<String> {
        match directory_override.map(str::trim).filter(|d| !d.is_empty()) {
            Some(directory) => vec![directory.to_string()],
            None => DEFAULT_INSTALL_DIRECTORIES
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_override() {
        assert_eq!(
            InstallLocations::resolve(None),
            ["components", "bower_components"]
        );
    }

    #[test]
    fn test_override_replaces_defaults() {
        assert_eq!(InstallLocations::resolve(Some("vendor/bower")), ["vendor/bower"]);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(InstallLocations::resolve(Some("  ")).len(), 2);
    }
}
