use crate::sbom_generation::domain::{PackageIdentity, PackageUrl};

/// Purl type of every component this tool emits
pub const BOWER_PURL_TYPE: &str = "bower";

/// IdentifierResolver service deriving identity and purl from a declared name
pub struct IdentifierResolver;

impl IdentifierResolver {
    /// Parses the declared name and builds its purl
    ///
    /// The raw declared name (not the parsed local name) becomes the purl
    /// name, so a scoped package keeps its `@scope/` prefix in the
    /// identifier. Returns `None` when the name is absent or blank, which
    /// excludes the package from the bill of materials.
    pub fn resolve(
        declared_name: Option<&str>,
        version: Option<&str>,
    ) -> Option<(PackageIdentity, PackageUrl)> {
        let declared_name = declared_name?;
        let identity = PackageIdentity::parse(declared_name, version);
        let purl = PackageUrl::new(
            BOWER_PURL_TYPE,
            identity.scope(),
            declared_name,
            identity.version(),
        )?;
        Some((identity, purl))
    }
}
