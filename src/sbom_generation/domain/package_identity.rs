use std::fmt;

/// Prefix that introduces a scope in a declared package name (`@scope/name`)
const SCOPE_PREFIX: char = '@';

/// Separator between scope and local name
const SCOPE_DELIMITER: char = '/';

/// PackageIdentity value object: a declared name split into scope and local name
///
/// `scope` is present only when the declared name uses `@scope/name` syntax
/// with a non-empty scope and a local name free of further delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentity {
    scope: Option<String>,
    local_name: String,
    version: Option<String>,
}

impl PackageIdentity {
    pub fn parse(declared_name: &str, version: Option<&str>) -> Self {
        let (scope, local_name) = match split_scoped_name(declared_name) {
            Some((scope, local_name)) => (Some(scope.to_string()), local_name.to_string()),
            None => (None, declared_name.to_string()),
        };

        Self {
            scope,
            local_name,
            version: version.map(str::to_string),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

fn split_scoped_name(declared_name: &str) -> Option<(&str, &str)> {
    let rest = declared_name.strip_prefix(SCOPE_PREFIX)?;
    let (scope, local_name) = rest.split_once(SCOPE_DELIMITER)?;
    if scope.is_empty() || local_name.is_empty() || local_name.contains(SCOPE_DELIMITER) {
        return None;
    }
    Some((scope, local_name))
}

/// PackageUrl value object (purl) identifying a component
///
/// Serialization is canonical: components are percent-encoded, no
/// qualifiers or subpath are emitted, and a name that already embeds its
/// namespace (`@scope/name`) is written once with the `@` kept literal.
/// The serialized string is the deduplication key for components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageUrl {
    package_type: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
}

impl PackageUrl {
    /// Returns `None` when no non-empty name is available
    pub fn new(
        package_type: &str,
        namespace: Option<&str>,
        name: &str,
        version: Option<&str>,
    ) -> Option<Self> {
        if name.trim().is_empty() || package_type.is_empty() {
            return None;
        }

        Some(Self {
            package_type: package_type.to_lowercase(),
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            name: name.to_string(),
            version: version.filter(|v| !v.is_empty()).map(str::to_string),
        })
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn path(&self) -> String {
        let embedded_local_name = self.namespace.as_deref().and_then(|namespace| {
            split_scoped_name(&self.name)
                .filter(|(scope, _)| *scope == namespace)
                .map(|(_, local_name)| local_name)
        });

        match (&self.namespace, embedded_local_name) {
            (Some(namespace), Some(local_name)) => format!(
                "{}{}/{}",
                SCOPE_PREFIX,
                urlencoding::encode(namespace),
                urlencoding::encode(local_name)
            ),
            (Some(namespace), None) => format!(
                "{}/{}",
                urlencoding::encode(namespace),
                urlencoding::encode(&self.name)
            ),
            (None, _) => urlencoding::encode(&self.name).into_owned(),
        }
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/{}", self.package_type, self.path())?;
        if let Some(version) = &self.version {
            write!(f, "@{}", urlencoding::encode(version))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scoped_name() {
        let identity = PackageIdentity::parse("@foo/bar", Some("1.2.3"));
        assert_eq!(identity.scope(), Some("foo"));
        assert_eq!(identity.local_name(), "bar");
        assert_eq!(identity.version(), Some("1.2.3"));
    }

    #[test]
    fn test_parse_plain_name() {
        let identity = PackageIdentity::parse("jquery", None);
        assert_eq!(identity.scope(), None);
        assert_eq!(identity.local_name(), "jquery");
        assert_eq!(identity.version(), None);
    }

    #[test]
    fn test_parse_rejects_incomplete_scope_syntax() {
        for name in ["@foo", "@/bar", "@foo/", "@foo/bar/baz", "foo/bar"] {
            let identity = PackageIdentity::parse(name, None);
            assert_eq!(identity.scope(), None, "{} must not be scoped", name);
            assert_eq!(identity.local_name(), name);
        }
    }

    #[test]
    fn test_purl_plain_name() {
        let purl = PackageUrl::new("bower", None, "jquery", Some("3.7.1")).unwrap();
        assert_eq!(purl.to_string(), "pkg:bower/jquery@3.7.1");
    }

    #[test]
    fn test_purl_scoped_name_embeds_namespace_once() {
        let purl = PackageUrl::new("bower", Some("foo"), "@foo/bar", Some("1.2.3")).unwrap();
        assert_eq!(purl.to_string(), "pkg:bower/@foo/bar@1.2.3");
    }

    #[test]
    fn test_purl_separate_namespace() {
        let purl = PackageUrl::new("bower", Some("acme"), "widgets", Some("1.0.0")).unwrap();
        assert_eq!(purl.to_string(), "pkg:bower/acme/widgets@1.0.0");
    }

    #[test]
    fn test_purl_without_version() {
        let purl = PackageUrl::new("bower", None, "angular", None).unwrap();
        assert_eq!(purl.to_string(), "pkg:bower/angular");

        let purl = PackageUrl::new("bower", None, "angular", Some("")).unwrap();
        assert_eq!(purl.version(), None);
    }

    #[test]
    fn test_purl_percent_encodes_components() {
        let purl = PackageUrl::new("bower", None, "my lib", Some("1.0.0+build.5")).unwrap();
        assert_eq!(purl.to_string(), "pkg:bower/my%20lib@1.0.0%2Bbuild.5");
    }

    #[test]
    fn test_purl_requires_name() {
        assert!(PackageUrl::new("bower", None, "", Some("1.0.0")).is_none());
        assert!(PackageUrl::new("bower", None, "   ", None).is_none());
    }

    #[test]
    fn test_purl_serialization_is_deterministic() {
        let first = PackageUrl::new("bower", Some("foo"), "@foo/bar", Some("1.2.3")).unwrap();
        let second = PackageUrl::new("bower", Some("foo"), "@foo/bar", Some("1.2.3")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}
