use crate::sbom_generation::domain::Component;
use indexmap::IndexMap;

/// ComponentDeduplicator service folding components by their purl
///
/// Keys keep the position of their first insertion while the value is
/// replaced on every repeat, so a later component with the same purl wins
/// but stays where the purl was first seen.
#[derive(Debug, Default)]
pub struct ComponentDeduplicator {
    components: IndexMap<String, Component>,
}

impl ComponentDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component, returning the one it replaced if its purl was already present
    pub fn insert(&mut self, component: Component) -> Option<Component> {
        self.components.insert(component.purl_string(), component)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components.into_values().collect()
    }

    /// Deduplicates a discovery-ordered sequence in one pass
    pub fn deduplicate(components: impl IntoIterator<Item = Component>) -> Vec<Component> {
        let mut deduplicator = Self::new();
        for component in components {
            deduplicator.insert(component);
        }
        deduplicator.into_components()
    }
}
