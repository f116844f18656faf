//! Type-name keyed lookup tables built once from plugins.

use crate::plugin::{FieldTypePlugin, IndexFieldPlugin, SharedResolver};
use fieldmap_model::ModelField;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Search and sort capabilities of one field type.
///
/// Unmapped-type resolvers live only in [`ResolverRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeCapability {
    pub is_searchable: bool,
    pub is_sortable: bool,
    pub full_text_search: Option<bool>,
}

impl FieldTypeCapability {
    pub fn new(is_searchable: bool, is_sortable: bool) -> Self {
        Self {
            is_searchable,
            is_sortable,
            full_text_search: None,
        }
    }

    pub fn with_full_text_search(mut self, enabled: bool) -> Self {
        self.full_text_search = Some(enabled);
        self
    }
}

impl From<&FieldTypePlugin> for FieldTypeCapability {
    fn from(plugin: &FieldTypePlugin) -> Self {
        Self {
            is_searchable: plugin.is_searchable,
            is_sortable: plugin.is_sortable,
            full_text_search: plugin.full_text_search,
        }
    }
}

/// Field type name → capability. Last registration for a name wins.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    entries: HashMap<String, FieldTypeCapability>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from plugins in order.
    pub fn from_plugins(plugins: &[FieldTypePlugin]) -> Self {
        let mut registry = Self::new();
        for plugin in plugins {
            registry.register(plugin.field_type.clone(), FieldTypeCapability::from(plugin));
        }
        debug!(
            plugins = plugins.len(),
            field_types = registry.len(),
            "Built field type capability registry"
        );
        registry
    }

    /// Registers a capability, replacing any earlier one for the same type.
    pub fn register(&mut self, type_name: impl Into<String>, capability: FieldTypeCapability) {
        self.entries.insert(type_name.into(), capability);
    }

    pub fn lookup(&self, type_name: &str) -> Option<&FieldTypeCapability> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Field type name → unmapped-type resolver.
///
/// A type without a resolver is normal: it simply gets no override.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, SharedResolver>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from plugins in order. Plugins that carry no
    /// resolver are skipped and do not clear an earlier registration.
    pub fn from_plugins(plugins: &[IndexFieldPlugin]) -> Self {
        let mut registry = Self::new();
        for plugin in plugins {
            if let Some(resolver) = &plugin.unmapped_type {
                registry.register(plugin.field_type.clone(), resolver.clone());
            }
        }
        debug!(resolvers = registry.len(), "Built unmapped type resolver registry");
        registry
    }

    pub fn register(&mut self, type_name: impl Into<String>, resolver: SharedResolver) {
        self.resolvers.insert(type_name.into(), resolver);
    }

    /// Runs the resolver for `type_name` against `field`.
    pub fn resolve(&self, type_name: &str, field: &ModelField) -> Option<String> {
        self.resolvers
            .get(type_name)
            .and_then(|resolver| resolver.resolve(field))
    }

    pub fn resolver_for(&self, type_name: &str) -> Option<&SharedResolver> {
        self.resolvers.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.resolvers.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.resolvers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ResolverRegistry")
            .field("types", &names)
            .finish()
    }
}
