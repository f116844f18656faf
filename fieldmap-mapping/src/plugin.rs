//! Field-type plugin records.
//!
//! Plugins are the only extension point for new field types. Two kinds exist:
//! [`FieldTypePlugin`] declares search/sort capabilities, [`IndexFieldPlugin`]
//! optionally supplies an unmapped-type resolver for the search backend.

use crate::builtin;
use fieldmap_model::ModelField;
use std::fmt;
use std::sync::Arc;

/// Computes a backend-native type override for a field.
///
/// Implementations must be pure: no mutation of the field or shared state.
pub trait UnmappedTypeResolver: Send + Sync {
    fn resolve(&self, field: &ModelField) -> Option<String>;
}

impl<F> UnmappedTypeResolver for F
where
    F: Fn(&ModelField) -> Option<String> + Send + Sync,
{
    fn resolve(&self, field: &ModelField) -> Option<String> {
        self(field)
    }
}

/// A resolver shared between plugin records and registries.
pub type SharedResolver = Arc<dyn UnmappedTypeResolver>;

/// Declares the search and sort capabilities of one field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypePlugin {
    pub field_type: String,
    pub is_searchable: bool,
    pub is_sortable: bool,
    pub full_text_search: Option<bool>,
}

impl FieldTypePlugin {
    pub fn new(field_type: impl Into<String>, is_searchable: bool, is_sortable: bool) -> Self {
        Self {
            field_type: field_type.into(),
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

/// Declares how a field type is represented in the search backend.
#[derive(Clone)]
pub struct IndexFieldPlugin {
    pub field_type: String,
    pub unmapped_type: Option<SharedResolver>,
}

impl IndexFieldPlugin {
    /// A plugin with no unmapped-type override.
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            unmapped_type: None,
        }
    }

    pub fn with_unmapped_type<R>(mut self, resolver: R) -> Self
    where
        R: UnmappedTypeResolver + 'static,
    {
        self.unmapped_type = Some(Arc::new(resolver));
        self
    }

    /// A plugin whose unmapped type is the same for every field.
    pub fn constant(field_type: impl Into<String>, backend_type: impl Into<String>) -> Self {
        let backend_type = backend_type.into();
        Self::new(field_type).with_unmapped_type(move |_: &ModelField| Some(backend_type.clone()))
    }
}

impl fmt::Debug for IndexFieldPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexFieldPlugin")
            .field("field_type", &self.field_type)
            .field("has_unmapped_type", &self.unmapped_type.is_some())
            .finish()
    }
}

/// Both plugin collections, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PluginSet {
    pub field_types: Vec<FieldTypePlugin>,
    pub index_fields: Vec<IndexFieldPlugin>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard CMS field types.
    pub fn builtin() -> Self {
        Self {
            field_types: builtin::field_type_plugins(),
            index_fields: builtin::index_field_plugins(),
        }
    }

    pub fn with_field_type(mut self, plugin: FieldTypePlugin) -> Self {
        self.field_types.push(plugin);
        self
    }

    pub fn with_index_field(mut self, plugin: IndexFieldPlugin) -> Self {
        self.index_fields.push(plugin);
        self
    }

    /// Appends `other` after the current plugins; its registrations win.
    pub fn extend(&mut self, other: PluginSet) {
        self.field_types.extend(other.field_types);
        self.index_fields.extend(other.index_fields);
    }
}
