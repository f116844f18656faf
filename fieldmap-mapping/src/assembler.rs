//! Public entry points: system fields plus the flattened user fields.

use crate::error::MappingResult;
use crate::flatten::flatten;
use crate::mapping::Mapping;
use crate::plugin::{FieldTypePlugin, IndexFieldPlugin, PluginSet};
use crate::registry::{CapabilityRegistry, ResolverRegistry};
use crate::system::system_fields;
use fieldmap_model::ModelField;
use tracing::debug;

/// Builds mappings against a fixed pair of registries.
///
/// Construct once at startup; `build` only reads the registries, so a shared
/// reference can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct MappingBuilder {
    capabilities: CapabilityRegistry,
    resolvers: ResolverRegistry,
}

impl MappingBuilder {
    pub fn new(capabilities: CapabilityRegistry, resolvers: ResolverRegistry) -> Self {
        Self {
            capabilities,
            resolvers,
        }
    }

    /// Builds both registries from plugin collections.
    pub fn from_plugins(field_types: &[FieldTypePlugin], index_fields: &[IndexFieldPlugin]) -> Self {
        let resolvers = ResolverRegistry::from_plugins(index_fields);
        let capabilities = CapabilityRegistry::from_plugins(field_types);
        Self::new(capabilities, resolvers)
    }

    pub fn from_plugin_set(plugins: &PluginSet) -> Self {
        Self::from_plugins(&plugins.field_types, &plugins.index_fields)
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    /// Builds the complete mapping for a model's field list.
    ///
    /// With no user fields the result is exactly [`system_fields`]. Otherwise
    /// flattened user entries are inserted after the system fields and win on
    /// identifier collision.
    pub fn build(&self, fields: Option<&[ModelField]>) -> MappingResult<Mapping> {
        let fields = match fields {
            Some(fields) if !fields.is_empty() => fields,
            _ => {
                debug!("Model has no user fields, using system fields only");
                return Ok(system_fields());
            }
        };

        let user = flatten(fields, &self.capabilities, &self.resolvers, &[])?;
        let mut mapping = system_fields();
        mapping.merge(user);

        debug!(
            fields = fields.len(),
            entries = mapping.len(),
            "Built field mapping"
        );
        Ok(mapping)
    }
}

/// Builds a mapping from a model's field list and plugin collections.
///
/// Registries are only constructed when there are user fields to map.
pub fn build_mapping(
    fields: Option<&[ModelField]>,
    field_types: &[FieldTypePlugin],
    index_fields: &[IndexFieldPlugin],
) -> MappingResult<Mapping> {
    match fields {
        Some(fields) if !fields.is_empty() => {
            MappingBuilder::from_plugins(field_types, index_fields).build(Some(fields))
        }
        _ => Ok(system_fields()),
    }
}
