//! Recursive walk of the user field tree.

use crate::error::{MappingError, MappingResult};
use crate::mapping::{Mapping, MappingEntry};
use crate::registry::{CapabilityRegistry, ResolverRegistry};
use fieldmap_model::{AncestorRef, ModelField};

/// Dotted identifier for a field: ancestor field ids, then its own.
pub fn identifier_for(ancestors: &[AncestorRef], field_id: &str) -> String {
    ancestors
        .iter()
        .map(|a| a.field_id.as_str())
        .chain(std::iter::once(field_id))
        .collect::<Vec<_>>()
        .join(".")
}

/// Flattens `fields` (and all nested children) into a single mapping.
///
/// Fields are processed in input order. A composite field's descendants are
/// merged before its own entry is inserted. An identifier produced twice is
/// overwritten by the later field. Any field whose type has no registered
/// capability aborts the whole walk.
pub fn flatten(
    fields: &[ModelField],
    capabilities: &CapabilityRegistry,
    resolvers: &ResolverRegistry,
    ancestors: &[AncestorRef],
) -> MappingResult<Mapping> {
    let mut result = Mapping::new();

    for field in fields {
        let capability = capabilities.lookup(&field.field_type).ok_or_else(|| {
            MappingError::UnrecognizedFieldType {
                field_type: field.field_type.clone(),
                field_id: field.field_id.clone(),
            }
        })?;

        let children = field.children();
        if !children.is_empty() {
            let mut child_ancestors = Vec::with_capacity(ancestors.len() + 1);
            child_ancestors.extend_from_slice(ancestors);
            child_ancestors.push(AncestorRef::from(field));

            let nested = flatten(children, capabilities, resolvers, &child_ancestors)?;
            result.merge(nested);
        }

        let entry = MappingEntry {
            field_type: field.field_type.clone(),
            ancestors: ancestors.to_vec(),
            is_searchable: capability.is_searchable,
            is_sortable: capability.is_sortable,
            full_text_search: capability.full_text_search,
            unmapped_type: resolvers.resolve(&field.field_type, field),
            keyword: None,
            is_system_field: false,
            source_field: field.clone(),
            path: None,
        };
        result.insert_or_overwrite(identifier_for(ancestors, &field.field_id), entry);
    }

    Ok(result)
}
