//! The engine's output: identifier → mapping entry.

use fieldmap_model::{AncestorRef, ModelField};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How one field (system or user, at any depth) is indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    #[serde(rename = "type")]
    pub field_type: String,
    /// Ancestry from the model root to the field's parent. Empty at top level.
    pub ancestors: Vec<AncestorRef>,
    pub is_searchable: bool,
    pub is_sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmapped_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<bool>,
    pub is_system_field: bool,
    pub source_field: ModelField,
    /// Access path into the stored document when it differs from the
    /// identifier (e.g. `createdBy.id`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl MappingEntry {
    /// Dotted path of the value inside a stored document.
    ///
    /// Uses the `path` override when present, otherwise joins the ancestors'
    /// storage ids with the field's own storage id.
    pub fn document_path(&self) -> String {
        if let Some(path) = &self.path {
            return path.clone();
        }
        self.ancestors
            .iter()
            .map(|a| a.storage_id.as_str())
            .chain(std::iter::once(self.source_field.storage_id.as_str()))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Flat, insertion-ordered map from dotted identifier to [`MappingEntry`].
///
/// Inserting an existing identifier replaces the entry in place; the key keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: IndexMap<String, MappingEntry>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the one it replaced.
    pub fn insert(&mut self, identifier: impl Into<String>, entry: MappingEntry) -> Option<MappingEntry> {
        self.entries.insert(identifier.into(), entry)
    }

    /// Inserts every entry of `other` in order. Later entries overwrite.
    pub fn merge(&mut self, other: Mapping) {
        for (identifier, entry) in other.entries {
            self.insert_or_overwrite(identifier, entry);
        }
    }

    /// Inserts an entry, logging when it overwrites an earlier one.
    pub(crate) fn insert_or_overwrite(&mut self, identifier: String, entry: MappingEntry) {
        let source = entry.source_field.field_id.clone();
        if let Some(previous) = self.entries.insert(identifier.clone(), entry) {
            warn!(
                identifier = %identifier,
                field_id = %source,
                replaced_system_field = previous.is_system_field,
                "Field identifier collision, later field overwrites earlier entry"
            );
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&MappingEntry> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of an identifier in insertion order.
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.entries.get_index_of(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn searchable(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.iter().filter(|(_, e)| e.is_searchable)
    }

    pub fn sortable(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.iter().filter(|(_, e)| e.is_sortable)
    }

    pub fn system_fields(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.iter().filter(|(_, e)| e.is_system_field)
    }

    pub fn user_fields(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.iter().filter(|(_, e)| !e.is_system_field)
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a MappingEntry);
    type IntoIter = indexmap::map::Iter<'a, String, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
