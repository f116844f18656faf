use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user-authored field definition from a content model.
///
/// `field_id` is the stable API-facing name; `storage_id` is the key the value
/// is physically stored under and may differ from it. Composite fields carry
/// their children in `settings.fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub field_id: String,
    pub storage_id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<FieldSettings>,
    /// Author-level search preference. Passed through to consumers untouched;
    /// mapping flags always come from the registered field type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_searchable: Option<bool>,
    /// Author-level sort preference, passed through like `is_searchable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sortable: Option<bool>,
}

impl ModelField {
    pub fn new(
        field_id: impl Into<String>,
        storage_id: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            field_id: field_id.into(),
            storage_id: storage_id.into(),
            field_type: field_type.into(),
            label: None,
            settings: None,
            is_searchable: None,
            is_sortable: None,
        }
    }

    pub fn with_settings(mut self, settings: FieldSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Replaces the nested child fields, creating settings if needed.
    pub fn with_children(mut self, children: Vec<ModelField>) -> Self {
        self.settings.get_or_insert_with(FieldSettings::default).fields = Some(children);
        self
    }

    /// Child fields declared in `settings.fields`, or an empty slice.
    pub fn children(&self) -> &[ModelField] {
        self.settings
            .as_ref()
            .and_then(|s| s.fields.as_deref())
            .unwrap_or(&[])
    }

    /// True when the field nests at least one child field.
    pub fn is_composite(&self) -> bool {
        !self.children().is_empty()
    }

    /// Depth of the subtree rooted at this field. A leaf has depth 1.
    pub fn nesting_depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ModelField::nesting_depth)
            .max()
            .unwrap_or(0)
    }

    /// The settings sub-type tag (e.g. `"time"` for a time-only datetime).
    pub fn settings_type(&self) -> Option<&str> {
        self.settings.as_ref().and_then(|s| s.kind.as_deref())
    }
}

/// Field settings as stored on the content model.
///
/// Only the child field list and the sub-type tag are interpreted here. Every
/// other key is kept in `extra` so documents round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSettings {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ModelField>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldSettings {
    /// Settings carrying only a sub-type tag.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }
}
