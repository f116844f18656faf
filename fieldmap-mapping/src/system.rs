//! Fields present on every content entry regardless of the user schema.

use crate::mapping::{Mapping, MappingEntry};
use fieldmap_model::{FieldSettings, ModelField};

/// Identifiers of the system fields, in catalog order.
pub const SYSTEM_FIELD_IDS: [&str; 8] = [
    "id", "entryId", "savedOn", "createdOn", "createdBy", "ownedBy", "version", "status",
];

const DATE_TIME_WITHOUT_TIMEZONE: &str = "dateTimeWithoutTimezone";

/// One hand-authored catalog row.
struct SystemField {
    field_id: &'static str,
    entry_type: &'static str,
    source_type: &'static str,
    settings_kind: Option<&'static str>,
    unmapped_type: Option<&'static str>,
    keyword: Option<bool>,
    is_searchable: bool,
    is_sortable: bool,
    path: Option<&'static str>,
}

const CATALOG: [SystemField; 8] = [
    SystemField {
        field_id: "id",
        entry_type: "text",
        source_type: "text",
        settings_kind: None,
        unmapped_type: None,
        keyword: None,
        is_searchable: true,
        is_sortable: true,
        path: None,
    },
    SystemField {
        field_id: "entryId",
        entry_type: "text",
        source_type: "text",
        settings_kind: None,
        unmapped_type: None,
        keyword: None,
        is_searchable: true,
        is_sortable: true,
        path: None,
    },
    SystemField {
        field_id: "savedOn",
        entry_type: "date",
        source_type: "datetime",
        settings_kind: Some(DATE_TIME_WITHOUT_TIMEZONE),
        unmapped_type: Some("date"),
        keyword: Some(false),
        is_searchable: true,
        is_sortable: true,
        path: None,
    },
    SystemField {
        field_id: "createdOn",
        entry_type: "date",
        source_type: "text",
        settings_kind: Some(DATE_TIME_WITHOUT_TIMEZONE),
        unmapped_type: Some("date"),
        keyword: Some(false),
        is_searchable: true,
        is_sortable: true,
        path: None,
    },
    SystemField {
        field_id: "createdBy",
        entry_type: "text",
        source_type: "text",
        settings_kind: None,
        unmapped_type: None,
        keyword: None,
        is_searchable: true,
        is_sortable: false,
        path: Some("createdBy.id"),
    },
    SystemField {
        field_id: "ownedBy",
        entry_type: "text",
        source_type: "text",
        settings_kind: None,
        unmapped_type: None,
        keyword: None,
        is_searchable: true,
        is_sortable: false,
        path: Some("ownedBy.id"),
    },
    SystemField {
        field_id: "version",
        entry_type: "number",
        source_type: "number",
        settings_kind: None,
        unmapped_type: None,
        keyword: Some(false),
        is_searchable: true,
        is_sortable: true,
        path: None,
    },
    SystemField {
        field_id: "status",
        entry_type: "string",
        source_type: "string",
        settings_kind: None,
        unmapped_type: None,
        keyword: Some(false),
        is_searchable: true,
        is_sortable: false,
        path: None,
    },
];

impl SystemField {
    /// Stand-in model field: id, label, field id and storage id all match.
    fn source_field(&self) -> ModelField {
        let mut field = ModelField::new(self.field_id, self.field_id, self.source_type);
        field.id = Some(self.field_id.to_string());
        field.label = Some(self.field_id.to_string());
        field.settings = self.settings_kind.map(FieldSettings::of_kind);
        field
    }

    fn entry(&self) -> MappingEntry {
        MappingEntry {
            field_type: self.entry_type.to_string(),
            ancestors: Vec::new(),
            is_searchable: self.is_searchable,
            is_sortable: self.is_sortable,
            full_text_search: None,
            unmapped_type: self.unmapped_type.map(str::to_string),
            keyword: self.keyword,
            is_system_field: true,
            source_field: self.source_field(),
            path: self.path.map(str::to_string),
        }
    }
}

/// Builds the fixed system field mapping.
pub fn system_fields() -> Mapping {
    let mut mapping = Mapping::new();
    for field in &CATALOG {
        mapping.insert(field.field_id, field.entry());
    }
    mapping
}
