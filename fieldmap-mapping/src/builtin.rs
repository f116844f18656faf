//! The standard CMS field types.

use crate::plugin::{FieldTypePlugin, IndexFieldPlugin};
use fieldmap_model::ModelField;

/// Settings sub-type of a datetime field that stores only a time of day.
const TIME_ONLY: &str = "time";

pub(crate) fn field_type_plugins() -> Vec<FieldTypePlugin> {
    vec![
        FieldTypePlugin::new("text", true, true).with_full_text_search(true),
        FieldTypePlugin::new("long-text", true, false).with_full_text_search(true),
        FieldTypePlugin::new("rich-text", false, false).with_full_text_search(false),
        FieldTypePlugin::new("number", true, true).with_full_text_search(false),
        FieldTypePlugin::new("boolean", true, true).with_full_text_search(false),
        FieldTypePlugin::new("datetime", true, true).with_full_text_search(false),
        FieldTypePlugin::new("file", true, false).with_full_text_search(false),
        FieldTypePlugin::new("ref", true, false).with_full_text_search(false),
        FieldTypePlugin::new("object", false, false).with_full_text_search(false),
    ]
}

pub(crate) fn index_field_plugins() -> Vec<IndexFieldPlugin> {
    vec![IndexFieldPlugin::new("datetime").with_unmapped_type(datetime_unmapped_type)]
}

/// Dates and date-times index as backend dates; time-only values do not parse
/// as dates, so they get no override.
fn datetime_unmapped_type(field: &ModelField) -> Option<String> {
    match field.settings_type() {
        Some(TIME_ONLY) => None,
        _ => Some("date".to_string()),
    }
}
