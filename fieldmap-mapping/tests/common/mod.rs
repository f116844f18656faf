//! Shared test helpers for mapping tests.

#![allow(dead_code)]

use fieldmap_mapping::{MappingBuilder, ModelField, PluginSet};

/// A leaf field whose storage id follows the `type@fieldId` convention.
pub fn field(field_id: &str, field_type: &str) -> ModelField {
    ModelField::new(field_id, format!("{field_type}@{field_id}"), field_type)
}

/// An `object` field nesting the given children.
pub fn object(field_id: &str, children: Vec<ModelField>) -> ModelField {
    field(field_id, "object").with_children(children)
}

/// Builder over the standard CMS field types.
pub fn builtin_builder() -> MappingBuilder {
    MappingBuilder::from_plugin_set(&PluginSet::builtin())
}

/// A small article model touching every nesting shape.
pub fn article_fields() -> Vec<ModelField> {
    vec![
        field("title", "text"),
        field("body", "rich-text"),
        field("publishedOn", "datetime"),
        object(
            "author",
            vec![
                field("name", "text"),
                object("address", vec![field("city", "text"), field("zip", "number")]),
            ],
        ),
    ]
}
