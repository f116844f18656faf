use fieldmap_mapping::{
    CapabilityRegistry, FieldTypeCapability, FieldTypePlugin, IndexFieldPlugin, ModelField,
    ResolverRegistry,
};
use std::sync::Arc;

fn text_field() -> ModelField {
    ModelField::new("title", "text@title", "text")
}

// ── CapabilityRegistry ───────────────────────────────────────────

#[test]
fn lookup_missing_type_is_none() {
    let registry = CapabilityRegistry::new();
    assert!(registry.lookup("text").is_none());
    assert!(registry.is_empty());
}

#[test]
fn register_then_lookup() {
    let mut registry = CapabilityRegistry::new();
    registry.register("text", FieldTypeCapability::new(true, false).with_full_text_search(true));

    let cap = registry.lookup("text").unwrap();
    assert!(cap.is_searchable);
    assert!(!cap.is_sortable);
    assert_eq!(cap.full_text_search, Some(true));
    assert!(registry.contains("text"));
}

#[test]
fn last_registration_wins_without_merge() {
    let mut registry = CapabilityRegistry::new();
    registry.register("text", FieldTypeCapability::new(true, true).with_full_text_search(true));
    registry.register("text", FieldTypeCapability::new(false, false));

    let cap = registry.lookup("text").unwrap();
    assert!(!cap.is_searchable);
    assert!(!cap.is_sortable);
    assert_eq!(cap.full_text_search, None);
    assert_eq!(registry.len(), 1);
}

#[test]
fn from_plugins_later_plugin_overrides_earlier() {
    let plugins = vec![
        FieldTypePlugin::new("text", true, true),
        FieldTypePlugin::new("number", true, true),
        FieldTypePlugin::new("text", false, true),
    ];
    let registry = CapabilityRegistry::from_plugins(&plugins);

    assert_eq!(registry.len(), 2);
    assert!(!registry.lookup("text").unwrap().is_searchable);
    assert_eq!(registry.type_names(), vec!["number", "text"]);
}

#[test]
fn from_plugins_copies_plugin_flags() {
    let registry = CapabilityRegistry::from_plugins(&[
        FieldTypePlugin::new("text", true, false).with_full_text_search(true),
    ]);
    assert_eq!(
        registry.lookup("text"),
        Some(&FieldTypeCapability::new(true, false).with_full_text_search(true))
    );
}

// ── ResolverRegistry ─────────────────────────────────────────────

#[test]
fn resolve_without_resolver_is_none() {
    let registry = ResolverRegistry::new();
    assert_eq!(registry.resolve("text", &text_field()), None);
}

#[test]
fn resolve_calls_registered_function() {
    let mut registry = ResolverRegistry::new();
    registry.register(
        "text",
        Arc::new(|field: &ModelField| Some(format!("keyword:{}", field.field_id))),
    );
    assert_eq!(registry.resolve("text", &text_field()).as_deref(), Some("keyword:title"));
}

#[test]
fn resolver_may_return_none_per_field() {
    let registry = ResolverRegistry::from_plugins(&[IndexFieldPlugin::new("text").with_unmapped_type(
        |field: &ModelField| (field.field_id == "slug").then(|| "keyword".to_string()),
    )]);
    assert_eq!(registry.resolve("text", &text_field()), None);
    let slug = ModelField::new("slug", "text@slug", "text");
    assert_eq!(registry.resolve("text", &slug).as_deref(), Some("keyword"));
}

#[test]
fn plugins_without_resolver_are_skipped() {
    let registry = ResolverRegistry::from_plugins(&[
        IndexFieldPlugin::constant("datetime", "date"),
        IndexFieldPlugin::new("datetime"),
        IndexFieldPlugin::new("text"),
    ]);
    assert_eq!(registry.len(), 1);
    assert!(!registry.contains("text"));
    let field = ModelField::new("d", "d", "datetime");
    assert_eq!(registry.resolve("datetime", &field).as_deref(), Some("date"));
}

#[test]
fn later_resolver_plugin_wins() {
    let registry = ResolverRegistry::from_plugins(&[
        IndexFieldPlugin::constant("number", "float"),
        IndexFieldPlugin::constant("number", "long"),
    ]);
    let field = ModelField::new("n", "n", "number");
    assert_eq!(registry.resolve("number", &field).as_deref(), Some("long"));
}

#[test]
fn resolver_for_exposes_registered_resolver() {
    let registry = ResolverRegistry::from_plugins(&[IndexFieldPlugin::constant("datetime", "date")]);
    let field = ModelField::new("d", "d", "datetime");
    let resolved = registry.resolver_for("datetime").map(|r| r.resolve(&field));
    assert_eq!(resolved, Some(Some("date".to_string())));
    assert!(registry.resolver_for("text").is_none());
}

#[test]
fn resolving_leaves_field_untouched() {
    let registry = ResolverRegistry::from_plugins(&[IndexFieldPlugin::constant("text", "keyword")]);
    let field = text_field();
    let before = field.clone();
    let _ = registry.resolve("text", &field);
    assert_eq!(field, before);
}

#[test]
fn debug_output_lists_types_not_closures() {
    let registry = ResolverRegistry::from_plugins(&[IndexFieldPlugin::constant("text", "keyword")]);
    let out = format!("{registry:?}");
    assert!(out.contains("text"));
}
