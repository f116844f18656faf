mod common;

use common::{field, object};
use fieldmap_mapping::{
    AncestorRef, CapabilityRegistry, FieldTypePlugin, IndexFieldPlugin, MappingError,
    ResolverRegistry, flatten, identifier_for,
};
use pretty_assertions::assert_eq;

fn registries() -> (CapabilityRegistry, ResolverRegistry) {
    let resolvers = ResolverRegistry::from_plugins(&[IndexFieldPlugin::constant("datetime", "date")]);
    let capabilities = CapabilityRegistry::from_plugins(&[
        FieldTypePlugin::new("text", true, false).with_full_text_search(true),
        FieldTypePlugin::new("number", true, true),
        FieldTypePlugin::new("datetime", true, true),
        FieldTypePlugin::new("object", false, false),
    ]);
    (capabilities, resolvers)
}

// ── identifier_for ───────────────────────────────────────────────

#[test]
fn top_level_identifier_is_field_id() {
    assert_eq!(identifier_for(&[], "title"), "title");
}

#[test]
fn nested_identifier_joins_ancestor_field_ids() {
    let ancestors = vec![
        AncestorRef::new("a", "object@a", "object"),
        AncestorRef::new("b", "object@b", "object"),
    ];
    assert_eq!(identifier_for(&ancestors, "c"), "a.b.c");
}

// ── flatten ──────────────────────────────────────────────────────

#[test]
fn empty_field_list_yields_empty_mapping() {
    let (caps, resolvers) = registries();
    let mapping = flatten(&[], &caps, &resolvers, &[]).unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn leaf_entry_copies_capability_and_source() {
    let (caps, resolvers) = registries();
    let title = field("title", "text");
    let mapping = flatten(std::slice::from_ref(&title), &caps, &resolvers, &[]).unwrap();

    let entry = mapping.get("title").unwrap();
    assert_eq!(entry.field_type, "text");
    assert!(entry.is_searchable);
    assert!(!entry.is_sortable);
    assert_eq!(entry.full_text_search, Some(true));
    assert_eq!(entry.unmapped_type, None);
    assert_eq!(entry.keyword, None);
    assert_eq!(entry.path, None);
    assert!(!entry.is_system_field);
    assert!(entry.ancestors.is_empty());
    assert_eq!(entry.source_field, title);
}

#[test]
fn unmapped_type_comes_from_resolver_registry() {
    let (caps, resolvers) = registries();
    let mapping = flatten(&[field("publishedOn", "datetime")], &caps, &resolvers, &[]).unwrap();
    assert_eq!(mapping.get("publishedOn").unwrap().unmapped_type.as_deref(), Some("date"));
}

#[test]
fn supplied_ancestors_prefix_every_identifier() {
    let (caps, resolvers) = registries();
    let parent = AncestorRef::new("meta", "object@meta", "object");
    let mapping = flatten(
        &[field("title", "text")],
        &caps,
        &resolvers,
        std::slice::from_ref(&parent),
    )
    .unwrap();

    let entry = mapping.get("meta.title").unwrap();
    assert_eq!(entry.ancestors, vec![parent]);
}

#[test]
fn composite_children_are_inserted_before_parent() {
    let (caps, resolvers) = registries();
    let fields = vec![object("address", vec![field("street", "text"), field("zip", "number")])];
    let mapping = flatten(&fields, &caps, &resolvers, &[]).unwrap();

    let order: Vec<&str> = mapping.identifiers().collect();
    assert_eq!(order, vec!["address.street", "address.zip", "address"]);

    let container = mapping.get("address").unwrap();
    assert_eq!(container.field_type, "object");
    assert!(container.ancestors.is_empty());
    assert_eq!(container.source_field.children().len(), 2);
}

#[test]
fn children_carry_parent_ancestry() {
    let (caps, resolvers) = registries();
    let fields = vec![object("address", vec![field("street", "text")])];
    let mapping = flatten(&fields, &caps, &resolvers, &[]).unwrap();

    let street = mapping.get("address.street").unwrap();
    assert_eq!(
        street.ancestors,
        vec![AncestorRef::new("address", "object@address", "object")]
    );
    assert_eq!(street.document_path(), "object@address.text@street");
}

#[test]
fn composite_with_empty_children_is_a_plain_entry() {
    let (caps, resolvers) = registries();
    let fields = vec![object("empty", vec![])];
    let mapping = flatten(&fields, &caps, &resolvers, &[]).unwrap();
    assert_eq!(mapping.len(), 1);
    assert!(mapping.contains("empty"));
}

#[test]
fn sibling_collision_overwrites_in_place() {
    let (caps, resolvers) = registries();
    let first = field("title", "text");
    let second = field("title", "number");
    let fields = vec![first, field("other", "text"), second];
    let mapping = flatten(&fields, &caps, &resolvers, &[]).unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.position("title"), Some(0));
    let entry = mapping.get("title").unwrap();
    assert_eq!(entry.field_type, "number");
    assert_eq!(entry.source_field.storage_id, "number@title");
}

#[test]
fn unknown_leaf_type_fails() {
    let (caps, resolvers) = registries();
    let err = flatten(&[field("x", "unknown-xyz")], &caps, &resolvers, &[]).unwrap_err();
    match err {
        MappingError::UnrecognizedFieldType { field_type, field_id } => {
            assert_eq!(field_type, "unknown-xyz");
            assert_eq!(field_id, "x");
        }
    }
}

#[test]
fn unknown_type_deep_in_tree_aborts_whole_walk() {
    let (caps, resolvers) = registries();
    let fields = vec![
        field("title", "text"),
        object("a", vec![object("b", vec![field("bad", "geo")])]),
    ];
    let result = flatten(&fields, &caps, &resolvers, &[]);
    assert!(matches!(
        result,
        Err(MappingError::UnrecognizedFieldType { ref field_type, .. }) if field_type == "geo"
    ));
}

#[test]
fn unknown_composite_type_fails_before_visiting_children() {
    let (caps, resolvers) = registries();
    let fields = vec![field("group", "repeater").with_children(vec![field("bad", "geo")])];
    let result = flatten(&fields, &caps, &resolvers, &[]);
    assert!(matches!(
        result,
        Err(MappingError::UnrecognizedFieldType { ref field_type, .. }) if field_type == "repeater"
    ));
}
