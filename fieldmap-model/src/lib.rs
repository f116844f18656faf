//! Content model input types for fieldmap.
//!
//! Defines the user-authored field tree that the mapping engine flattens:
//! - [`ModelField`] — one field definition (ids, type tag, optional settings)
//! - [`FieldSettings`] — per-field settings, including nested child fields
//! - [`AncestorRef`] — one level of nesting above a field
//!
//! These types mirror the JSON documents the CMS layer stores for a content
//! model, so they deserialize directly from camelCase JSON.

mod ancestor;
mod field;

pub use ancestor::AncestorRef;
pub use field::{FieldSettings, ModelField};
