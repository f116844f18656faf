//! Search index field mapping for user-defined content models.
//!
//! Given a content model's field tree and the field-type plugins registered at
//! startup, this crate derives a flat [`Mapping`] from dotted identifiers
//! (`address.street`) to [`MappingEntry`] values describing how each field is
//! indexed: searchable, sortable, full-text, and which backend-native type to
//! use when it differs from the logical one.
//!
//! - [`CapabilityRegistry`] — field type name to search/sort capabilities
//! - [`ResolverRegistry`] — field type name to unmapped-type resolver
//! - [`system_fields`] — entries present on every content entry
//! - [`flatten`] — recursive walk of the user field tree
//! - [`build_mapping`] / [`MappingBuilder`] — the public entry points
//!
//! Registries are built once and only read afterwards, so a [`MappingBuilder`]
//! can be shared across threads without locking.

mod assembler;
mod builtin;
mod config;
mod error;
mod flatten;
mod mapping;
mod plugin;
mod registry;
mod system;

pub use assembler::{MappingBuilder, build_mapping};
pub use config::{DEFAULT_MAX_NESTING_DEPTH, FieldTypeConfig, FieldTypeEntry, MappingSection};
pub use error::{ConfigError, ConfigResult, MappingError, MappingResult};
pub use flatten::{flatten, identifier_for};
pub use mapping::{Mapping, MappingEntry};
pub use plugin::{FieldTypePlugin, IndexFieldPlugin, PluginSet, SharedResolver, UnmappedTypeResolver};
pub use registry::{CapabilityRegistry, FieldTypeCapability, ResolverRegistry};
pub use system::{SYSTEM_FIELD_IDS, system_fields};

pub use fieldmap_model::{AncestorRef, FieldSettings, ModelField};
