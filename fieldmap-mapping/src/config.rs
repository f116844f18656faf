//! TOML field-type configuration.
//!
//! Lets deployments declare extra field types (or override built-in ones)
//! without code changes:
//!
//! ```toml
//! [mapping]
//! max-nesting-depth = 16
//!
//! [[field-type]]
//! name = "geo"
//! searchable = true
//! sortable = false
//! unmapped-type = "geo_point"
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::plugin::{FieldTypePlugin, IndexFieldPlugin, PluginSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Deepest model nesting accepted when no config overrides it.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Parsed field-type configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypeConfig {
    #[serde(default)]
    pub mapping: MappingSection,
    #[serde(default, rename = "field-type")]
    pub field_types: Vec<FieldTypeEntry>,
}

/// General mapping limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MappingSection {
    /// Enforced by callers before mapping; the engine itself recurses freely.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

impl Default for MappingSection {
    fn default() -> Self {
        Self {
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

/// One `[[field-type]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FieldTypeEntry {
    pub name: String,
    pub searchable: bool,
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text_search: Option<bool>,
    /// Constant backend type applied to every field of this type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmapped_type: Option<String>,
}

impl FieldTypeConfig {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a config file. A missing file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            field_types = config.field_types.len(),
            "Loaded field type config"
        );
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(pos) = self.field_types.iter().position(|e| e.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "field-type #{} has an empty name",
                pos + 1
            )));
        }
        if self.mapping.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid(
                "max-nesting-depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Plugin records for the configured types, in file order.
    pub fn plugins(&self) -> PluginSet {
        let mut set = PluginSet::new();
        for entry in &self.field_types {
            let mut plugin = FieldTypePlugin::new(&entry.name, entry.searchable, entry.sortable);
            plugin.full_text_search = entry.full_text_search;
            set.field_types.push(plugin);

            if let Some(backend_type) = &entry.unmapped_type {
                set.index_fields
                    .push(IndexFieldPlugin::constant(&entry.name, backend_type));
            }
        }
        set
    }
}
