//! Library half of the `fieldmap` command: argument parsing, model loading
//! and mapping rendering. `main.rs` only wires up logging and stdout.

use anyhow::{Context, Result, bail};
use clap::Parser;
use fieldmap_mapping::{
    DEFAULT_MAX_NESTING_DEPTH, FieldTypeConfig, Mapping, MappingBuilder, ModelField, PluginSet,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "fieldmap")]
#[command(about = "Print the search index field mapping of a content model")]
pub struct Args {
    /// Content model JSON: a field array or an object with a `fields` key
    pub model: PathBuf,

    /// TOML file declaring extra or overriding field types
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not register the standard CMS field types
    #[arg(long)]
    pub no_builtin: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Reads a model file and returns its top-level fields, if any.
///
/// Accepts either a bare field array or a model object with a `fields` key.
/// A `null` field list means the model has no user fields.
pub fn load_model(path: &Path) -> Result<Option<Vec<ModelField>>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    let document: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse model {}", path.display()))?;

    let fields = match document {
        Value::Array(fields) => Value::Array(fields),
        Value::Object(mut model) => match model.remove("fields") {
            Some(fields) => fields,
            None => bail!("model {} has no \"fields\" key", path.display()),
        },
        _ => bail!("model {} must be a field array or an object", path.display()),
    };

    serde_json::from_value(fields)
        .with_context(|| format!("invalid field list in model {}", path.display()))
}

/// Rejects models nested deeper than `max_depth` levels.
pub fn check_nesting(fields: &[ModelField], max_depth: usize) -> Result<()> {
    for field in fields {
        let depth = field.nesting_depth();
        if depth > max_depth {
            bail!(
                "field \"{}\" nests {} levels deep, limit is {}",
                field.field_id,
                depth,
                max_depth
            );
        }
    }
    Ok(())
}

/// Assembles the plugin set from built-ins and the optional config file.
pub fn plugin_set(args: &Args) -> Result<(PluginSet, usize)> {
    let mut plugins = if args.no_builtin {
        PluginSet::new()
    } else {
        PluginSet::builtin()
    };
    let mut max_depth = DEFAULT_MAX_NESTING_DEPTH;

    if let Some(path) = &args.config {
        let config = FieldTypeConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        max_depth = config.mapping.max_nesting_depth;
        plugins.extend(config.plugins());
    }

    debug!(
        field_types = plugins.field_types.len(),
        index_fields = plugins.index_fields.len(),
        max_depth,
        "Plugin set ready"
    );
    Ok((plugins, max_depth))
}

/// Builds the mapping for `args.model`.
pub fn build(args: &Args) -> Result<Mapping> {
    let (plugins, max_depth) = plugin_set(args)?;
    let fields = load_model(&args.model)?;
    if let Some(fields) = &fields {
        check_nesting(fields, max_depth)?;
    }

    let builder = MappingBuilder::from_plugin_set(&plugins);
    let mapping = builder
        .build(fields.as_deref())
        .with_context(|| format!("failed to map model {}", args.model.display()))?;

    info!(
        model = %args.model.display(),
        entries = mapping.len(),
        "Mapping built"
    );
    Ok(mapping)
}

/// Builds the mapping and renders it as JSON.
pub fn run(args: &Args) -> Result<String> {
    let mapping = build(args)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&mapping)?
    } else {
        serde_json::to_string(&mapping)?
    };
    Ok(json)
}
