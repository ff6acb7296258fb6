//! # chartform - values + metadata to form groups
//!
//! chartform turns a chart's values tree, optionally decorated by a values
//! metadata tree (labels, descriptions, options, validation hints), into a flat
//! list of form groups a UI can render as a dynamic form.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let values = json!({ "image": { "repository": "nginx", "tag": null } });
//! let metadata = json!({ "image": { "tag": { "label": "Image tag", "required": true } } });
//!
//! let groups = chartform::transform(&values, &metadata);
//! assert_eq!(groups[0].id, "image");
//! assert_eq!(groups[0].form_data[1].label, "Image tag");
//! assert_eq!(groups[0].form_data[1].initial_value, json!(""));
//! ```
//!
//! ## Layout
//!
//! - **Domain**: tagged trees, metadata and form records
//! - **Transform**: merger, walker and normalizer
//! - **Loader**: JSON / YAML / TOML input documents
//! - **Config** and **CLI**: the `chartform` binary

pub mod cli;
pub mod config;
pub mod domain;
pub mod loader;
pub mod transform;

pub use domain::{FormField, FormGroup};
pub use transform::{
    flatten_values, quick_start, transform, transform_with, validate_label, TransformOptions,
};

use crate::cli::Cli;
use crate::config::Settings;

/// Load the inputs named on the command line, run the transform and render
/// the JSON output.
///
/// # Arguments
///
/// * `cli` - Parsed command line (input paths)
/// * `settings` - Resolved settings (transform defaults, output options)
///
/// # Returns
///
/// The serialized form groups
pub fn run_once(cli: &Cli, settings: &Settings) -> anyhow::Result<String> {
    let values = loader::load_tree(&cli.values)?;
    let metadata = match &cli.metadata {
        Some(path) => loader::load_optional_tree(path)?,
        None => serde_json::Value::Object(Default::default()),
    };

    let mut groups = transform_with(&values, &metadata, &settings.transform_options());
    if settings.output.quick_start {
        groups = quick_start(&groups);
    }
    tracing::info!("Produced {} form groups from {}", groups.len(), cli.values.display());

    let rendered = if settings.output.pretty {
        serde_json::to_string_pretty(&groups)?
    } else {
        serde_json::to_string(&groups)?
    };
    Ok(rendered)
}
