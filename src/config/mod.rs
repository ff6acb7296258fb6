use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;
pub mod watcher;

pub use watcher::InputWatcher;

use crate::cli::Cli;
use crate::transform::normalizer::DEFAULT_FIELD_TYPE;
use crate::transform::TransformOptions;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub transform: TransformSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Defaults applied while building form groups
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransformSettings {
    /// Name of groups that have no label and no key (the root group)
    #[serde(default)]
    pub default_group_name: String,
    /// Type tag for fields whose metadata declares none; unset to add none
    #[serde(default = "default_field_type")]
    pub default_field_type: Option<String>,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            default_group_name: String::new(),
            default_field_type: default_field_type(),
        }
    }
}

fn default_field_type() -> Option<String> {
    Some(DEFAULT_FIELD_TYPE.to_string())
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputSettings {
    /// Pretty-print the JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Emit only required fields that are still blank
    #[serde(default)]
    pub quick_start: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            quick_start: false,
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Self::builder()?
            .add_source(File::from(cli.config.clone()).required(false))
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // Apply CLI overrides (CLI > env vars > config file)
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `<root>/chartform.{toml,yaml,json}` if present
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("chartform");
        let s = Self::builder()?
            .add_source(File::from(config_path).required(false))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, anyhow::Error> {
        Ok(Config::builder()
            .set_default("transform.default_group_name", "")?
            .set_default("transform.default_field_type", DEFAULT_FIELD_TYPE)?
            .set_default("output.pretty", true)?
            .set_default("output.quick_start", false)?)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(name) = &cli.default_group_name {
            self.transform.default_group_name = name.clone();
        }
        if let Some(pretty) = cli.pretty {
            self.output.pretty = pretty;
        }
        if let Some(quick_start) = cli.quick_start {
            self.output.quick_start = quick_start;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Options handed to the transform
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            default_group_name: self.transform.default_group_name.clone(),
            default_field_type: self.transform.default_field_type.clone(),
        }
    }
}
