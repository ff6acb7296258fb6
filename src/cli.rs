use clap::Parser;
use std::path::PathBuf;

/// Turn chart values (and optional values metadata) into form groups
#[derive(Parser, Debug, Clone)]
#[command(name = "chartform", version, about, long_about = None)]
pub struct Cli {
    /// Values document (.json, .yaml, .yml or .toml)
    #[arg(short, long, env = "CHARTFORM_VALUES")]
    pub values: PathBuf,

    /// Metadata document mirroring the values keys
    #[arg(short, long, env = "CHARTFORM_METADATA")]
    pub metadata: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long, env = "CHARTFORM_CONFIG", default_value = "chartform.toml")]
    pub config: PathBuf,

    /// Name for groups without label or key (the root group)
    #[arg(long, env = "CHARTFORM_DEFAULT_GROUP_NAME")]
    pub default_group_name: Option<String>,

    /// Only emit required fields that are still blank
    #[arg(long, env = "CHARTFORM_QUICK_START", num_args = 0..=1, default_missing_value = "true")]
    pub quick_start: Option<bool>,

    /// Pretty-print the JSON output
    #[arg(long, env = "CHARTFORM_PRETTY", num_args = 0..=1, default_missing_value = "true")]
    pub pretty: Option<bool>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Re-run whenever the values or metadata file changes
    #[arg(short, long)]
    pub watch: bool,
}

impl Cli {
    /// Files whose changes should trigger a re-run
    pub fn input_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.values.clone()];
        if let Some(metadata) = &self.metadata {
            paths.push(metadata.clone());
        }
        paths
    }
}
