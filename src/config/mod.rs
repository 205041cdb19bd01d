pub mod cli;
pub mod toml_config;

use crate::core::hash_store::DEFAULT_BUCKET_COUNT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bucket_count, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Settings the planner runs with once flags and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub data_file: String,
    pub bucket_count: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl PlannerConfig {
    /// Applies every value present in `file` on top of `self`.
    pub fn merge_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(data_file) = file.data_file() {
            self.data_file = data_file.to_string();
        }
        if let Some(bucket_count) = file.bucket_count() {
            self.bucket_count = bucket_count;
        }
        self
    }
}

impl ConfigProvider for PlannerConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn bucket_count(&self) -> usize {
        self.bucket_count
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)?;
        validate_bucket_count("bucket_count", self.bucket_count)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-planner")]
#[command(about = "Look up courses and list them in order from a comma-separated catalog")]
pub struct CliConfig {
    /// Course data file [default: data.csv]
    #[arg(long)]
    pub data_file: Option<String>,

    /// Bucket count for the hash table store [default: 100]
    #[arg(long)]
    pub buckets: Option<usize>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the config file, then explicit flags.
    pub fn resolve(&self) -> Result<PlannerConfig> {
        let mut resolved = PlannerConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            resolved = resolved.merge_toml(&file);
        }

        if let Some(data_file) = &self.data_file {
            resolved.data_file = data_file.clone();
        }
        if let Some(buckets) = self.buckets {
            resolved.bucket_count = buckets;
        }

        resolved.validate()?;
        Ok(resolved)
    }
}
