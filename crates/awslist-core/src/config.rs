//! Generator configuration.
//!
//! Defaults can be overridden by environment variables, which in turn are
//! overridden by command-line flags.

use std::path::PathBuf;

use crate::emit::Target;
use crate::error::{CodegenError, CodegenResult};

/// Configuration of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Root of the API model directory.
    pub models_dir: PathBuf,
    /// Catalog TOML file.
    pub catalog: PathBuf,
    /// Directory receiving the generated files.
    pub output_dir: PathBuf,
    /// Language of the generated code.
    pub target: Target,
    /// Log level.
    pub log_level: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            catalog: PathBuf::from("catalog/aws.toml"),
            output_dir: PathBuf::from("generated"),
            target: Target::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl CodegenConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> CodegenResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CodegenResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("AWSLIST_MODELS_DIR") {
            config.models_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("AWSLIST_CATALOG") {
            config.catalog = PathBuf::from(v);
        }
        if let Some(v) = lookup("AWSLIST_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("AWSLIST_TARGET") {
            config.target = v.parse().map_err(CodegenError::Config)?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }
}
