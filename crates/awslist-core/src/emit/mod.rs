//! Emitters turn resolutions into generated source files.

mod go;
mod rust;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resolve::Resolution;

pub use go::GoEmitter;
pub use rust::RustEmitter;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code is generated. DO NOT EDIT.";

/// Renders one source unit per resolved resource type.
pub trait Emitter: fmt::Debug {
    /// Output file name of a resource type, relative to the output directory.
    fn file_name(&self, resource_type: &str) -> String;

    /// Render the list function of a single resolution.
    fn render(&self, resolution: &Resolution) -> Result<String, fmt::Error>;

    /// Render an index file over all resolutions, if the target needs one.
    ///
    /// Resolutions are passed in resource-type order.
    fn render_index(
        &self,
        _resolutions: &[Resolution],
    ) -> Result<Option<(String, String)>, fmt::Error> {
        Ok(None)
    }
}

/// Language of the generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// AWS SDK for Rust.
    #[default]
    Rust,
    /// aws-sdk-go-v2.
    Go,
}

impl Target {
    /// The emitter for this target.
    #[must_use]
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Self::Rust => Box::new(RustEmitter),
            Self::Go => Box::new(GoEmitter),
        }
    }

    /// Returns the name of this target.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" => Ok(Self::Rust),
            "go" => Ok(Self::Go),
            other => Err(format!("unknown target: {other} (expected rust or go)")),
        }
    }
}
