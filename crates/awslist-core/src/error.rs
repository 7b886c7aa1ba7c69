//! Error types for the generator.

use std::path::PathBuf;

use awslist_model::ModelError;

use crate::report::FailureClass;

/// Run-level error. Any of these aborts the whole generation run.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The API model could not be loaded.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogIo {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML for the catalog schema.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    /// A generated unit could not be rendered.
    #[error("failed to render {resource_type}")]
    Render {
        /// Resource type being rendered.
        resource_type: String,
        /// Underlying formatting error.
        #[source]
        source: std::fmt::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON summary could not be serialized.
    #[error("failed to serialize summary: {0}")]
    Summary(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for generation runs.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Why a single resource type could not be resolved.
///
/// These never abort a run: the resource type is logged, counted and skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The catalog maps the resource type to no service.
    #[error("resource type is not mapped to a service")]
    UnmappedResourceType,

    /// The mapped service is not part of the API model.
    #[error("service {0} not found in API model")]
    UnknownService(String),

    /// No operation name matched any prefix and plural.
    #[error("no list operation candidate found")]
    NoListOperationCandidate,

    /// The manual operation override names an operation the service lacks.
    #[error("override operation {0} not found in service")]
    OverrideOperationNotFound(String),

    /// No candidate operation has exactly one list member of the wanted kind.
    #[error("no list operation candidate with a list of {0} found")]
    MissingOutputField(&'static str),

    /// More than one candidate operation has a single matching list member.
    #[error("multiple list operation candidates found: {}", .0.join(", "))]
    AmbiguousOutputField(Vec<String>),

    /// The manual output-field override is not a member of any candidate output.
    #[error("override output field {0} not found in any candidate output")]
    OverrideOutputFieldNotFound(String),

    /// The only list found holds strings, which carry no identifier member.
    #[error("output field {field} of {operation} is a list of strings")]
    StringOutputField {
        /// Operation exposing the list.
        operation: String,
        /// The list member.
        field: String,
    },

    /// The operation requires input the generated call cannot provide.
    #[error("required input fields: {}", .0.join(", "))]
    RequiredInputFields(Vec<String>),

    /// No identifier member could be determined.
    #[error("no resource ID found")]
    NoResourceId,

    /// Several name-like members qualify as identifier.
    #[error("multiple name field candidates for resource ID: {}", .0.join(", "))]
    AmbiguousResourceId(Vec<String>),
}

impl ResolveError {
    /// The aggregate failure counter this error is reported under, if any.
    #[must_use]
    pub fn failure_class(&self) -> Option<FailureClass> {
        match self {
            Self::NoListOperationCandidate | Self::OverrideOperationNotFound(_) => {
                Some(FailureClass::NoListOperationCandidate)
            }
            Self::MissingOutputField(_)
            | Self::AmbiguousOutputField(_)
            | Self::OverrideOutputFieldNotFound(_) => Some(FailureClass::NoOutputField),
            Self::RequiredInputFields(_) => Some(FailureClass::RequiredInputFields),
            Self::NoResourceId | Self::AmbiguousResourceId(_) => Some(FailureClass::NoResourceId),
            Self::UnmappedResourceType
            | Self::UnknownService(_)
            | Self::StringOutputField { .. } => None,
        }
    }
}
