//! Generation outcomes: per-resource-type info, failure counters and diagnostics.

use std::fmt;

use awslist_model::ShapeType;
use serde::Serialize;

use crate::error::ResolveError;

/// What was generated for a resource type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GeneratedResourceInfo {
    /// Resource type (e.g., `aws_instance`).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Whether instances carry tags.
    pub tags: bool,
    /// Whether a creation time is extracted.
    pub creation_time: bool,
    /// Whether instances are filtered by owner.
    pub owner: bool,
}

/// Aggregate failure classes counted across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The list operation requires input.
    RequiredInputFields,
    /// No unique output field.
    NoOutputField,
    /// No list operation candidate.
    NoListOperationCandidate,
    /// No unique resource identifier.
    NoResourceId,
}

/// Per-class failure counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureCounts {
    /// List functions with required input fields.
    pub required_input_fields: usize,
    /// Resource types without a unique output field.
    pub no_output_field: usize,
    /// Resource types without a list operation candidate.
    pub no_list_operation_candidate: usize,
    /// Resource types without a resource identifier.
    pub no_resource_id: usize,
}

impl FailureCounts {
    /// Increment the counter of `class`.
    pub fn record(&mut self, class: FailureClass) {
        *self.counter_mut(class) += 1;
    }

    /// Current value of the counter of `class`.
    #[must_use]
    pub fn get(&self, class: FailureClass) -> usize {
        match class {
            FailureClass::RequiredInputFields => self.required_input_fields,
            FailureClass::NoOutputField => self.no_output_field,
            FailureClass::NoListOperationCandidate => self.no_list_operation_candidate,
            FailureClass::NoResourceId => self.no_resource_id,
        }
    }

    /// Sum of all counters.
    #[must_use]
    pub fn total(&self) -> usize {
        self.required_input_fields
            + self.no_output_field
            + self.no_list_operation_candidate
            + self.no_resource_id
    }

    fn counter_mut(&mut self, class: FailureClass) -> &mut usize {
        match class {
            FailureClass::RequiredInputFields => &mut self.required_input_fields,
            FailureClass::NoOutputField => &mut self.no_output_field,
            FailureClass::NoListOperationCandidate => &mut self.no_list_operation_candidate,
            FailureClass::NoResourceId => &mut self.no_resource_id,
        }
    }
}

/// A resource type that was not generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Resource type.
    pub resource_type: String,
    /// Service the resource type is mapped to.
    pub service: String,
    /// Why it was skipped.
    pub error: ResolveError,
}

/// Where a near-miss member was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberScope {
    /// A member of the output list element.
    Output,
    /// A member of the operation input.
    Input,
}

impl fmt::Display for MemberScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("output"),
            Self::Input => f.write_str("input"),
        }
    }
}

/// Kinds of non-fatal findings worth a human look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A member resembling `Tags` or `OwnerId` without matching exactly.
    NearMiss {
        /// Where the member was found.
        scope: MemberScope,
        /// Member name.
        field: String,
        /// Member type.
        shape_type: ShapeType,
    },
    /// The known-tagged set and the tags heuristic disagree.
    TagMismatch {
        /// Whether the resource type is in the known-tagged set.
        known_tagged: bool,
        /// Whether a tags fragment was synthesized.
        synthesized: bool,
    },
    /// A creation-time member of an unsupported type.
    UnsupportedCreationTime {
        /// Member name.
        field: String,
        /// Member type.
        shape_type: ShapeType,
    },
    /// The mapped service is absent from the API model.
    UnknownService {
        /// Service package name.
        service: String,
    },
}

/// A diagnostic attached to a resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Resource type.
    pub resource_type: String,
    /// What was found.
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rt = &self.resource_type;
        match &self.kind {
            DiagnosticKind::NearMiss {
                scope,
                field,
                shape_type,
            } => write!(f, "{rt}: {scope} member {field} ({shape_type}) resembles a known field"),
            DiagnosticKind::TagMismatch {
                known_tagged,
                synthesized,
            } => write!(
                f,
                "{rt}: known tagged = {known_tagged}, tags fragment synthesized = {synthesized}"
            ),
            DiagnosticKind::UnsupportedCreationTime { field, shape_type } => {
                write!(f, "{rt}: uncovered creation time type {shape_type} of {field}")
            }
            DiagnosticKind::UnknownService { service } => {
                write!(f, "{rt}: service {service} not found in API model")
            }
        }
    }
}

/// Everything a run reports besides the generated code.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Failure counters.
    pub counts: FailureCounts,
    /// Resource types that were not generated.
    pub skipped: Vec<Skipped>,
    /// Resource types on the exclusion list.
    pub excluded: Vec<String>,
    /// Non-fatal findings.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of generated list functions.
    pub generated: usize,
}

impl GenerationReport {
    /// Record a skipped resource type, counting it if its error is counted.
    pub fn skip(&mut self, resource_type: &str, service: &str, error: ResolveError) {
        if let Some(class) = error.failure_class() {
            self.counts.record(class);
        }
        self.skipped.push(Skipped {
            resource_type: resource_type.to_owned(),
            service: service.to_owned(),
            error,
        });
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "list functions with required fields: {}",
            self.counts.required_input_fields
        )?;
        writeln!(
            f,
            "unable to find output field name: {}",
            self.counts.no_output_field
        )?;
        writeln!(
            f,
            "resources without list operation candidate: {}",
            self.counts.no_list_operation_candidate
        )?;
        writeln!(f, "no resource ID found: {}", self.counts.no_resource_id)?;
        write!(
            f,
            "generated: {}, skipped: {}, excluded: {}, diagnostics: {}",
            self.generated,
            self.skipped.len(),
            self.excluded.len(),
            self.diagnostics.len()
        )
    }
}
