//! Shapes and shape references.

use std::collections::BTreeMap;
use std::fmt;

use crate::definition::ShapeDefinition;

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A structure with named members.
    Structure,
    /// A list with a single element shape.
    List,
    /// A map with key and value shapes.
    Map,
    /// A string scalar.
    String,
    /// A native timestamp.
    Timestamp,
    /// A 64-bit integer.
    Long,
    /// A 32-bit integer.
    Integer,
    /// A boolean.
    Boolean,
    /// A double-precision float.
    Double,
    /// A single-precision float.
    Float,
    /// Binary data.
    Blob,
    /// Anything else (`union`, `document`, ...).
    Other,
}

impl ShapeType {
    /// Parse a botocore `type` value.
    #[must_use]
    pub fn parse(type_name: &str) -> Self {
        match type_name {
            "structure" => Self::Structure,
            "list" => Self::List,
            "map" => Self::Map,
            "string" => Self::String,
            "timestamp" => Self::Timestamp,
            "long" => Self::Long,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "double" => Self::Double,
            "float" => Self::Float,
            "blob" => Self::Blob,
            _ => Self::Other,
        }
    }

    /// Returns the botocore name of this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::List => "list",
            Self::Map => "map",
            Self::String => "string",
            Self::Timestamp => "timestamp",
            Self::Long => "long",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Float => "float",
            Self::Blob => "blob",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved shape of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Shape name, unique within its service.
    pub name: String,
    /// Parsed shape kind.
    pub shape_type: ShapeType,
    /// The raw `type` value, kept for diagnostics on [`ShapeType::Other`].
    pub type_name: String,
    /// Structure members: member name -> target shape name.
    pub members: BTreeMap<String, String>,
    /// List element shape name.
    pub element: Option<String>,
    /// Map key shape name.
    pub key: Option<String>,
    /// Map value shape name.
    pub value: Option<String>,
    /// Required structure member names.
    pub required: Vec<String>,
}

impl Shape {
    /// Build a shape from its definition.
    #[must_use]
    pub fn from_definition(name: impl Into<String>, def: ShapeDefinition) -> Self {
        Self {
            name: name.into(),
            shape_type: ShapeType::parse(&def.type_name),
            type_name: def.type_name,
            members: def
                .members
                .into_iter()
                .map(|(member, target)| (exportable_name(&member), target.shape))
                .collect(),
            element: def.member.map(|t| t.shape),
            key: def.key.map(|t| t.shape),
            value: def.value.map(|t| t.shape),
            required: def.required.iter().map(|m| exportable_name(m)).collect(),
        }
    }

    /// Whether the shape is of the given kind.
    #[must_use]
    pub fn is(&self, shape_type: ShapeType) -> bool {
        self.shape_type == shape_type
    }
}

/// Export a member name the way the SDKs do: upper-case its first letter.
///
/// Botocore definitions mix `camelCase` and `PascalCase` member names
/// (`projects` vs `Projects`); every name the generator matches on is the
/// exported form.
#[must_use]
pub fn exportable_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// A shape together with the member name it was reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRef<'a> {
    /// Name of the containing member (e.g., `Projects`).
    pub name: &'a str,
    /// The member's target shape.
    pub shape: &'a Shape,
}

impl ShapeRef<'_> {
    /// Kind of the referenced shape.
    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type
    }
}
