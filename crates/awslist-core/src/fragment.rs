//! Structured auxiliary fragments.
//!
//! Fragments describe what per-instance data a generated unit extracts. Only
//! emitters turn them into source text.

use serde::Serialize;

/// How tags are read from a list element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TagsFragment {
    /// `Tags` is a list of `{Key, Value}` structures.
    List {
        /// Member name.
        field: String,
    },
    /// `Tags` is a string map.
    Map {
        /// Member name.
        field: String,
    },
}

impl TagsFragment {
    /// The member holding the tags.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::List { field } | Self::Map { field } => field,
        }
    }
}

/// Representation of a creation-time member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// RFC 3339 string with millisecond precision.
    String,
    /// A native timestamp value.
    Native,
    /// Milliseconds since the Unix epoch.
    EpochMillis,
}

/// Creation-time extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationTimeFragment {
    /// Member name (e.g., `LaunchTime`).
    pub field: String,
    /// How the member encodes the time.
    pub source: TimestampSource,
}

/// Skip instances not owned by the caller's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerFilterFragment {
    /// Member holding the owning account id.
    pub field: String,
}
