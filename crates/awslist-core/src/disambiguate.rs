//! Collapse candidate sets into a single match.

/// Outcome of collapsing a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disambiguation<T> {
    /// Exactly one candidate (or an override).
    Unique(T),
    /// No candidate.
    Absent,
    /// More than one candidate.
    Ambiguous(Vec<T>),
}

/// Pick the single match among heuristic candidates.
///
/// An override, when present, is returned as-is and the heuristic is not run.
pub fn disambiguate<T>(
    overridden: Option<T>,
    candidates: impl FnOnce() -> Vec<T>,
) -> Disambiguation<T> {
    if let Some(value) = overridden {
        return Disambiguation::Unique(value);
    }

    let mut candidates = candidates();
    match candidates.len() {
        0 => Disambiguation::Absent,
        1 => candidates
            .pop()
            .map_or(Disambiguation::Absent, Disambiguation::Unique),
        _ => Disambiguation::Ambiguous(candidates),
    }
}
