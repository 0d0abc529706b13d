use serde::Serialize;

/// Severity of a user-facing message; the color decision is made from this
/// in the views, never in presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Success,
    Error,
    Neutral,
}
