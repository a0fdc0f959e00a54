//! Transfer-record shapes for the PQRS workflow.
//!
//! # Responsibility
//! - Define the flat record exchanged between service and presentation
//!   layers, plus the summary shapes it references by value.
//! - Keep diagnostic rendering uniform across all shapes.
//!
//! # Invariants
//! - Persisted records are identified by `id`; equality never falls back to
//!   field-wise comparison.
//! - Unset values always render as the literal marker `null`.

use chrono::{DateTime, Utc};
use std::fmt::Display;

pub mod pqrs;
pub mod summary;

/// Renders an optional text field as `'value'` or `null`.
pub(crate) fn render_text(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("'{text}'"),
        None => "null".to_string(),
    }
}

/// Renders an optional instant as a quoted RFC 3339 timestamp or `null`.
pub(crate) fn render_instant(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(instant) => format!("'{}'", instant.to_rfc3339()),
        None => "null".to_string(),
    }
}

/// Renders an optional nested shape through its own `Display`, or `null`.
pub(crate) fn render_nested<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(nested) => nested.to_string(),
        None => "null".to_string(),
    }
}

/// Renders the tri-state anonymity flag as `true`, `false` or `null`.
pub(crate) fn render_flag(value: Option<bool>) -> String {
    match value {
        Some(flag) => flag.to_string(),
        None => "null".to_string(),
    }
}
