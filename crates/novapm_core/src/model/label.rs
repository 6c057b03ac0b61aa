//! Stable human-facing labels for domain enums.
//!
//! # Responsibility
//! - Share one parse path for every enum that round-trips through a label
//!   (`"To Do"`, `"On Hold"`, ...).
//!
//! # Invariants
//! - Parsing trims input and compares labels ASCII case-insensitively.
//! - Every variant's label is unique within its enum.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned when a label does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    /// Human name of the enum being parsed, e.g. `task status`.
    pub kind: &'static str,
    /// Raw input that failed to match.
    pub value: String,
}

impl Display for ParseLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: `{}`", self.kind, self.value)
    }
}

impl Error for ParseLabelError {}

/// Resolves `value` against the labels of `variants`.
pub(crate) fn parse_label<T: Copy>(
    kind: &'static str,
    value: &str,
    variants: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, ParseLabelError> {
    let trimmed = value.trim();
    variants
        .iter()
        .copied()
        .find(|variant| label(*variant).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ParseLabelError {
            kind,
            value: trimmed.to_string(),
        })
}
