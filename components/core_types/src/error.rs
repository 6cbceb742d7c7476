//! Error types for the core value model.

use thiserror::Error;

/// Returned when text does not name any [`TypeLabel`](crate::TypeLabel).
///
/// # Examples
///
/// ```
/// use core_types::TypeLabel;
///
/// let err = "float".parse::<TypeLabel>().unwrap_err();
/// assert_eq!(err.to_string(), "unknown type label: float");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type label: {0}")]
pub struct UnknownTypeLabel(pub String);
