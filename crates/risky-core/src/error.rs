//! Error Types
//!
//! This module provides the error taxonomy shared by the repository, the
//! validator and the service layer. Errors propagate unchanged from the
//! layer that produced them up to the caller.
//!
//! # Example
//!
//! ```
//! use risky_core::{FieldError, RiskyError, ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! errors.push(FieldError::new("title", "cannot be blank"));
//! errors.push(FieldError::new("state", "must be a valid value"));
//!
//! let error = RiskyError::from(errors);
//! assert_eq!(
//!     error.to_string(),
//!     "state: must be a valid value; title: cannot be blank"
//! );
//! ```

use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A single rule violation on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field (e.g., `title`).
    pub field: String,
    /// Human-readable reason (e.g., `cannot be blank`).
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field violation found while validating one input.
///
/// Violations keep the order in which fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a collection holding one violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    /// Record a violation.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All recorded violations.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The violation recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Renders violations sorted by field name, independent of check order.
impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut sorted: Vec<&FieldError> = self.0.iter().collect();
        sorted.sort_by(|a, b| a.field.cmp(&b.field));

        for (i, error) in sorted.into_iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Standardized error type for risk operations.
///
/// # Variants
///
/// - `RecordNotFound` - No risk stored under the requested id (HTTP 404)
/// - `Validation` - Creation input broke one or more field rules (HTTP 400)
/// - `Storage` - Backing store failure (HTTP 500); never produced in memory
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RiskyError {
    /// The requested id has no corresponding entity.
    ///
    /// Retrying will not change the outcome.
    #[error("record not found: {id}")]
    RecordNotFound {
        /// The id that was looked up
        id: String,
    },

    /// One or more field-level rule violations on create input.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The backing store rejected or failed an operation.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the failure
        message: String,
    },
}

impl RiskyError {
    /// Create a not-found error for `id`.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }

    /// The field violations, when this is a validation error.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Type alias for Results using `RiskyError`.
pub type Result<T> = std::result::Result<T, RiskyError>;
