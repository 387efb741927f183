//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the message is always safe to show to clients, so adapters log
//! internal detail at the point of failure instead of carrying it here.

use contact_rules::{FieldViolation, FormReport};
use serde::Serialize;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the domain or its adapters.
    InternalError,
}

/// A client-correctable problem with one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    /// Build a field error from its parts.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&FieldViolation> for FieldError {
    fn from(violation: &FieldViolation) -> Self {
        Self::new(violation.field().as_str(), violation.message())
    }
}

/// Domain error payload.
///
/// Captures the current [`TraceId`] on construction so adapters can correlate
/// responses with logs.
///
/// # Examples
/// ```
/// use contact_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Contact not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.field_errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    field_errors: Vec<FieldError>,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error with the given code and client-safe message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field_errors: Vec::new(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Build a validation failure carrying every rejected field.
    ///
    /// # Examples
    /// ```
    /// use contact_backend::domain::{Error, ErrorCode};
    /// use contact_rules::{ContactDraft, validate_contact};
    ///
    /// let report = validate_contact(&ContactDraft::new("", "bad", "123"));
    /// let err = Error::validation(&report);
    /// assert_eq!(err.code(), ErrorCode::InvalidRequest);
    /// assert_eq!(err.field_errors().len(), 3);
    /// ```
    pub fn validation(report: &FormReport) -> Self {
        let mut error = Self::invalid_request("Validation failed");
        error.field_errors = report.violations().map(FieldError::from).collect();
        error
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Per-field validation failures; empty for non-validation errors.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Trace identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
