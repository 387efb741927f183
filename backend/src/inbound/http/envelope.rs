//! JSON response envelopes shared by every contact endpoint.
//!
//! Success bodies carry `success: true`; failures carry `success: false` and
//! either a `message` or, for validation failures, an `errors` list.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Contact, FieldError};

/// `GET /api/contacts` success body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub count: usize,
    pub data: Vec<Contact>,
}

impl ContactListResponse {
    /// Wrap a list of contacts.
    pub fn new(data: Vec<Contact>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `POST /api/contacts` success body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Contact,
}

impl From<Contact> for ContactResponse {
    fn from(data: Contact) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope carrying only a message; used for deletes and failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[schema(example = "Contact deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    /// Successful envelope with `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed envelope with `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// One rejected field in a validation failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorBody {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "Please enter a valid email")]
    pub message: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(value: &FieldError) -> Self {
        Self {
            field: value.field().to_owned(),
            message: value.message().to_owned(),
        }
    }
}

/// Validation failure body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub errors: Vec<FieldErrorBody>,
}

impl ValidationErrorResponse {
    /// Build a failure listing `errors` in order.
    pub fn new(errors: &[FieldError]) -> Self {
        Self {
            success: false,
            errors: errors.iter().map(FieldErrorBody::from).collect(),
        }
    }
}
