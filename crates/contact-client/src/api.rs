//! Port through which the controller talks to the contact service.

use async_trait::async_trait;
use contact_rules::ContactDraft;
use uuid::Uuid;

use crate::model::{Contact, ServiceFieldError};

/// Failures surfaced by a [`ContactsApi`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with `success: false`.
    #[error("service rejected request: {message}")]
    Rejected {
        /// Service message, or the joined field messages when only those
        /// were sent.
        message: String,
        /// Field-level rejections, empty for non-validation failures.
        field_errors: Vec<ServiceFieldError>,
    },
    /// The request never produced a response.
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying error text.
        message: String,
    },
    /// The response could not be understood.
    #[error("undecodable response: {message}")]
    Decode {
        /// Underlying error text.
        message: String,
    },
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a service message.
    #[must_use]
    pub fn rejected(message: impl Into<String>, field_errors: Vec<ServiceFieldError>) -> Self {
        Self::Rejected {
            message: message.into(),
            field_errors,
        }
    }

    /// Build a [`ApiError::Transport`].
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`ApiError::Decode`].
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Remote contact operations.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Fetch every stored contact, newest first.
    async fn list(&self) -> Result<Vec<Contact>, ApiError>;

    /// Submit a draft and return the stored contact.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ApiError>;

    /// Remove a contact by id.
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
}
