//! Wire representations of the contact service's JSON envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored contact as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Service-assigned identifier.
    pub id: Uuid,
    /// Person's name.
    pub name: String,
    /// Lower-cased email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Free-form note; empty when none was given.
    #[serde(default)]
    pub message: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Field-level rejection reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFieldError {
    /// Wire name of the offending field.
    pub field: String,
    /// Display message.
    pub message: String,
}

/// Union of every response envelope the service emits.
///
/// Successful responses fill `data`; failures carry either `errors` or
/// `message`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) success: bool,
    pub(crate) data: Option<T>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) errors: Vec<ServiceFieldError>,
}
