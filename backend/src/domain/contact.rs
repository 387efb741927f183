//! Contact aggregate.
//!
//! A contact is created once, never mutated, and removed by id. `NewContact`
//! can only be built from a [`ValidContact`], so every value handed to a
//! repository has already passed the shared rules.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use contact_rules::ValidContact;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error returned when a contact id cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contact id must be a valid UUID")]
pub struct ContactIdError;

/// Stable contact identifier.
///
/// # Examples
/// ```
/// use contact_backend::domain::ContactId;
///
/// let id: ContactId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("uuid");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!("not-a-uuid".parse::<ContactId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ContactId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for ContactId {
    type Err = ContactIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Reject padded input instead of silently accepting it.
        if s.trim() != s {
            return Err(ContactIdError);
        }
        Uuid::parse_str(s).map(Self).map_err(|_| ContactIdError)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated contact fields waiting for the store to assign identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl NewContact {
    /// Person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Optional note, empty when absent.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attach store-assigned identity, producing a persisted contact.
    pub fn into_contact(self, id: ContactId, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at,
        }
    }
}

impl From<ValidContact> for NewContact {
    fn from(value: ValidContact) -> Self {
        Self {
            name: value.name().to_owned(),
            email: value.email().to_owned(),
            phone: value.phone().to_owned(),
            message: value.message().to_owned(),
        }
    }
}

/// A persisted contact.
///
/// Serialises with camelCase keys: `id`, `name`, `email`, `phone`,
/// `message`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: ContactId,
    #[schema(example = "Jane Doe", max_length = 100)]
    name: String,
    #[schema(example = "jane@x.com")]
    email: String,
    #[schema(example = "1234567890")]
    phone: String,
    #[schema(max_length = 500)]
    message: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: DateTime<Utc>,
}

impl Contact {
    /// Rebuild a contact from trusted storage.
    pub fn from_parts(
        id: ContactId,
        name: String,
        email: String,
        phone: String,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            message,
            created_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Optional note, empty when absent.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contact_rules::ContactDraft;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    fn contact_id_rejects_invalid_input(#[case] raw: &str) {
        assert_eq!(raw.parse::<ContactId>(), Err(ContactIdError));
    }

    #[rstest]
    fn contact_serialises_camel_case() {
        let draft = ContactDraft::new("Jane Doe", "Jane@X.com", "1234567890");
        let valid = draft.validate().expect("valid draft");
        let id: ContactId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            .parse()
            .expect("uuid");
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("timestamp");
        let contact = NewContact::from(valid).into_contact(id, created_at);

        let value = serde_json::to_value(&contact).expect("serialise");
        assert_eq!(
            value,
            json!({
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "1234567890",
                "message": "",
                "createdAt": "2024-01-02T03:04:05Z",
            })
        );
    }
}
