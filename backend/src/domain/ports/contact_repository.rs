//! Port abstraction for contact persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Contact, ContactId, NewContact};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactPersistenceError {
        /// Repository connection could not be established.
        Connection => "contact repository connection failed",
        /// Query or mutation failed during execution.
        Query => "contact repository query failed",
        /// Storage rejected a row that passed domain validation.
        ConstraintViolation => "contact repository rejected row",
    }
}

/// Durable storage for contacts.
///
/// Implementations assign `id` and `createdAt` on create and return contacts
/// newest first from `list`, breaking timestamp ties by descending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact, returning it with its assigned identity.
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactPersistenceError>;

    /// Fetch every contact ordered by creation time, newest first.
    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError>;

    /// Fetch a contact by identifier.
    async fn find_by_id(&self, id: &ContactId)
    -> Result<Option<Contact>, ContactPersistenceError>;

    /// Permanently remove a contact. Returns `false` when no such id existed.
    async fn delete(&self, id: &ContactId) -> Result<bool, ContactPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constructors_render_messages() {
        assert_eq!(
            ContactPersistenceError::connection("refused").to_string(),
            "contact repository connection failed: refused"
        );
        assert_eq!(
            ContactPersistenceError::constraint_violation("contacts_phone_format").to_string(),
            "contact repository rejected row: contacts_phone_format"
        );
        assert_eq!(ContactPersistenceError::query("syntax").message(), "syntax");
    }
}
