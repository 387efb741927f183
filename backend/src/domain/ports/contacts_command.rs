//! Driving port for contact mutations.

use async_trait::async_trait;
use chrono::Utc;
use contact_rules::ContactDraft;

use crate::domain::{Contact, ContactId, Error, NewContact};

/// Domain use-case port for creating and deleting contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Validate `draft` and persist it.
    ///
    /// Fails with an invalid-request error listing every rejected field.
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;

    /// Remove the contact with `id`, failing with not-found when absent.
    async fn delete_contact(&self, id: ContactId) -> Result<(), Error>;
}

/// Fixture command that validates but stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactsCommand;

#[async_trait]
impl ContactsCommand for FixtureContactsCommand {
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let valid = draft
            .validate()
            .map_err(|invalid| Error::validation(invalid.report()))?;
        Ok(NewContact::from(valid).into_contact(ContactId::random(), Utc::now()))
    }

    async fn delete_contact(&self, _id: ContactId) -> Result<(), Error> {
        Err(Error::not_found("Contact not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_command_validates_drafts() {
        let error = FixtureContactsCommand
            .create_contact(ContactDraft::new("", "bad", "123"))
            .await
            .expect_err("invalid draft");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.field_errors().len(), 3);
    }

    #[tokio::test]
    async fn fixture_command_echoes_valid_drafts() {
        let contact = FixtureContactsCommand
            .create_contact(ContactDraft::new("Jane Doe", "jane@x.com", "1234567890"))
            .await
            .expect("valid draft");
        assert_eq!(contact.name(), "Jane Doe");
    }
}
