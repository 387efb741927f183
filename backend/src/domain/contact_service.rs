//! Contact domain service.
//!
//! Implements the contact driving ports over a [`ContactRepository`]. Every
//! draft is normalised and checked against the shared rules before the
//! repository sees it; storage failures are logged with detail and surfaced
//! to callers as operation-specific internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use contact_rules::ContactDraft;
use tracing::{debug, error, info};

use crate::domain::ports::{
    ContactPersistenceError, ContactRepository, ContactsCommand, ContactsQuery,
};
use crate::domain::{Contact, ContactId, Error, NewContact};

const LIST_FAILED: &str = "Server error while fetching contacts";
const CREATE_FAILED: &str = "Server error while creating contact";
const DELETE_FAILED: &str = "Server error while deleting contact";
const NOT_FOUND: &str = "Contact not found";

fn map_repository_error(
    operation: &'static str,
    public: &'static str,
) -> impl FnOnce(ContactPersistenceError) -> Error {
    move |err| {
        if matches!(err, ContactPersistenceError::ConstraintViolation { .. }) {
            error!(
                operation,
                constraint = err.message(),
                "storage constraint rejected a validated contact; rule sets have drifted"
            );
        } else {
            error!(operation, error = %err, "contact repository failure");
        }
        Error::internal(public)
    }
}

/// Contact use-cases backed by a repository.
#[derive(Clone)]
pub struct ContactService<R> {
    repo: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a new service over the contact repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.repo
            .list()
            .await
            .map_err(map_repository_error("list", LIST_FAILED))
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let valid = draft.validate().map_err(|invalid| {
            let report = invalid.into_report();
            debug!(rejected = report.violations().count(), "contact draft rejected");
            Error::validation(&report)
        })?;

        let contact = self
            .repo
            .create(NewContact::from(valid))
            .await
            .map_err(map_repository_error("create", CREATE_FAILED))?;
        info!(contact_id = %contact.id(), "contact created");
        Ok(contact)
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), Error> {
        let removed = self
            .repo
            .delete(&id)
            .await
            .map_err(map_repository_error("delete", DELETE_FAILED))?;
        if !removed {
            debug!(contact_id = %id, "delete requested for unknown contact");
            return Err(Error::not_found(NOT_FOUND));
        }
        info!(contact_id = %id, "contact deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
