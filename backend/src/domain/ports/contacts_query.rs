//! Driving port for contact reads.
//!
//! Inbound adapters use this port to fetch contacts without importing
//! outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Contact, Error};

/// Domain use-case port for listing contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return every contact, newest first.
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error>;
}

/// Fixture query returning an empty address book.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactsQuery;

#[async_trait]
impl ContactsQuery for FixtureContactsQuery {
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_query_returns_empty_list() {
        let contacts = FixtureContactsQuery
            .list_contacts()
            .await
            .expect("contacts list");
        assert!(contacts.is_empty());
    }
}
