//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the contact
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactsQuery>,
    pub contacts_command: Arc<dyn ContactsCommand>,
}

impl HttpState {
    /// Bundle the contact ports.
    pub fn new(
        contacts: Arc<dyn ContactsQuery>,
        contacts_command: Arc<dyn ContactsCommand>,
    ) -> Self {
        Self {
            contacts,
            contacts_command,
        }
    }
}
