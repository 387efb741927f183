//! Client for the contact service.
//!
//! [`ContactBook`] holds the state a contact screen renders (list, sort
//! order, loading flag, last notification) and drives a [`ContactsApi`].
//! Drafts are checked with the shared `contact-rules` table before any
//! request is sent, so the client rejects exactly what the service would.
//! [`HttpContactsApi`] is the reqwest-backed transport; the `contacts` binary
//! wraps both in a small command-line tool.

mod api;
mod book;
mod http;
mod model;

pub use api::{ApiError, ContactsApi};
pub use book::{AddError, ContactBook, Notification, NotificationKind, SortOrder};
pub use contact_rules::ContactDraft;
pub use http::{DEFAULT_BASE_URL, HttpContactsApi};
pub use model::{Contact, ServiceFieldError};
