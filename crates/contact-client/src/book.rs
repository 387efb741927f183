//! Client-side contact state controller.
//!
//! [`ContactBook`] mirrors what a contact screen needs: the fetched list, a
//! loading flag, the selected sort order, and the last user-facing
//! notification. Failed operations only ever change the notification.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use contact_rules::{ContactDraft, FormReport, validate_contact};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::{ApiError, ContactsApi};
use crate::model::{Contact, ServiceFieldError};

const FETCH_FAILED: &str = "Failed to fetch contacts";
const ADDED: &str = "Contact added successfully!";
const ADD_FAILED: &str = "Failed to add contact";
const DELETED: &str = "Contact deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete contact";

/// Display order for [`ContactBook::sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Case-insensitive by name.
    Name,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown sort order '{other}'; expected newest, oldest, or name")),
        }
    }
}

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation completed.
    Success,
    /// The operation failed.
    Error,
}

/// Short message describing the outcome of the last operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Outcome severity.
    pub kind: NotificationKind,
    /// Display text.
    pub message: String,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Why [`ContactBook::add`] did not store a contact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    /// Local validation failed; no request was sent.
    #[error("contact failed local validation")]
    Invalid(FormReport),
    /// The service rejected the contact.
    #[error("service rejected contact: {message}")]
    Rejected {
        /// Service message.
        message: String,
        /// Field-level rejections.
        field_errors: Vec<ServiceFieldError>,
    },
    /// The request failed in transit.
    #[error("failed to add contact")]
    Failed(#[source] ApiError),
}

/// Contact list state driven by a [`ContactsApi`].
pub struct ContactBook<A> {
    api: A,
    contacts: Vec<Contact>,
    sort_order: SortOrder,
    loading: bool,
    notification: Option<Notification>,
}

impl<A: ContactsApi> ContactBook<A> {
    /// Create an empty book that is loading until the first refresh.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self {
            api,
            contacts: Vec::new(),
            sort_order: SortOrder::Newest,
            loading: true,
            notification: None,
        }
    }

    /// Contacts in fetch/insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Whether the initial fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current sort order.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Change the sort order used by [`Self::sorted`].
    pub const fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Last notification, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Remove and return the last notification.
    pub const fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Reload the list from the service.
    ///
    /// A service-reported failure is shown verbatim; transport and decode
    /// failures show a fixed message.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(contacts) => {
                debug!(count = contacts.len(), "contacts fetched");
                self.contacts = contacts;
            }
            Err(ApiError::Rejected { message, .. }) => {
                self.notification = Some(Notification::error(message));
            }
            Err(error) => {
                warn!(%error, "fetching contacts failed");
                self.notification = Some(Notification::error(FETCH_FAILED));
            }
        }
        self.loading = false;
    }

    /// Validate and submit a draft; on success the new contact is listed
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`AddError::Invalid`] without contacting the service when the
    /// draft breaks the shared rules, otherwise the service's rejection or
    /// the transport failure.
    pub async fn add(&mut self, draft: ContactDraft) -> Result<Contact, AddError> {
        let report = validate_contact(&draft);
        if !report.is_valid() {
            return Err(AddError::Invalid(report));
        }

        match self.api.create(&draft).await {
            Ok(contact) => {
                self.contacts.insert(0, contact.clone());
                self.notification = Some(Notification::success(ADDED));
                Ok(contact)
            }
            Err(ApiError::Rejected {
                message,
                field_errors,
            }) => {
                self.notification = Some(Notification::error(message.clone()));
                Err(AddError::Rejected {
                    message,
                    field_errors,
                })
            }
            Err(error) => {
                warn!(%error, "adding contact failed");
                self.notification = Some(Notification::error(ADD_FAILED));
                Err(AddError::Failed(error))
            }
        }
    }

    /// Delete a contact.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] when the service refuses or cannot be
    /// reached; the list is left unchanged.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), ApiError> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.contacts.retain(|contact| contact.id != id);
                self.notification = Some(Notification::success(DELETED));
                Ok(())
            }
            Err(error) => {
                let message = match &error {
                    ApiError::Rejected { message, .. } => message.clone(),
                    ApiError::Transport { .. } | ApiError::Decode { .. } => {
                        warn!(%error, %id, "deleting contact failed");
                        DELETE_FAILED.to_owned()
                    }
                };
                self.notification = Some(Notification::error(message));
                Err(error)
            }
        }
    }

    /// Contacts ordered by the current [`SortOrder`].
    #[must_use]
    pub fn sorted(&self) -> Vec<&Contact> {
        let mut view: Vec<&Contact> = self.contacts.iter().collect();
        view.sort_by(|a, b| compare(self.sort_order, a, b));
        view
    }
}

fn compare(order: SortOrder, a: &Contact, b: &Contact) -> Ordering {
    match order {
        SortOrder::Newest => b.created_at.cmp(&a.created_at),
        SortOrder::Oldest => a.created_at.cmp(&b.created_at),
        SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("newest", SortOrder::Newest)]
    #[case(" Oldest ", SortOrder::Oldest)]
    #[case("NAME", SortOrder::Name)]
    fn sort_order_parses_case_insensitively(#[case] raw: &str, #[case] expected: SortOrder) {
        assert_eq!(raw.parse::<SortOrder>(), Ok(expected));
    }

    #[rstest]
    fn unknown_sort_order_is_rejected() {
        assert!("alphabetical".parse::<SortOrder>().is_err());
    }
}
