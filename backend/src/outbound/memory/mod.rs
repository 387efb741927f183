//! Process-local contact store.
//!
//! Used when no database URL is configured and by the HTTP integration tests.
//! Contents are lost on restart.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactId, NewContact};

/// In-memory implementation of the `ContactRepository` port.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use contact_backend::outbound::memory::InMemoryContactRepository;
///
/// let repo = InMemoryContactRepository::new(Arc::new(mockable::DefaultClock));
/// # let _ = repo;
/// ```
#[derive(Clone)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<Vec<Contact>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryContactRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            contacts: Arc::default(),
            clock,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Contact>>, ContactPersistenceError> {
        self.contacts
            .read()
            .map_err(|_| ContactPersistenceError::query("contact store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Contact>>, ContactPersistenceError> {
        self.contacts
            .write()
            .map_err(|_| ContactPersistenceError::query("contact store lock poisoned"))
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactPersistenceError> {
        let stored = contact.into_contact(ContactId::random(), self.clock.utc());
        self.write()?.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError> {
        let mut contacts = self.read()?.clone();
        contacts.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(contacts)
    }

    async fn find_by_id(
        &self,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactPersistenceError> {
        Ok(self.read()?.iter().find(|c| c.id() == *id).cloned())
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, ContactPersistenceError> {
        let mut contacts = self.write()?;
        let before = contacts.len();
        contacts.retain(|c| c.id() != *id);
        Ok(contacts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
    use contact_rules::ContactDraft;
    use rstest::{fixture, rstest};

    use super::*;

    struct StepClock(Mutex<DateTime<Utc>>);

    impl Clock for StepClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            let mut now = self.0.lock().expect("clock lock");
            let current = *now;
            *now = current + TimeDelta::seconds(1);
            current
        }
    }

    #[fixture]
    fn repo() -> InMemoryContactRepository {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("start time");
        InMemoryContactRepository::new(Arc::new(StepClock(Mutex::new(start))))
    }

    fn new_contact(name: &str) -> NewContact {
        ContactDraft::new(name, "someone@x.com", "1234567890")
            .validate()
            .expect("valid draft")
            .into()
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_newest_first(repo: InMemoryContactRepository) {
        for name in ["Ada", "Grace", "Linus"] {
            repo.create(new_contact(name)).await.expect("create");
        }
        let names: Vec<_> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, vec!["Linus", "Grace", "Ada"]);
    }

    #[rstest]
    #[tokio::test]
    async fn created_contact_is_retrievable(repo: InMemoryContactRepository) {
        let created = repo.create(new_contact("Ada")).await.expect("create");
        let found = repo.find_by_id(&created.id()).await.expect("lookup");
        assert_eq!(found, Some(created));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed(repo: InMemoryContactRepository) {
        let created = repo.create(new_contact("Ada")).await.expect("create");
        assert!(repo.delete(&created.id()).await.expect("first delete"));
        assert!(!repo.delete(&created.id()).await.expect("second delete"));
        assert!(repo.list().await.expect("list").is_empty());
    }
}
