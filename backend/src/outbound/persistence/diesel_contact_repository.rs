//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Ids are generated here and timestamps come from the injected clock; rows
//! are read back with `RETURNING` so callers observe exactly what was stored.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactId, NewContact};

use super::models::{ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool and clock.
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool_error(error: PoolError) -> ContactPersistenceError {
    ContactPersistenceError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> ContactPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info)
        | DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
            let detail = info.constraint_name().unwrap_or(info.message()).to_owned();
            ContactPersistenceError::constraint_violation(detail)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactPersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => ContactPersistenceError::query("database query error"),
        _ => ContactPersistenceError::query("database error"),
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewContactRow {
            id: *ContactId::random().as_uuid(),
            name: contact.name(),
            email: contact.email(),
            phone: contact.phone(),
            message: contact.message(),
            created_at: self.clock.utc(),
        };

        let stored: ContactRow = diesel::insert_into(contacts::table)
            .values(&row)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(stored.into())
    }

    async fn list(&self) -> Result<Vec<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ContactRow> = contacts::table
            .order((contacts::created_at.desc(), contacts::id.desc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .filter(contacts::id.eq(id.as_uuid()))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Contact::from))
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(contacts::table.filter(contacts::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
