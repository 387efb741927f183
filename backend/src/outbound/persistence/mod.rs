//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the table definition stay private to this module.
//! Connections come from a `bb8` pool driven by `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use contact_backend::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), contact_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/contacts")).await?;
//! let repo = DieselContactRepository::new(pool, Arc::new(mockable::DefaultClock));
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_contact_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
