//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local store for database-less runs and tests
//!
//! Adapters translate between domain types and storage representations and
//! hold no business logic.

pub mod memory;
pub mod persistence;
