//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Contact records.
    ///
    /// CHECK constraints mirror the validation rules; see the
    /// `create_contacts` migration.
    contacts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Trimmed name, 1..=100 characters.
        name -> Varchar,
        /// Lower-cased email address.
        email -> Varchar,
        /// Phone number, 10..=15 allowed characters.
        phone -> Varchar,
        /// Optional note, empty when absent.
        message -> Varchar,
        /// Creation timestamp, default sort key.
        created_at -> Timestamptz,
    }
}
