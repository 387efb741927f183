//! Domain primitives, ports, and services for contact management.
//!
//! Purpose: define strongly typed entities used by the inbound HTTP adapter
//! and the persistence adapters, keep them free of framework concerns, and
//! host the use-case services that apply the shared validation rules.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Contact`, `ContactId`, `NewContact`: the contact aggregate.
//! - `ContactService`: list/create/delete use-cases over a repository port.
//! - `TraceId`: request correlation identifier.

pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{Contact, ContactId, ContactIdError, NewContact};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, FieldError};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";

