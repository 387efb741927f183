//! Contact management service library.
//!
//! Hexagonal layout: `domain` holds the contact aggregate, ports, and
//! services; `inbound::http` adapts them to actix-web; `outbound` provides
//! PostgreSQL and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
