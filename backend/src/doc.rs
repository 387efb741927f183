//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact endpoints, health probes, and envelope
//! schemas. Swagger UI serves it in debug builds and `openapi-dump` prints it
//! for external tooling.

use contact_rules::ContactDraft;
use utoipa::OpenApi;

use crate::domain::Contact;
use crate::inbound::http::envelope::{
    ContactListResponse, ContactResponse, FieldErrorBody, MessageResponse,
    ValidationErrorResponse,
};
use crate::inbound::http::health::ServiceBanner;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact management API",
        description = "Create, list, and delete validated contact records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::health::banner,
    ),
    components(schemas(
        Contact,
        ContactDraft,
        ContactListResponse,
        ContactResponse,
        MessageResponse,
        FieldErrorBody,
        ValidationErrorResponse,
        ServiceBanner,
    )),
    tags(
        (name = "contacts", description = "Contact records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
