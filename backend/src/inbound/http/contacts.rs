//! Contacts API handlers.
//!
//! ```text
//! GET    /api/contacts
//! POST   /api/contacts {"name":"Jane Doe","email":"jane@x.com","phone":"1234567890"}
//! DELETE /api/contacts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use contact_rules::ContactDraft;
use tracing::debug;

use crate::domain::{ContactId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{
    ContactListResponse, ContactResponse, MessageResponse, ValidationErrorResponse,
};
use crate::inbound::http::state::HttpState;

/// List every contact, newest first.
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "Contacts", body = ContactListResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ContactListResponse>> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(web::Json(ContactListResponse::new(contacts)))
}

/// Validate and store a new contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactDraft,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactDraft>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .contacts_command
        .create_contact(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ContactResponse::from(contact)))
}

/// Permanently delete a contact.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact UUID")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "Unknown id", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let raw = path.into_inner();
    let id: ContactId = raw.parse().map_err(|err| {
        debug!(id = %raw, error = %err, "rejected malformed contact id");
        Error::invalid_request("Invalid contact ID")
    })?;
    state.contacts_command.delete_contact(id).await?;
    Ok(web::Json(MessageResponse::ok("Contact deleted successfully")))
}

#[cfg(test)]
mod tests {
    //! Handler wiring against mocked ports.
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        FixtureContactsCommand, FixtureContactsQuery, MockContactsCommand, MockContactsQuery,
    };

    fn app_state(query: MockContactsQuery, command: MockContactsCommand) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(query), Arc::new(command)))
    }

    #[actix_web::test]
    async fn list_failure_uses_fetch_message() {
        let mut query = MockContactsQuery::new();
        query
            .expect_list_contacts()
            .return_once(|| Err(Error::internal("Server error while fetching contacts")));
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state(query, MockContactsCommand::new()))
                .service(web::scope("/api").service(list_contacts)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/api/contacts").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "Server error while fetching contacts"})
        );
    }

    #[actix_web::test]
    async fn malformed_id_never_reaches_the_port() {
        let mut command = MockContactsCommand::new();
        command.expect_delete_contact().times(0);
        let app = actix_test::init_service(
            App::new()
                .app_data(app_state(MockContactsQuery::new(), command))
                .service(web::scope("/api").service(delete_contact)),
        )
        .await;

        let req = actix_test::TestRequest::delete()
            .uri("/api/contacts/not-a-uuid")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "Invalid contact ID");
    }

    #[actix_web::test]
    async fn create_returns_created_envelope() {
        let state = web::Data::new(HttpState::new(
            Arc::new(FixtureContactsQuery),
            Arc::new(FixtureContactsCommand),
        ));
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(create_contact)),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Ada", "email": "ada@x.com", "phone": "1234567890"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Ada");
        assert_eq!(body["data"]["message"], "");
    }

    #[rstest]
    #[case(
        json!({"name": null, "email": "jane@x.com", "phone": "1234567890"}),
        json!([{"field": "name", "message": "Name is required"}])
    )]
    #[case(
        json!({"name": "Jane", "email": "jane@x.com", "phone": 123}),
        json!([{"field": "phone", "message": "Enter valid phone (10-15 digits)"}])
    )]
    #[actix_web::test]
    async fn non_string_fields_reach_validation(#[case] body: Value, #[case] errors: Value) {
        let state = web::Data::new(HttpState::new(
            Arc::new(MockContactsQuery::new()),
            Arc::new(FixtureContactsCommand),
        ));
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(create_contact)),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(body)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"success": false, "errors": errors}));
    }
}
