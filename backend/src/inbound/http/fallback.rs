//! Request-level failure handling outside individual handlers.
//!
//! Unmatched routes, undecodable JSON bodies, and server failures raised
//! outside a handler still answer with the standard message envelope.

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, web};
use tracing::{debug, error};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::UNHANDLED_MESSAGE;

/// JSON extractor configuration rejecting bad bodies with
/// `400 Invalid request body`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        debug!(path = %req.path(), error = %err, "rejected request body");
        Error::invalid_request("Invalid request body").into()
    })
}

/// Default service answering `404 Route not found`.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = %req.path(), "no route matched");
    Err(Error::not_found("Route not found"))
}

/// Middleware rewriting any 5xx response without a JSON body into
/// `500 Something went wrong!`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use contact_backend::inbound::http::fallback::unhandled_server_errors;
///
/// let _app = App::new().wrap(unhandled_server_errors());
/// ```
pub fn unhandled_server_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(generic_server_error)
}

fn generic_server_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let enveloped = res
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if enveloped {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    error!(
        status = res.status().as_u16(),
        path = %res.request().path(),
        "unhandled server error"
    );
    let response = Error::internal(UNHANDLED_MESSAGE).error_response();
    Ok(ErrorHandlerResponse::Response(
        res.into_response(response).map_into_right_body(),
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, get, post, test};
    use serde_json::{Value, json};

    use super::*;

    #[post("/echo")]
    async fn echo(body: web::Json<Value>) -> web::Json<Value> {
        body
    }

    #[actix_web::test]
    async fn unknown_routes_return_envelope() {
        let app = test::init_service(
            App::new().default_service(web::to(route_not_found)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"success": false, "message": "Route not found"}));
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(json_config()).service(echo)).await;
        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Invalid request body");
    }

    #[get("/plain-failure")]
    async fn plain_failure() -> HttpResponse {
        HttpResponse::BadGateway().body("upstream exploded")
    }

    #[get("/store-failure")]
    async fn store_failure() -> ApiResult<HttpResponse> {
        Err(Error::internal("Server error while fetching contacts"))
    }

    #[actix_web::test]
    async fn plain_server_errors_become_generic_envelope() {
        let app = test::init_service(
            App::new()
                .wrap(unhandled_server_errors())
                .service(plain_failure),
        )
        .await;
        let req = test::TestRequest::get().uri("/plain-failure").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"success": false, "message": "Something went wrong!"}));
    }

    #[actix_web::test]
    async fn enveloped_server_errors_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(unhandled_server_errors())
                .service(store_failure),
        )
        .await;
        let req = test::TestRequest::get().uri("/store-failure").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "Server error while fetching contacts"})
        );
    }
}
