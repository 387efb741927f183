//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use state_builders::build_http_state;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use contact_backend::Trace;
#[cfg(debug_assertions)]
use contact_backend::doc::ApiDoc;
use contact_backend::domain::TRACE_ID_HEADER;
use contact_backend::inbound::http::configure_api;
use contact_backend::inbound::http::fallback::{
    json_config, route_not_found, unhandled_server_errors,
};
use contact_backend::inbound::http::health::{HealthState, banner, live, ready};
use contact_backend::inbound::http::state::HttpState;

/// Build the CORS policy for the configured browser origins.
fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(["GET", "POST", "DELETE"])
        .allowed_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(TRACE_ID_HEADER),
        ])
        .expose_headers([TRACE_ID_HEADER])
        .supports_credentials()
        .max_age(3600)
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    allowed_origins: Vec<String>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        allowed_origins,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .configure(configure_api)
        .service(banner)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
        .wrap(unhandled_server_errors())
        .wrap(build_cors(&allowed_origins))
        .wrap(Trace)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// OS signal handling is disabled; the caller stops the server through its
/// handle after moving `health_state` into the draining phase.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        allowed_origins: config.allowed_origins,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .disable_signals()
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Full application wiring, including CORS and fallbacks.

    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn deps(origins: &[&str]) -> AppDependencies {
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("socket addr"),
            origins.iter().map(|o| (*o).to_owned()).collect(),
        );
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: build_http_state(&config),
            allowed_origins: config.allowed_origins,
        }
    }

    #[actix_web::test]
    async fn unknown_route_returns_envelope_with_trace_header() {
        let app = test::init_service(build_app(deps(&["http://localhost:5173"]))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Route not found");
    }

    #[rstest]
    #[case("http://localhost:5173", true)]
    #[case("http://evil.example.com", false)]
    #[actix_web::test]
    async fn cors_allows_only_configured_origins(#[case] origin: &str, #[case] allowed: bool) {
        let app = test::init_service(build_app(deps(&["http://localhost:5173"]))).await;
        let req = test::TestRequest::get()
            .uri("/api/contacts")
            .insert_header((header::ORIGIN, origin))
            .to_request();
        let res = test::try_call_service(&app, req).await;
        match res {
            Ok(res) => {
                let echoed = res
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                assert_eq!(echoed.as_deref() == Some(origin), allowed);
            }
            Err(_) => assert!(!allowed, "configured origin was rejected"),
        }
    }

    #[actix_web::test]
    async fn banner_is_served_at_root() {
        let app = test::init_service(build_app(deps(&[]))).await;
        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(body["message"], "Contact Management API is running");
    }
}
