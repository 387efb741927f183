//! HTTP inbound adapter exposing the contacts REST endpoints.

use actix_web::web;

pub mod contacts;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod health;
pub mod state;

pub use error::ApiResult;

/// Register the `/api` scope with every contact handler.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use contact_backend::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(contacts::list_contacts)
            .service(contacts::create_contact)
            .service(contacts::delete_contact),
    );
}
