//! Builders wiring the contact service to the configured repository.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use contact_backend::domain::ContactService;
use contact_backend::domain::ports::ContactRepository;
use contact_backend::inbound::http::state::HttpState;
use contact_backend::outbound::memory::InMemoryContactRepository;
use contact_backend::outbound::persistence::DieselContactRepository;

use super::ServerConfig;

fn http_state_for<R>(repo: R) -> HttpState
where
    R: ContactRepository + 'static,
{
    let service = Arc::new(ContactService::new(Arc::new(repo)));
    HttpState::new(service.clone(), service)
}

/// Build handler state backed by PostgreSQL when a pool is configured,
/// otherwise by the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => http_state_for(DieselContactRepository::new(pool.clone(), clock)),
        None => http_state_for(InMemoryContactRepository::new(clock)),
    };
    web::Data::new(state)
}
