//! Health endpoints and the service banner.
//!
//! Probes follow the server lifecycle held in [`HealthState`]: starting
//! (live, not ready), serving (live and ready), then draining once shutdown
//! begins (neither).

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Lifecycle phase shared by the probes and the shutdown path.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(STARTING),
        }
    }
}

impl HealthState {
    /// Start in the starting phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the serving phase once the listener is bound. Has no effect
    /// after draining has begun.
    pub fn mark_ready(&self) {
        // Draining wins over a late readiness signal.
        let _ = self
            .phase
            .compare_exchange(STARTING, SERVING, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Enter the draining phase; both probes fail from now on.
    pub fn begin_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    /// Whether new traffic should be routed here.
    pub fn is_ready(&self) -> bool {
        self.phase.load(Ordering::Acquire) == SERVING
    }

    /// Whether the process should be left running.
    pub fn is_alive(&self) -> bool {
        self.phase.load(Ordering::Acquire) != DRAINING
    }
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// Liveness probe: 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}

/// Body of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceBanner {
    #[schema(example = "Contact Management API is running")]
    pub message: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
}

/// Report that the service is up and which version is running.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "Service banner", body = ServiceBanner))
)]
#[get("/")]
pub async fn banner() -> web::Json<ServiceBanner> {
    web::Json(ServiceBanner {
        message: "Contact Management API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use super::*;

    #[derive(Clone, Copy, Debug)]
    enum Step {
        Ready,
        Drain,
    }

    fn state_after(steps: &[Step]) -> HealthState {
        let state = HealthState::new();
        for step in steps {
            match step {
                Step::Ready => state.mark_ready(),
                Step::Drain => state.begin_draining(),
            }
        }
        state
    }

    #[rstest]
    #[case(&[], false, true)]
    #[case(&[Step::Ready], true, true)]
    #[case(&[Step::Ready, Step::Drain], false, false)]
    #[case(&[Step::Drain, Step::Ready], false, false)]
    fn lifecycle_drives_probe_flags(
        #[case] steps: &[Step],
        #[case] expect_ready: bool,
        #[case] expect_alive: bool,
    ) {
        let state = state_after(steps);
        assert_eq!(state.is_ready(), expect_ready);
        assert_eq!(state.is_alive(), expect_alive);
    }

    #[rstest]
    #[case(&[], "/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[case(&[Step::Ready], "/health/ready", StatusCode::OK)]
    #[case(&[Step::Ready], "/health/live", StatusCode::OK)]
    #[case(&[Step::Ready, Step::Drain], "/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[case(&[Step::Ready, Step::Drain], "/health/live", StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn probes_report_lifecycle(
        #[case] steps: &[Step],
        #[case] uri: &str,
        #[case] expected: StatusCode,
    ) {
        let state = web::Data::new(state_after(steps));
        let app =
            actix_test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }

    #[actix_web::test]
    async fn banner_reports_version() {
        let app = actix_test::init_service(App::new().service(banner)).await;
        let body: serde_json::Value =
            actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(body["message"], "Contact Management API is running");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
