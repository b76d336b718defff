//! CORS policy for browser clients.
//!
//! In a Static Web Apps deployment the front-end and `/api` share an origin and
//! CORS never comes into play. It matters when the API is called from somewhere
//! else: the Next.js dev server on another port, or a second site.
//!
//! Policy:
//! - Development: any origin.
//! - Production: only the exact origins in `CORS_ALLOWED_ORIGINS`. A `*` entry
//!   is dropped rather than widening the policy; an empty list means no CORS
//!   headers at all.
//! - Never with credentials. The identity comes from a platform header, not
//!   from cookies the browser would need to attach.
//! - Only the verbs the API serves (GET, plus POST for host invocations).

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(10 * 60);

pub fn apply(router: Router, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(config))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(PREFLIGHT_MAX_AGE);

    router.layer(cors)
}

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return Any.into();
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok());

    AllowOrigin::list(origins)
}
