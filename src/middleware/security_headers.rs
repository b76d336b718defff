//! Security-related response headers.
//!
//! Applied at the Router level. The JSON API never needs to be framed or
//! sniffed, so the headers are fixed rather than configurable.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply common security headers to all responses (unless a handler set them).
pub fn apply(router: Router) -> Router {
    const HEADERS: [(&str, &str); 5] = [
        ("x-frame-options", "DENY"),
        ("content-security-policy", "frame-ancestors 'none'"),
        ("x-content-type-options", "nosniff"),
        ("referrer-policy", "no-referrer"),
        // Identity is read from a platform header; responses must not be shared.
        ("cache-control", "no-store"),
    ];

    HEADERS.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}
