//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limit and global timeout (from `Config`)
//! - Turning timeouts and panics into the standard failure envelope, so a
//!   caller never sees anything but `{ success: false, error }` on failure
//!
//! The body limit is axum's `DefaultBodyLimit`, enforced when a handler reads
//! the body. An oversized invocation therefore surfaces as a `JsonRejection`
//! and is answered by the handler, not by a bare 413 from this layer.

use std::any::Any;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::http::header::HeaderName;
use axum::response::{IntoResponse, Response};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;

/// Apply HTTP-level middleware to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                AppError::unexpected("request timed out")
            } else {
                AppError::unexpected(err.to_string())
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response));

    router.layer(layers)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        // Unknown payload: the envelope falls back to its generic message.
        String::new()
    };

    AppError::unexpected(message).into_response()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppEnv;
    use crate::error::FALLBACK_MESSAGE;

    fn test_config() -> Config {
        Config {
            addr: ([127, 0, 0, 1], 0).into(),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            request_timeout: Duration::from_millis(50),
            body_limit_bytes: 1024,
        }
    }

    async fn explode() -> &'static str {
        panic!("kaboom")
    }

    async fn explode_opaque() -> &'static str {
        std::panic::panic_any(7u8)
    }

    async fn call(router: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = apply(router, &test_config()).oneshot(req).await.unwrap();
        let status = res.status();
        let request_id = res
            .headers()
            .get("x-request-id")
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, request_id, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn request_id_is_propagated() {
        let router = Router::new().route("/", get(|| async { axum::Json(json!({})) }));
        let (status, request_id, _) = call(router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(request_id.is_some());
    }

    #[tokio::test]
    async fn panic_becomes_failure_envelope() {
        let router = Router::new().route("/", get(explode));
        let (status, _, body) = call(router, "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "success": false, "error": "kaboom" }));
    }

    #[tokio::test]
    async fn opaque_panic_uses_fallback_message() {
        let router = Router::new().route("/", get(explode_opaque));
        let (_, _, body) = call(router, "/").await;
        assert_eq!(body["error"], json!(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn timeout_becomes_failure_envelope() {
        let router = Router::new().route(
            "/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                ""
            }),
        );
        let (status, _, body) = call(router, "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "success": false, "error": "request timed out" }));
    }
}
