/*
 * Responsibility
 * - URL structure of the API
 * - /api/helloWorld for forwarded requests, /helloWorld for host invocations
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{health::health, hello_world::hello_world, invoke::hello_world_invoke};

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/helloWorld", get(hello_world))
        .route("/helloWorld", post(hello_world_invoke))
}
