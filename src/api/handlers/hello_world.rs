/*
 * Responsibility
 * - The one hello world operation shared by every hosting adapter (`hello`)
 * - GET /api/helloWorld: the platform forwards the original request, so the
 *   principal is read straight from the request headers
 * - Anonymous at the transport layer: identity is informational only
 */
use axum::{Json, http::HeaderMap};

use crate::{
    api::dto::hello::HelloResponse,
    error::AppError,
    services::client_principal::{PrincipalSource, extract_identity},
};

pub fn hello<S>(source: &S) -> Result<HelloResponse, AppError>
where
    S: PrincipalSource + ?Sized,
{
    let identity = extract_identity(source.client_principal()?)?;

    tracing::debug!(
        authenticated = identity.is_authenticated,
        user_id = ?identity.user_id,
        "client principal resolved"
    );

    Ok(HelloResponse::from(identity))
}

pub async fn hello_world(headers: HeaderMap) -> Result<Json<HelloResponse>, AppError> {
    hello(&headers).map(Json)
}
