/*
 * Responsibility
 * - POST /helloWorld: Functions custom-handler invocation (non-forwarded mode)
 * - Pull the HTTP trigger out of the payload, run the shared `hello`, and
 *   render status + JSON into the `res` output binding
 * - The host always gets 200; the caller's status lives in `statusCode`
 */
use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::{
    api::dto::invoke::{HTTP_BINDING, HttpTrigger, InvokeRequest, InvokeResponse},
    api::handlers::hello_world::hello,
    error::AppError,
};

pub async fn hello_world_invoke(
    payload: Result<Json<InvokeRequest>, JsonRejection>,
) -> Json<InvokeResponse> {
    let outcome = payload
        .map_err(|rejection| AppError::unexpected(rejection.body_text()))
        .and_then(|Json(req)| http_trigger(req))
        .and_then(|trigger| {
            tracing::debug!(method = ?trigger.method, url = ?trigger.url, "invocation received");
            hello(&trigger.headers)
        });

    let res = match outcome {
        Ok(body) => InvokeResponse::http(200, to_value(&body), Vec::new()),
        Err(err) => {
            let envelope = err.envelope();
            let logs = vec![format!("Error: {}", envelope.error)];
            InvokeResponse::http(err.status().as_u16(), to_value(&envelope), logs)
        }
    };

    Json(res)
}

fn http_trigger(mut req: InvokeRequest) -> Result<HttpTrigger, AppError> {
    let binding = req
        .data
        .remove(HTTP_BINDING)
        .ok_or_else(|| AppError::unexpected(format!("missing '{HTTP_BINDING}' binding")))?;

    serde_json::from_value(binding)
        .map_err(|e| AppError::unexpected(format!("invalid '{HTTP_BINDING}' binding: {e}")))
}

fn to_value<T: serde::Serialize>(body: &T) -> Value {
    // Envelopes are plain structs of strings/bools; serialization cannot fail.
    serde_json::to_value(body).unwrap_or(Value::Null)
}
