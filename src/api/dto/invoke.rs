/*
 * Responsibility
 * - Invocation payload the Functions host POSTs to a custom handler, and the
 *   output-binding payload we answer with
 * - Only the fields we read are modelled; the rest of the payload is ignored
 */
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the HTTP trigger / output bindings in the function definition.
pub const HTTP_BINDING: &str = "req";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvokeRequest {
    #[serde(default)]
    pub data: HashMap<String, Value>,
}

/// The HTTP trigger binding inside `Data`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HttpTrigger {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    // Headers: name -> values, names in the client's casing
    #[serde(default)]
    pub headers: HashMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvokeResponse {
    pub outputs: InvokeOutputs,
    pub logs: Vec<String>,
    pub return_value: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct InvokeOutputs {
    pub res: HttpOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpOutput {
    pub status_code: u16,
    pub headers: HashMap<&'static str, &'static str>,
    pub body: Value,
}

impl InvokeResponse {
    pub fn http(status_code: u16, body: Value, logs: Vec<String>) -> Self {
        Self {
            outputs: InvokeOutputs {
                res: HttpOutput {
                    status_code,
                    headers: HashMap::from([("Content-Type", "application/json")]),
                    body,
                },
            },
            logs,
            return_value: None,
        }
    }
}
