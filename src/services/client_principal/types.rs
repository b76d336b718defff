/*
 * Responsibility
 * - Types of the client principal the platform injects, and the normalized identity
 * - Field-level leniency lives here: the platform schema is not guaranteed stable,
 *   so a missing or wrong-typed field is read as absent, never as an error
 */
use serde_json::{Map, Value};

/// A single typed assertion about the caller (`{ "typ": ..., "val": ... }`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub typ: String,
    /// `None` when missing or not a string.
    pub val: Option<String>,
}

impl Claim {
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let typ = string_field(obj, "typ")?;
        Some(Self {
            typ,
            val: string_field(obj, "val"),
        })
    }
}

/// Decoded `x-ms-client-principal` document.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPrincipal {
    pub user_id: Option<String>,
    pub user_details: Option<String>,
    /// `None` when the document has no (usable) `claims` array.
    pub claims: Option<Vec<Claim>>,
}

impl ClientPrincipal {
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let claims = obj
            .get("claims")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Claim::from_value).collect());

        Self {
            user_id: string_field(obj, "userId"),
            user_details: string_field(obj, "userDetails"),
            claims,
        }
    }
}

/// Normalized identity handed to the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityResult {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl IdentityResult {
    pub fn anonymous() -> Self {
        Self::default()
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}
