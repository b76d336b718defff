//! Client principal decoding and identity extraction.
//!
//! Pure functions only: no I/O, no logging, no shared state. Callers own the
//! decision of how a `DecodeError` is reported.

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;

use super::types::{ClientPrincipal, IdentityResult};

/// Claim types that carry the caller's email, across the providers the platform fronts.
const EMAIL_CLAIM_TYPES: [&str; 3] = [
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress",
    "emails",
    "email",
];

// The platform does not promise padding on the header value.
const PRINCIPAL_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("client principal header is not valid ASCII")]
    HeaderEncoding,
    #[error("client principal is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("client principal is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("client principal is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("client principal is not a JSON object")]
    NotAnObject,
}

/// Decode a raw header value into a `ClientPrincipal`.
fn decode_principal(header_value: &str) -> Result<ClientPrincipal, DecodeError> {
    let bytes = PRINCIPAL_ENGINE.decode(header_value.trim())?;
    let text = String::from_utf8(bytes)?;
    let doc: Value = serde_json::from_str(&text)?;
    let obj = doc.as_object().ok_or(DecodeError::NotAnObject)?;
    Ok(ClientPrincipal::from_object(obj))
}

/// Normalize an optional `x-ms-client-principal` value into an `IdentityResult`.
///
/// - absent / empty header: anonymous result, not an error
/// - whitespace-only is not empty: it fails to decode like any other bad value
/// - email: the LAST matching claim in scan order wins; `userDetails` is only a fallback
pub fn extract_identity(header_value: Option<&str>) -> Result<IdentityResult, DecodeError> {
    let Some(raw) = header_value.filter(|v| !v.is_empty()) else {
        return Ok(IdentityResult::anonymous());
    };

    let principal = decode_principal(raw)?;
    Ok(identity_from_principal(principal))
}

fn identity_from_principal(principal: ClientPrincipal) -> IdentityResult {
    // No early exit: every matching claim overwrites the previous one,
    // including a claim without a value, which clears it.
    let mut email = None;
    for claim in principal.claims.iter().flatten() {
        if EMAIL_CLAIM_TYPES.contains(&claim.typ.as_str()) {
            email = claim.val.clone();
        }
    }

    if email.as_deref().is_none_or(str::is_empty)
        && let Some(details) = principal.user_details.filter(|d| !d.is_empty())
    {
        email = Some(details);
    }

    IdentityResult {
        is_authenticated: true,
        user_id: principal.user_id,
        email,
    }
}
