//! Where the raw client principal comes from.
//!
//! Each hosting interface hands us headers in its own shape. Adapters implement
//! `PrincipalSource` so the extraction logic exists exactly once.

use std::collections::HashMap;

use axum::http::HeaderMap;

use super::core::DecodeError;

pub const CLIENT_PRINCIPAL_HEADER: &str = "x-ms-client-principal";

/// Anything that can supply the raw `x-ms-client-principal` value.
pub trait PrincipalSource {
    fn client_principal(&self) -> Result<Option<&str>, DecodeError>;
}

impl PrincipalSource for HeaderMap {
    fn client_principal(&self) -> Result<Option<&str>, DecodeError> {
        self.get(CLIENT_PRINCIPAL_HEADER)
            .map(|v| v.to_str().map_err(|_| DecodeError::HeaderEncoding))
            .transpose()
    }
}

/// Headers as the Functions host serializes them: name -> list of values.
/// Names arrive in whatever case the client used.
impl PrincipalSource for HashMap<String, Vec<String>> {
    fn client_principal(&self) -> Result<Option<&str>, DecodeError> {
        Ok(self
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(CLIENT_PRINCIPAL_HEADER))
            .and_then(|(_, values)| values.first())
            .map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn header_map_missing_is_none() {
        let headers = HeaderMap::new();
        assert!(headers.client_principal().unwrap().is_none());
    }

    #[test]
    fn header_map_returns_value() {
        let mut headers = HeaderMap::new();
        headers.insert(CLIENT_PRINCIPAL_HEADER, HeaderValue::from_static("e30="));
        assert_eq!(headers.client_principal().unwrap(), Some("e30="));
    }

    #[test]
    fn header_map_rejects_opaque_bytes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CLIENT_PRINCIPAL_HEADER,
            HeaderValue::from_bytes(b"\xe3\x81\x82").unwrap(),
        );
        assert!(matches!(
            headers.client_principal(),
            Err(DecodeError::HeaderEncoding)
        ));
    }

    #[test]
    fn invocation_headers_match_case_insensitively() {
        let headers = HashMap::from([
            ("Accept".to_string(), vec!["*/*".to_string()]),
            (
                "X-MS-CLIENT-PRINCIPAL".to_string(),
                vec!["e30=".to_string(), "ignored".to_string()],
            ),
        ]);
        assert_eq!(headers.client_principal().unwrap(), Some("e30="));
    }

    #[test]
    fn invocation_headers_with_no_values_is_none() {
        let headers = HashMap::from([(CLIENT_PRINCIPAL_HEADER.to_string(), Vec::new())]);
        assert!(headers.client_principal().unwrap().is_none());
    }
}
