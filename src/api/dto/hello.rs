/*
 * Responsibility
 * - Success envelope of the hello world endpoint
 * - `user` only surfaces email + isAuthenticated (userId stays server-side)
 */
use serde::Serialize;

use crate::services::client_principal::IdentityResult;

pub const GREETING: &str = "Hello World";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub success: bool,
    pub data: &'static str,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub email: Option<String>,
    pub is_authenticated: bool,
}

impl From<IdentityResult> for HelloResponse {
    fn from(identity: IdentityResult) -> Self {
        Self {
            success: true,
            data: GREETING,
            user: UserInfo {
                email: identity.email,
                is_authenticated: identity.is_authenticated,
            },
        }
    }
}
