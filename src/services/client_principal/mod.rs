/*!
 * Client principal (platform-injected identity)
 *
 * Responsibility:
 * - Decode `x-ms-client-principal` into a normalized `IdentityResult`
 * - Abstract over where the header comes from (`PrincipalSource`)
 *
 * Public API:
 * - extract_identity
 * - IdentityResult, DecodeError
 * - PrincipalSource
 */

mod core;
mod source;
mod types;

pub use self::core::{DecodeError, extract_identity};
pub use source::PrincipalSource;
pub use types::IdentityResult;
