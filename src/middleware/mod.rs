/*
 * Responsibility
 * - Router-level middleware (re-export)
 * - Applied once in app.rs; handlers never see these concerns
 */
pub mod cors;
pub mod http;
pub mod security_headers;
