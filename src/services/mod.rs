/*
 * Responsibility
 * - Domain logic with no HTTP/axum request handling in it
 */
pub mod client_principal;
