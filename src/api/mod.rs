/*
 * Responsibility
 * - HTTP surface: DTOs, handlers, and the route table (re-exported as routes())
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
