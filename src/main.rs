/*
 * Responsibility
 * - tokio runtime
 * - app::run() only; no logic here
 */
use anyhow::Result;

mod api;
mod app;
mod config;
mod error;
mod middleware;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
