/*
 * Responsibility
 * - Logging + panic hook setup
 * - Config loading → Router assembly → middleware
 * - axum::serve() with graceful shutdown
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware};

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,hello_swa=debug,tower_http=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr may be swallowed by the Functions host; tracing is not.
        tracing::error!(?info, "panic");

        // Development: crash so it gets noticed. Production: default hook, and
        // the request-level CatchPanicLayer answers with a failure envelope.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    with_middleware(api::routes(), config)
}

// Outermost last: responses built by the http layer (timeouts, panics) still
// get CORS and security headers.
fn with_middleware(router: Router, config: &Config) -> Router {
    let router = middleware::http::apply(router, config);
    let router = middleware::cors::apply(router, config);
    middleware::security_headers::apply(router)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = ?err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
