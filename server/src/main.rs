#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::HostError;

#[tokio::main]
async fn main() {
    // `.env` is optional; deployments set variables directly.
    let _ = dotenvy::dotenv();

    let filter = config::log_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "imgproc host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = config::site_addr_from_env(leptos_options.site_addr)?;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "imgproc listening");
    axum::serve(listener, app).await?;
    Ok(())
}
