//! Entry point for the translation resource server.

use std::path::PathBuf;
use std::process::ExitCode;

use node_translation_server::server::{
    self,
    AppState,
};
use tracing_subscriber::EnvFilter;

/// Listen address used when `I18N_SERVER_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:8787";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // First positional argument: resource root (one subdirectory per
    // locale, config.json alongside). Defaults to the current directory.
    let root = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    let addr =
        std::env::var("I18N_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let app = server::router(AppState::new(&root));
    tracing::info!(root = %root.display(), %addr, "Serving translation bundles");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "Failed to bind listen address");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "Server terminated abnormally");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
