//! HTTP transport binding for the translation service.

mod handlers;
mod state;

use axum::Router;
use axum::routing::{
    get,
    post,
};

pub use state::AppState;

/// Build the service router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/translation", post(handlers::get_translation))
        .route("/config", get(handlers::get_config).post(handlers::set_config))
        .with_state(state)
}
