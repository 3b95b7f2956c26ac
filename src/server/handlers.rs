//! HTTP endpoint handlers.

use std::io::Write as _;

use axum::Form;
use axum::extract::State;
use axum::http::{
    HeaderMap,
    HeaderValue,
    StatusCode,
    header,
};
use axum::response::{
    IntoResponse,
    Json,
    Response,
};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::{
    Deserialize,
    Serialize,
};

use super::state::AppState;
use crate::config::ConfigRecord;
use crate::translation::DEFAULT_LOCALE;

/// Body served when translations are disabled or compilation degrades.
const EMPTY_BUNDLE: &[u8] = b"{}";

/// Form parameters for the bundle endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TranslationParams {
    /// Requested locale code; absent means the default locale.
    #[serde(default)]
    locale: Option<String>,
}

/// Form parameters for the config update endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct SetConfigParams {
    /// Desired state as a string; `"true"` (case-insensitive) enables,
    /// anything else disables. Absent means enable.
    #[serde(default)]
    translation_enabled: Option<String>,
}

/// Response body for config updates.
#[derive(Debug, Serialize)]
struct SetConfigOutcome {
    /// Whether the write was persisted.
    success: bool,
    /// The state that was persisted, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    translation_enabled: Option<bool>,
    /// Failure description, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// `POST /translation`: compile and serve the bundle for a locale.
///
/// The enabled flag is read fresh from disk on every request; when disabled
/// the response is an empty JSON object, never compressed. All compilation
/// and serialization failures also degrade to the empty object, so a broken
/// translation resource never blocks the host application.
pub(super) async fn get_translation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(params): Form<TranslationParams>,
) -> Response {
    if !state.config.read().translation_enabled {
        tracing::debug!("Translations disabled, serving empty bundle");
        return json_body(EMPTY_BUNDLE.to_vec(), false);
    }

    let requested = params.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
    let locale = effective_locale(requested);

    let bundle = state.compiler.compile(locale);
    let body = serde_json::to_vec(&bundle).unwrap_or_else(|error| {
        tracing::error!(%error, "Bundle serialization failed, degrading to empty bundle");
        EMPTY_BUNDLE.to_vec()
    });

    if accepts_gzip(&headers) {
        match gzip(&body) {
            Ok(compressed) => return json_body(compressed, true),
            Err(error) => {
                tracing::warn!(%error, "Compression failed, sending identity body");
            }
        }
    }

    json_body(body, false)
}

/// `GET /config`: the current enabled state, from a fresh read.
pub(super) async fn get_config(State(state): State<AppState>) -> Json<ConfigRecord> {
    Json(state.config.read())
}

/// `POST /config`: persist a new enabled state.
///
/// Persistence failure is the one error this service reports to callers.
pub(super) async fn set_config(
    State(state): State<AppState>,
    Form(params): Form<SetConfigParams>,
) -> Response {
    let enabled =
        params.translation_enabled.as_deref().unwrap_or("true").eq_ignore_ascii_case("true");

    match state.config.write(enabled) {
        Ok(()) => Json(SetConfigOutcome {
            success: true,
            translation_enabled: Some(enabled),
            error: None,
        })
        .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to persist config");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SetConfigOutcome {
                    success: false,
                    translation_enabled: None,
                    error: Some(error.to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// Assemble a JSON response, optionally marked as gzip-encoded.
fn json_body(body: Vec<u8>, gzipped: bool) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if gzipped {
        headers.insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));
    }
    (headers, body).into_response()
}

/// Whether the caller advertised gzip support.
fn accepts_gzip(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("gzip"))
}

fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// The locale the request resolves to.
///
/// The core uses locale strings verbatim as directory names, so strings
/// that cannot be a directory name (or would escape the resource root) are
/// replaced with the default locale here at the boundary.
fn effective_locale(requested: &str) -> &str {
    if is_valid_locale_code(requested) {
        requested
    } else {
        tracing::warn!(locale = requested, "Rejecting malformed locale code");
        DEFAULT_LOCALE
    }
}

/// Accepts codes like `en_US`, `zh-CN`, `pt`; rejects anything that is
/// empty, overlong, or contains characters outside `[A-Za-z0-9_-]`.
fn is_valid_locale_code(locale: &str) -> bool {
    !locale.is_empty()
        && locale.len() <= 32
        && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
