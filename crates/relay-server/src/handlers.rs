//! Endpoint handlers for the relay server.
//!
//! Each handler is a thin adapter over [`LatestIdStore`](crate::state::LatestIdStore)
//! and identifier validation.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Auto-refreshing HTML status page |
//! | `GET` | `/latest` | Current identifier as plain text (empty if absent) |
//! | `GET` | `/post/{id}` | Validate and store a new identifier |
//! | `GET` | `/clear` | Reset the relay to absent |

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use percent_encoding::percent_decode_str;
use relay_types::{Identifier, IdentifierError};
use tracing::{debug, info, warn};

use crate::error::RelayError;
use crate::page::render_status_page;
use crate::state::AppState;

/// Body returned by successful writes.
pub const OK_BODY: &str = "OK";

/// Path prefix of the submission route.
const POST_PREFIX: &str = "/post/";

/// Serve the HTML status page.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let current = state.store.get().await;
    Html(render_status_page(current.as_ref()))
}

/// Return the current identifier, or an empty body when absent.
pub async fn latest(State(state): State<Arc<AppState>>) -> String {
    state
        .store
        .get()
        .await
        .map(Identifier::into_inner)
        .unwrap_or_default()
}

/// Validate `id` and, if accepted, make it the current identifier.
///
/// Rejected submissions leave the store untouched and answer `400 Invalid ID`.
/// Segments that do not percent-decode to UTF-8 are decoded lossily and
/// rejected the same way.
pub async fn post_id(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<&'static str, RelayError> {
    let candidate = match path {
        Ok(Path(candidate)) => candidate,
        Err(rejection) => {
            debug!(error = %rejection, "ID segment is not valid UTF-8");
            lossy_segment(&uri)
        }
    };

    match Identifier::parse(candidate) {
        Ok(id) => {
            info!(id = %id, shape = %id.shape(), "New ID accepted");
            state.store.set(id).await;
            Ok(OK_BODY)
        }
        Err(err) => {
            let IdentifierError::Invalid { value, length } = &err;
            warn!(value = %value, length, "Invalid ID rejected");
            Err(err.into())
        }
    }
}

/// Percent-decode the id segment of `uri`, replacing invalid UTF-8 with U+FFFD.
fn lossy_segment(uri: &Uri) -> String {
    let raw = uri.path().strip_prefix(POST_PREFIX).unwrap_or_default();
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Reset the relay to absent.
pub async fn clear(State(state): State<Arc<AppState>>) -> &'static str {
    state.store.clear().await;
    info!("ID cleared");
    OK_BODY
}
