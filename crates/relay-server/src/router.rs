//! Axum router construction for the relay server.
//!
//! Assembles the four relay routes into a single [`Router`] with a CORS
//! policy applied uniformly to every response.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the relay server.
///
/// The router includes:
/// - `GET /` -- HTML status page
/// - `GET /latest` -- current identifier as plain text
/// - `GET /post/{id}` -- submit a new identifier
/// - `GET /clear` -- reset to absent
///
/// Every origin, method and header is allowed cross-origin. No cookies
/// or credentials are involved.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/latest", get(handlers::latest))
        .route("/post/{id}", get(handlers::post_id))
        .route("/clear", get(handlers::clear))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
