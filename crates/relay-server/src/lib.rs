//! HTTP relay server for game instance identifiers.
//!
//! This crate provides an Axum HTTP server that holds a single
//! identifier in memory and exposes:
//!
//! - **`GET /post/{id}`** to submit a new identifier (validated, then
//!   stored, replacing whatever was there)
//! - **`GET /latest`** to fetch the current identifier as plain text
//! - **`GET /clear`** to reset the relay to its empty state
//! - **`GET /`** for an auto-refreshing HTML status page
//!
//! # Architecture
//!
//! The current identifier lives in a [`LatestIdStore`] owned by the
//! [`AppState`], which the router hands to every handler through Axum's
//! `State` extractor. The store serializes writes behind a single lock
//! so readers never see a torn value and the last write wins.

pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::RelayError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError, DEFAULT_PORT};
pub use state::{AppState, LatestIdStore};
