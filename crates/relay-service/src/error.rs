//! Error types for the relay service binary.

use relay_server::ServerError;

/// Top-level error for the relay service binary.
///
/// Returned from `main`, so any variant ends the process with a non-zero
/// exit status and its message printed to stderr.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP server failed to bind or exited with an I/O error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}
