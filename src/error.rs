//! API Error Types

use thiserror::Error;

/// Errors surfaced by the task API client.
///
/// Transport and application failures are shown to the user the same way
/// (a notice or the error panel); the transport detail is only logged to
/// the console for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed: network failure, unreachable server,
    /// or an unreadable response body.
    #[error("Failed to connect to server")]
    Transport,

    /// The server responded but reported `success: false`.
    #[error("{0}")]
    Application(String),
}
