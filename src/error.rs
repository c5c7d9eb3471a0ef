// SPDX-License-Identifier: MIT

//! Error types for the sync layer.
//!
//! Every failure surfaces to the caller; nothing below the UI layer is
//! allowed to swallow an error. Response bodies are kept on decode and
//! unexpected-status failures so malformed server responses can be
//! diagnosed.

/// Error for a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An authenticated call was issued with no token in the session.
    /// Raised before any request is sent.
    #[error("missing authentication token")]
    MissingToken,

    /// Transport-level failure (no connectivity, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request with a 400 error envelope.
    /// The message is the server's human-readable text, verbatim.
    #[error("{message}")]
    Rejected { message: String },

    /// A 2xx response (or a 400 envelope) that did not decode.
    #[error("failed to decode response: {reason}")]
    Decode { reason: String, body: String },

    /// Any status code not explicitly handled.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// A required identifier was empty. Caught before building the request.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// True for failures where the server was never reached or gave no
    /// interpretable answer. Used by the release check to report `Unknown`
    /// instead of "not released".
    pub fn is_indeterminate(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_)
                | ApiError::Decode { .. }
                | ApiError::UnexpectedStatus { .. }
                | ApiError::Internal(_)
        )
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
