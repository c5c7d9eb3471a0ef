//! Response envelopes.
//!
//! Every API response is wrapped in `{ "status": ..., "message": ... }`,
//! where `message` is the payload on success and a plain string on a 400
//! rejection.

use serde::{Deserialize, Serialize};

/// Successful response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub message: T,
}

/// Uniform 400 error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
}

/// Token payload inside login/register responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}
