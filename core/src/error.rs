//! Error types for the admin API helpers.
//!
//! # Design
//! The request helpers never classify responses. A 4xx or 5xx comes back as
//! an ordinary `HttpResponse`; `NotFound` and `Http` are only produced
//! when a caller opts in through `HttpResponse::error_for_status`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A record handed to `Payload` did not encode as a JSON object.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// No response was obtained (DNS, connect, I/O).
    #[error("transport failed: {0}")]
    Transport(String),
}
