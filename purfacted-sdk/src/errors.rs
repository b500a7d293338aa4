//! Unified error types for the `purfacted` crate.
//!
//! This module centralizes all failures that can occur while using the SDK and
//! provides a single top-level [`Error`] enum plus the convenient [`Result`] alias.
//! Failures reported by the PurFacted API itself (`{"success": false, ...}`) land in
//! [`Error::Api`]; everything below the envelope (`reqwest`, URL parsing, JSON
//! decoding) is kept apart so callers can tell the two situations apart.

use std::fmt;

use thiserror::Error;

/// Code used when the API reports a failure without an error code.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN";

/// Message used when the API reports a failure without an error message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::PurfactedClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// No API key was supplied (neither through the builder nor `PURFACTED_API_KEY`).
    #[error("An API key is required to build the client")]
    MissingApiKey,

    /// The API key contains bytes that are not allowed in an HTTP header.
    #[error("The API key is not a valid header value")]
    InvalidApiKey,

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to start the runtime backing the blocking client.
    #[error("Failed to start the blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

// --- API Reported Error ---

/// A failure reported by the PurFacted API through its response envelope.
///
/// Built only from envelopes whose `success` flag is false. Missing fields fall
/// back to [`UNKNOWN_ERROR_CODE`] and [`UNKNOWN_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Machine-readable error code, e.g. `NOT_FOUND`.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ApiError {
    /// Create an error from a code and a message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl Default for ApiError {
    fn default() -> Self {
        Self::new(UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::Api`] — the API answered with `success: false`
/// - [`Error::Request`] — HTTP transport issues or a body that is not an envelope
/// - [`Error::Parse`] — URL parsing failures
/// - [`Error::Build`] — construction of the client failed
///
/// Most lower-level errors automatically convert into this enum via `From`.
#[derive(Debug, Error)]
pub enum Error {
    /// The API reported a failure in its response envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// HTTP request/response failed (transport, server, JSON).
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// URL parsing failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the client failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),
}

impl Error {
    /// The API error code, if this error was reported by the API.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api(e) => Some(e.code.as_str()),
            _ => None,
        }
    }
}

// --- Consolidated Request Error ---

/// Transport and decoding errors below the response envelope.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (timeouts, TLS, I/O, etc.).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server returned a non-success status and a body that is not a JSON envelope.
    #[error("Server responded with an error: {status} - {message}")]
    Server {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// The response body, or the canonical reason when the body is unreadable.
        message: String,
    },

    /// JSON decoding failed when parsing a server response.
    #[error("JSON decode error: {message}")]
    DecodeJson {
        /// Error message from the JSON deserializer.
        message: String,
    },
}

/// A specialized `Result` type for `purfacted` operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Request(RequestError::DecodeJson {
            message: err.to_string(),
        })
    }
}
