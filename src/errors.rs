//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Cancellation is deliberately absent: a canceled call delivers nothing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Connectivity or timeout failure, an invalid request URL, or a non-2xx
    /// response that carried no decodable error envelope.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The API reported a non-success outcome, either as a non-2xx response
    /// with a `meta` envelope or as an error status inside a 2xx body.
    #[error("server error {status}: {message}")]
    Server { status: i64, message: String },
    /// The transport exchange succeeded but the body failed wrapper-level
    /// validation.
    #[error("decode failure: {0}")]
    Decode(String),
}
