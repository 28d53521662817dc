//! Conversation client error types.

use crate::ConfigError;

/// Failure modes of a conversation call through the sidecar.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ClientErrorKind {
    /// The request was rejected before any HTTP call was made
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// The sidecar could not be reached (connection refused, timeout, DNS)
    #[display("Sidecar unreachable: {}", _0)]
    SidecarUnreachable(String),

    /// The sidecar answered with a non-success status
    #[display("Sidecar error (status {}): {}", status, message)]
    Api {
        /// HTTP status code returned by the sidecar
        status: u16,
        /// Response body, as returned
        message: String,
    },

    /// The response body could not be parsed
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Client construction failed
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Conversation client error with source location tracking.
///
/// # Examples
///
/// ```
/// use colloquy_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::InvalidRequest(
///     "inputs must not be empty".to_string(),
/// ));
/// assert!(format!("{}", err).contains("inputs must not be empty"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new ClientError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Client Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ClientError {}

impl From<ConfigError> for ClientError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        ClientError::new(ClientErrorKind::Builder(err.kind.to_string()))
    }
}
