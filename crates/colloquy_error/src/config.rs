//! Sidecar environment configuration errors.

/// Ways the sidecar environment can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A port variable held something that is not a port number
    #[display("{} is not a valid port: {}", variable, value)]
    InvalidPort {
        /// Name of the offending environment variable
        variable: &'static str,
        /// The value as found in the environment
        value: String,
    },

    /// An endpoint variable was set but empty
    #[display("{} is set but empty", variable)]
    EmptyEndpoint {
        /// Name of the offending environment variable
        variable: &'static str,
    },
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use colloquy_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidPort {
///     variable: "DAPR_HTTP_PORT",
///     value: "alpha".to_string(),
/// });
/// assert!(format!("{}", err).contains("DAPR_HTTP_PORT"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
