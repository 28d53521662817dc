//! Colloquy: a conversation client for sidecar-based middleware.
//!
//! Sends input turns to a named conversation component registered with the
//! sidecar and returns the output results it produced. The `echo-demo`
//! binary exercises the client against the mock "echo" component.

pub mod report;

pub use colloquy_client::{ConversationClient, Converse, SidecarConfig};
pub use colloquy_core::{
    ConversationInput, ConversationRequest, ConversationResponse, ConversationResult, Role,
};
pub use colloquy_error::{ClientError, ClientErrorKind, ConfigError, ConfigErrorKind};
