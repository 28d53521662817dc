//! Response types for conversation calls.

use serde::{Deserialize, Serialize};

/// One unit of output text returned by the remote component.
///
/// Results have no identity beyond their position in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ConversationResult {
    /// Output text
    result: String,
}

impl ConversationResult {
    /// Creates a new result holding the given text.
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// The response to a conversation call.
///
/// Output count and ordering are determined entirely by the remote
/// component; there is no 1:1 mapping to input turns, and the sequence
/// may be empty.
///
/// # Examples
///
/// ```
/// use colloquy_core::{ConversationResponse, ConversationResult};
///
/// let response = ConversationResponse::builder()
///     .outputs(vec![ConversationResult::new("hello")])
///     .build()
///     .unwrap();
///
/// assert_eq!(response.outputs().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ConversationResponse {
    /// Ordered output results, as produced by the component
    #[builder(default)]
    #[serde(default)]
    outputs: Vec<ConversationResult>,
    /// Continuity handle returned by the sidecar
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context_id: Option<String>,
}

impl ConversationResponse {
    /// Returns a builder for constructing a ConversationResponse.
    pub fn builder() -> ConversationResponseBuilder {
        ConversationResponseBuilder::default()
    }
}
