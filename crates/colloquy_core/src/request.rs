//! Request types for conversation calls.

use crate::ConversationInput;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A conversation request: an ordered sequence of input turns plus
/// optional knobs forwarded to the sidecar.
///
/// # Examples
///
/// ```
/// use colloquy_core::{ConversationInput, ConversationRequest, Role};
///
/// let request = ConversationRequest::builder()
///     .inputs(vec![ConversationInput::new("Hello!", Role::User)])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.inputs().len(), 1);
/// assert!(request.context_id().is_none());
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
pub struct ConversationRequest {
    /// Ordered input turns; must be non-empty when sent
    inputs: Vec<ConversationInput>,
    /// Opaque continuity handle, echoed back by the sidecar
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context_id: Option<String>,
    /// Sampling temperature forwarded to the component
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Per-call metadata forwarded to the sidecar
    #[builder(default)]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, String>,
}

impl ConversationRequest {
    /// Creates a request holding only the given input turns.
    pub fn from_inputs(inputs: Vec<ConversationInput>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Returns a builder for constructing a ConversationRequest.
    pub fn builder() -> ConversationRequestBuilder {
        ConversationRequestBuilder::default()
    }
}
