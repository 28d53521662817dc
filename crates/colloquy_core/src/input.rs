//! Input turn types for conversation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One unit of conversational input: text content plus a role tag.
///
/// # Examples
///
/// ```
/// use colloquy_core::{ConversationInput, Role};
///
/// let turn = ConversationInput::new("What is Dapr in one sentence?", Role::Generic);
///
/// assert_eq!(turn.content(), "What is Dapr in one sentence?");
/// assert_eq!(*turn.role(), Role::Generic);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ConversationInput {
    /// Text content of the turn
    content: String,
    /// Role of the turn's author
    #[builder(default)]
    #[serde(default)]
    role: Role,
    /// Ask the sidecar to scrub personally identifiable information.
    ///
    /// Forwarded opaquely; never interpreted locally.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scrub_pii: Option<bool>,
}

impl ConversationInput {
    /// Creates a new input turn with the given content and role.
    pub fn new(content: impl Into<String>, role: Role) -> Self {
        Self {
            content: content.into(),
            role,
            scrub_pii: None,
        }
    }

    /// Returns a builder for constructing a ConversationInput.
    pub fn builder() -> ConversationInputBuilder {
        ConversationInputBuilder::default()
    }
}
