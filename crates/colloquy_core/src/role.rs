//! Role types for conversation turns.

use serde::{Deserialize, Serialize};

/// Role tag carried by each input turn.
///
/// Serialized lowercase, matching the sidecar's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// No particular role; the component decides how to treat the turn.
    #[default]
    Generic,
    User,
    System,
    Assistant,
    Tool,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Generic => "generic",
            Role::User => "user",
            Role::System => "system",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}
