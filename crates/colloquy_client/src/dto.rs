//! Data transfer objects for the sidecar conversation API.
//!
//! Field names follow the sidecar's alpha1 wire format (`contextID`,
//! `scrubPII`), which is why these are kept separate from the core types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One input turn in wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDto {
    /// Text content of the turn
    pub content: String,
    /// Role tag, lowercase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Request PII scrubbing for this turn
    #[serde(rename = "scrubPII", skip_serializing_if = "Option::is_none")]
    pub scrub_pii: Option<bool>,
}

/// Conversation request in wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverseRequestDto {
    /// Ordered input turns
    pub inputs: Vec<InputDto>,
    /// Conversation continuity handle
    #[serde(rename = "contextID", skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Per-call sidecar metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// One output entry in wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDto {
    /// Output text produced by the component
    pub result: String,
}

/// Conversation response in wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverseResponseDto {
    /// Ordered output entries; absent means none
    #[serde(default)]
    pub outputs: Vec<OutputDto>,
    /// Continuity handle returned by the sidecar
    #[serde(rename = "contextID", default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
}
