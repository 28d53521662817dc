//! HTTP client for the sidecar conversation API.
//!
//! The sidecar exposes registered conversation components at
//! `POST /v1.0-alpha1/conversation/{component}/converse`. This crate wraps
//! that endpoint: build a [`ConversationClient`] from the environment (or a
//! [`SidecarConfig`]), then call [`Converse::converse`] with a component
//! name and input turns.

mod client;
mod config;
mod conversions;
mod dto;

pub use client::ConversationClient;
pub use config::SidecarConfig;
pub use dto::{ConverseRequestDto, ConverseResponseDto, InputDto, OutputDto};

use async_trait::async_trait;
use colloquy_core::{ConversationInput, ConversationRequest, ConversationResponse};
use colloquy_error::ClientError;

/// Seam over the conversation call, so callers can substitute a fake
/// component in tests.
#[async_trait]
pub trait Converse: Send + Sync {
    /// Sends the given input turns to the named component.
    async fn converse(
        &self,
        component: &str,
        inputs: Vec<ConversationInput>,
    ) -> Result<ConversationResponse, ClientError>;

    /// Sends a full conversation request to the named component.
    async fn converse_with(
        &self,
        component: &str,
        request: &ConversationRequest,
    ) -> Result<ConversationResponse, ClientError>;
}
