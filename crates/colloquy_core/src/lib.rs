//! Core data types for the Colloquy conversation client.
//!
//! This crate provides the request and response types exchanged with a
//! conversation component through the middleware sidecar.

mod input;
mod request;
mod response;
mod role;

pub use input::{ConversationInput, ConversationInputBuilder};
pub use request::{ConversationRequest, ConversationRequestBuilder};
pub use response::{ConversationResponse, ConversationResponseBuilder, ConversationResult};
pub use role::Role;
