//! Type conversions between Colloquy and sidecar wire formats.

use crate::dto::{ConverseRequestDto, ConverseResponseDto, InputDto};
use colloquy_core::{ConversationRequest, ConversationResponse, ConversationResult};
use colloquy_error::{ClientError, ClientErrorKind};

/// Converts a ConversationRequest to the sidecar wire format.
pub fn to_wire_request(req: &ConversationRequest) -> ConverseRequestDto {
    let inputs = req
        .inputs()
        .iter()
        .map(|input| InputDto {
            content: input.content().clone(),
            role: Some(input.role().as_str().to_string()),
            scrub_pii: *input.scrub_pii(),
        })
        .collect();

    ConverseRequestDto {
        inputs,
        context_id: req.context_id().clone(),
        temperature: *req.temperature(),
        metadata: req.metadata().clone(),
    }
}

/// Converts a sidecar wire response to a ConversationResponse.
pub fn from_wire_response(
    response: ConverseResponseDto,
) -> Result<ConversationResponse, ClientError> {
    let outputs = response
        .outputs
        .into_iter()
        .map(|o| ConversationResult::new(o.result))
        .collect::<Vec<_>>();

    let mut builder = ConversationResponse::builder();
    builder.outputs(outputs);
    if let Some(context_id) = response.context_id {
        builder.context_id(Some(context_id));
    }

    builder
        .build()
        .map_err(|e| ClientError::new(ClientErrorKind::Builder(format!("{e}"))))
}
