//! Console rendering for conversation exchanges.
//!
//! The output contract, kept verbatim from the original demo:
//! `Input sent: <prompt>` always comes first, a successful exchange prints
//! `Output response:` followed by one ` <result>` per output entry in
//! response order, and any failure prints a single `Error: <message>` line.

use colloquy_core::ConversationResponse;
use colloquy_error::ClientError;

/// The line announcing the prompt that was sent.
pub fn input_line(prompt: &str) -> String {
    format!("Input sent: {prompt}")
}

/// Renders the output block for a response.
///
/// Zero outputs render the bare `Output response:` header.
pub fn response_block(response: &ConversationResponse) -> String {
    let mut block = String::from("Output response:");
    for output in response.outputs() {
        block.push(' ');
        block.push_str(output.result());
        block.push('\n');
    }
    block
}

/// The single diagnostic line printed on any failure.
pub fn error_line(err: &ClientError) -> String {
    format!("Error: {}", err.kind)
}

/// Renders a whole exchange: the input line, then either the output block
/// or the error line.
pub fn transcript(prompt: &str, outcome: &Result<ConversationResponse, ClientError>) -> String {
    let mut text = input_line(prompt);
    text.push('\n');
    match outcome {
        Ok(response) => text.push_str(&response_block(response)),
        Err(err) => {
            text.push_str(&error_line(err));
            text.push('\n');
        }
    }
    text
}
