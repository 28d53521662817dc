//! Echo demo - send one prompt to the mock "echo" conversation component.
//!
//! Takes no flags or arguments. The sidecar address comes from the
//! environment (`DAPR_HTTP_ENDPOINT` / `DAPR_HTTP_PORT`); any failure is
//! printed as a single `Error:` line and the process still exits cleanly.

use colloquy::{ConversationClient, ConversationInput, Converse, Role, report};
use tracing_subscriber::EnvFilter;

const CONVERSATION_COMPONENT: &str = "echo";
const PROMPT: &str = "What is Dapr in one sentence?";

#[tokio::main]
async fn main() {
    // Logging goes to stderr; stdout carries only the console contract.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    dotenvy::dotenv().ok();

    let outcome = match ConversationClient::new() {
        Ok(client) => {
            client
                .converse(
                    CONVERSATION_COMPONENT,
                    vec![ConversationInput::new(PROMPT, Role::Generic)],
                )
                .await
        }
        Err(err) => Err(err),
    };

    let transcript = report::transcript(PROMPT, &outcome);
    print!("{transcript}");
    if !transcript.ends_with('\n') {
        println!();
    }
}
