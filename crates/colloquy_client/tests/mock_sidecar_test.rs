//! Tests against an in-process mock sidecar.
//!
//! The mock serves the conversation endpoint on an ephemeral port and
//! routes by component name: `echo` returns one output per input with the
//! same text, `silent` returns no outputs, and `broken` fails every call.

use axum::Json;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use colloquy_client::{ConversationClient, Converse, SidecarConfig};
use colloquy_core::{ConversationInput, ConversationRequest, Role};
use colloquy_error::ClientErrorKind;
use serde_json::{Value, json};

async fn converse_handler(
    Path(component): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    match component.as_str() {
        "echo" => {
            let outputs: Vec<Value> = body["inputs"]
                .as_array()
                .cloned()
                .unwrap_or_default()
                .iter()
                .map(|input| json!({ "result": input["content"] }))
                .collect();
            let mut response = json!({ "outputs": outputs });
            if let Some(context_id) = body.get("contextID") {
                response["contextID"] = context_id.clone();
            }
            (StatusCode::OK, Json(response))
        }
        "silent" => (StatusCode::OK, Json(json!({}))),
        "secure" => {
            let authorized = headers
                .get("dapr-api-token")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|token| token == "token-123");
            if authorized {
                (StatusCode::OK, Json(json!({ "outputs": [] })))
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "missing api token" })),
                )
            }
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("component {component} failed") })),
        ),
    }
}

async fn spawn_mock_sidecar() -> anyhow::Result<String> {
    let app = axum::Router::new().route(
        "/v1.0-alpha1/conversation/:component/converse",
        post(converse_handler),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(format!("http://{addr}"))
}

async fn client() -> anyhow::Result<ConversationClient> {
    let base_url = spawn_mock_sidecar().await?;
    let config = SidecarConfig::default().with_base_url(base_url);
    Ok(ConversationClient::with_config(config)?)
}

#[tokio::test]
async fn echo_component_returns_input_text() -> anyhow::Result<()> {
    let client = client().await?;

    let prompt = "What is Dapr in one sentence?";
    let response = client
        .converse("echo", vec![ConversationInput::new(prompt, Role::Generic)])
        .await?;

    assert_eq!(response.outputs().len(), 1);
    assert_eq!(response.outputs()[0].result(), prompt);
    Ok(())
}

#[tokio::test]
async fn output_order_matches_response_order() -> anyhow::Result<()> {
    let client = client().await?;

    let response = client
        .converse(
            "echo",
            vec![
                ConversationInput::new("first", Role::User),
                ConversationInput::new("second", Role::User),
                ConversationInput::new("third", Role::User),
            ],
        )
        .await?;

    let texts: Vec<_> = response.outputs().iter().map(|o| o.result().as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    Ok(())
}

#[tokio::test]
async fn silent_component_yields_empty_outputs() -> anyhow::Result<()> {
    let client = client().await?;

    let response = client
        .converse("silent", vec![ConversationInput::new("hi", Role::Generic)])
        .await?;

    assert!(response.outputs().is_empty());
    Ok(())
}

#[tokio::test]
async fn broken_component_maps_to_api_error() -> anyhow::Result<()> {
    let client = client().await?;

    let err = client
        .converse("broken", vec![ConversationInput::new("hi", Role::Generic)])
        .await
        .unwrap_err();

    match err.kind {
        ClientErrorKind::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("broken"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn unreachable_sidecar_maps_to_transport_error() -> anyhow::Result<()> {
    // Nothing listens on port 1.
    let config = SidecarConfig::default().with_base_url("http://127.0.0.1:1");
    let client = ConversationClient::with_config(config)?;

    let err = client
        .converse("echo", vec![ConversationInput::new("hi", Role::Generic)])
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ClientErrorKind::SidecarUnreachable(_)));
    Ok(())
}

#[tokio::test]
async fn api_token_is_forwarded_when_configured() -> anyhow::Result<()> {
    let base_url = spawn_mock_sidecar().await?;

    let with_token = ConversationClient::with_config(
        SidecarConfig::default()
            .with_base_url(base_url.clone())
            .with_api_token("token-123"),
    )?;
    let response = with_token
        .converse("secure", vec![ConversationInput::new("hi", Role::Generic)])
        .await?;
    assert!(response.outputs().is_empty());

    let without_token =
        ConversationClient::with_config(SidecarConfig::default().with_base_url(base_url))?;
    let err = without_token
        .converse("secure", vec![ConversationInput::new("hi", Role::Generic)])
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ClientErrorKind::Api { status: 401, .. }));
    Ok(())
}

#[tokio::test]
async fn context_id_round_trips() -> anyhow::Result<()> {
    let client = client().await?;

    let request = ConversationRequest::builder()
        .inputs(vec![ConversationInput::new("hi", Role::User)])
        .context_id(Some("ctx-42".to_string()))
        .build()?;

    let response = client.converse_with("echo", &request).await?;
    assert_eq!(response.context_id().as_deref(), Some("ctx-42"));
    Ok(())
}

#[tokio::test]
async fn repeated_calls_are_independent() -> anyhow::Result<()> {
    let client = client().await?;
    let inputs = vec![ConversationInput::new("same prompt", Role::Generic)];

    let first = client.converse("echo", inputs.clone()).await?;
    let second = client.converse("echo", inputs).await?;

    assert_eq!(first, second);
    assert_eq!(second.outputs().len(), 1);
    Ok(())
}
