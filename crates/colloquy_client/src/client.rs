//! Conversation client over the sidecar HTTP API.

use crate::{Converse, SidecarConfig, conversions, dto::ConverseResponseDto};
use async_trait::async_trait;
use colloquy_core::{ConversationInput, ConversationRequest, ConversationResponse};
use colloquy_error::{ClientError, ClientErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

const CONVERSE_PATH: &str = "v1.0-alpha1/conversation";
const API_TOKEN_HEADER: &str = "dapr-api-token";

/// Client for named conversation components behind the sidecar.
///
/// Holds no conversation state of its own; every call is an independent
/// request/response exchange, and two identical calls do not influence
/// each other.
#[derive(Debug, Clone)]
pub struct ConversationClient {
    client: Client,
    config: SidecarConfig,
}

impl ConversationClient {
    /// Creates a client from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds a malformed sidecar
    /// address or the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(SidecarConfig::from_env()?)
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(config), fields(sidecar = %config.base_url()))]
    pub fn with_config(config: SidecarConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                ClientError::new(ClientErrorKind::Builder(format!(
                    "Failed to build HTTP client: {e}"
                )))
            })?;

        debug!(
            sidecar = %config.base_url(),
            timeout_secs = config.timeout().as_secs(),
            "Created conversation client"
        );

        Ok(Self { client, config })
    }

    /// Returns the sidecar configuration in use.
    pub fn config(&self) -> &SidecarConfig {
        &self.config
    }

    fn converse_url(&self, component: &str) -> String {
        format!(
            "{}/{}/{}/converse",
            self.config.base_url(),
            CONVERSE_PATH,
            component
        )
    }

    fn validate(component: &str, request: &ConversationRequest) -> Result<(), ClientError> {
        if component.is_empty() {
            return Err(ClientError::new(ClientErrorKind::InvalidRequest(
                "component name must not be empty".to_string(),
            )));
        }
        if request.inputs().is_empty() {
            return Err(ClientError::new(ClientErrorKind::InvalidRequest(
                "inputs must not be empty".to_string(),
            )));
        }
        if let Some(position) = request.inputs().iter().position(|i| i.content().is_empty()) {
            return Err(ClientError::new(ClientErrorKind::InvalidRequest(format!(
                "input {position} has empty content"
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl Converse for ConversationClient {
    async fn converse(
        &self,
        component: &str,
        inputs: Vec<ConversationInput>,
    ) -> Result<ConversationResponse, ClientError> {
        self.converse_with(component, &ConversationRequest::from_inputs(inputs))
            .await
    }

    #[instrument(skip(self, request), fields(component = %component, sidecar = %self.config.base_url()))]
    async fn converse_with(
        &self,
        component: &str,
        request: &ConversationRequest,
    ) -> Result<ConversationResponse, ClientError> {
        Self::validate(component, request)?;

        let wire_request = conversions::to_wire_request(request);

        debug!(
            component = %component,
            input_count = wire_request.inputs.len(),
            "Sending conversation request"
        );

        let mut http_request = self
            .client
            .post(self.converse_url(component))
            .json(&wire_request);

        if let Some(token) = self.config.api_token() {
            http_request = http_request.header(API_TOKEN_HEADER, token);
        }

        let response = http_request.send().await.map_err(|e| {
            error!(component = %component, error = ?e, "Sidecar request failed");
            ClientError::new(ClientErrorKind::SidecarUnreachable(format!(
                "Request failed: {e}"
            )))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                component = %component,
                status = %status,
                error = %error_text,
                "Sidecar returned an error"
            );

            return Err(ClientError::new(ClientErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let wire_response: ConverseResponseDto = response.json().await.map_err(|e| {
            error!(component = %component, error = ?e, "Failed to parse response");
            ClientError::new(ClientErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {e}"
            )))
        })?;

        debug!(
            component = %component,
            output_count = wire_response.outputs.len(),
            "Received conversation response"
        );

        conversions::from_wire_response(wire_response)
    }
}
