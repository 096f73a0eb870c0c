//! Chat client for OpenAI-compatible providers

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::outbound::{
    ChatMessage, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole,
};

/// Client for the `/v1/chat/completions` endpoint
#[derive(Clone)]
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiChatClient {
    /// Create a client. Without a timeout the reqwest default applies.
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmPort for OpenAiChatClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
        };

        let mut http_request = self.client.post(self.completions_url()).json(&api_request);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::RequestFailed(format!("{}: {}", status, error_text)));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response, &self.model)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let system = request.system_prompt.as_deref().map(ChatMessage::system);

    system
        .iter()
        .chain(request.messages.iter())
        .map(|msg| OpenAIMessage {
            role: match msg.role {
                MessageRole::User => "user",
                MessageRole::System => "system",
            }
            .to_string(),
            content: Some(msg.content.clone()),
        })
        .collect()
}

fn convert_response(
    response: OpenAIChatResponse,
    requested_model: &str,
) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        model: response
            .model
            .unwrap_or_else(|| requested_model.to_string()),
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
    model: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenAIChoice {
    message: OpenAIMessage,
}
