//! Remote completion via the Bedrock Converse API.

use std::time::Duration;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{debug, info};

use crate::completion::{Completion, Outcome, Task};
use crate::error::CompletionError;
use crate::prompt::{self, SYSTEM_PROMPT};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// A Bedrock model answering tasks with JSON.
#[derive(Debug, Clone)]
pub struct BedrockCompletion {
    client: Client,
    model_id: String,
    timeout: Duration,
    temperature: f32,
}

impl BedrockCompletion {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Build a client from the default AWS credential chain for `region`.
    pub async fn from_region(region: &str, model_id: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&config), model_id)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Send a single user message and return the concatenated text blocks
    /// of the reply.
    async fn converse(&self, user_message: &str) -> Result<String, CompletionError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_message.to_string()))
            .build()
            .map_err(|e| CompletionError::Invocation(e.to_string()))?;

        let inference = InferenceConfiguration::builder()
            .temperature(self.temperature)
            .build();

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| CompletionError::Invocation(e.into_service_error().to_string()))?;

        if let Some(usage) = response.usage() {
            debug!(
                model_id = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "converse usage"
            );
        }

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| CompletionError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

impl Completion for BedrockCompletion {
    async fn complete(&self, task: &Task<'_>) -> Result<Outcome, CompletionError> {
        let prompt = prompt::render(task)?;

        info!(model_id = %self.model_id, task = task.kind(), "requesting remote completion");

        let text = tokio::time::timeout(self.timeout, self.converse(&prompt))
            .await
            .map_err(|_| CompletionError::Timeout(self.timeout))??;

        prompt::decode(task, &text)
    }
}
