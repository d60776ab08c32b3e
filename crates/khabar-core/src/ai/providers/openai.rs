use async_openai::{
    types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

use super::AiProvider;
use crate::{Error, Result};

/// OpenAI API provider
pub struct OpenAiProvider {
    /// None until the API key is configured; calls fail with a clear error.
    client: Option<Client<async_openai::config::OpenAIConfig>>,
    model: String,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<&str>, model: &str, max_tokens: u32) -> Self {
        let client = api_key.map(|key| {
            let config = async_openai::config::OpenAIConfig::new().with_api_key(key);
            Client::with_config(config)
        });

        Self {
            client,
            model: model.to_string(),
            max_tokens: max_tokens.max(1),
        }
    }
}

#[async_trait::async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| Error::AiProvider("OPENAI_API_KEY is not set".to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()
                    .map_err(|e| Error::AiProvider(e.to_string()))?,
            )])
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| Error::AiProvider(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(content)
    }
}
