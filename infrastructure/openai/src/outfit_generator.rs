use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::outfit::errors::RecommendationError;
use business::domain::outfit::model::PromptPayload;
use business::domain::outfit::services::OutfitGeneratorService;

use crate::client::OpenAIClient;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completions adapter for the outfit generator port.
///
/// Returns the first choice's content as-is; extraction and sanitization
/// happen in the business layer.
pub struct OutfitGeneratorOpenAI {
    client: OpenAIClient,
    model: String,
}

impl OutfitGeneratorOpenAI {
    pub fn new(client: OpenAIClient, model: String) -> Self {
        Self { client, model }
    }

    fn request_body(&self, prompt: &PromptPayload) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
            "temperature": 0.4,
            "max_tokens": 800,
        })
    }

    fn first_choice_content(data: &Value) -> Result<String, RecommendationError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(|content| content.to_string())
            .ok_or(RecommendationError::GenerationFailed)
    }
}

#[async_trait]
impl OutfitGeneratorService for OutfitGeneratorOpenAI {
    async fn generate(&self, prompt: &PromptPayload) -> Result<String, RecommendationError> {
        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|_| RecommendationError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(RecommendationError::GenerationFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| RecommendationError::GenerationFailed)?;

        Self::first_choice_content(&data)
    }
}
