use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::TextGenerator,
};

/// Completion token budget; a one-sentence recommendation fits comfortably
const MAX_COMPLETION_TOKENS: u32 = 300;

/// OpenAI chat-completions provider
///
/// Sends the assembled recommendation prompt as a single user message. The
/// HTTP client carries a per-call timeout so one stalled completion cannot
/// hold up sibling entries generated in parallel.
#[derive(Clone)]
pub struct OpenAiGenerator {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiGenerator {
    /// Creates a provider from application configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.generation_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.clone(),
            model: config.openai_model.clone(),
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "OpenAI API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await?;

        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(AppError::Generation(
                "OpenAI API returned an empty completion".to_string(),
            ));
        }

        tracing::debug!(
            model = %self.model,
            chars = content.len(),
            "Completion received"
        );

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            openai_api_key: "test_key".to_string(),
            openai_api_url: "http://test.local/v1".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            reviews_path: "./data.csv".to_string(),
            generation_timeout_secs: 5,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn test_new_copies_config() {
        let generator = OpenAiGenerator::new(&test_config()).unwrap();
        assert_eq!(generator.api_key, "test_key");
        assert_eq!(generator.api_url, "http://test.local/v1");
        assert_eq!(generator.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "Avoid the watery drinks by improving preparation."
                    }
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Avoid the watery drinks by improving preparation.")
        );
    }

    #[test]
    fn test_chat_response_missing_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "prompt body",
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "prompt body");
        assert_eq!(json["max_tokens"], 300);
    }
}
