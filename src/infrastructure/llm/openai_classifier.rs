use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassifierError, ClassifierOutput, ComplaintClassifier};
use crate::domain::ComplaintCategory;
use crate::presentation::config::ClassifierSettings;

const SYSTEM_PROMPT_TEMPLATE: &str = r#"Analyze the following railway passenger complaint and return ONLY valid JSON:

{
  "category": "one of [{categories}]",
  "priority": 1-5,
  "reason": "short explanation"
}

Priority 5 is critical (danger to life or safety), 1 is general feedback."#;

/// Classifies complaints through an OpenAI-compatible chat completions endpoint.
pub struct OpenAiComplaintClassifier {
    client: Client,
    provider: String,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub fn build_system_prompt(categories: &[ComplaintCategory]) -> String {
    let options = categories
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    SYSTEM_PROMPT_TEMPLATE.replace("{categories}", &options)
}

/// Extracts the verdict object from message content, tolerating markdown code fences.
pub fn parse_classifier_content(content: &str) -> Result<Option<ClassifierOutput>, ClassifierError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str::<ClassifierOutput>(json)
        .map(Some)
        .map_err(|e| ClassifierError::InvalidResponse(format!("verdict json: {}", e)))
}

impl OpenAiComplaintClassifier {
    fn build_messages(&self, description: &str, categories: &[ComplaintCategory]) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: Some(build_system_prompt(categories)),
            },
            ChatMessage {
                role: "user".to_string(),
                content: Some(format!("Complaint:\n{}", description)),
            },
        ]
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.provider == "azure" {
            request.header("api-key", &self.api_key)
        } else {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        }
    }
}

#[async_trait]
impl ComplaintClassifier for OpenAiComplaintClassifier {
    async fn classify(
        &self,
        description: &str,
        categories: &[ComplaintCategory],
    ) -> Result<Option<ClassifierOutput>, ClassifierError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(description, categories),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(model = %self.model, provider = %self.provider, "Sending complaint to classifier");

        let request = self.client.post(&self.endpoint).json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| ClassifierError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ClassifierError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        match completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
        {
            Some(content) => parse_classifier_content(&content),
            None => Ok(None),
        }
    }
}

pub fn create_complaint_classifier(
    settings: &ClassifierSettings,
) -> Result<OpenAiComplaintClassifier, ClassifierError> {
    let endpoint = match settings.provider.as_str() {
        "openai" => "https://api.openai.com/v1/chat/completions".to_string(),
        "lmstudio" => {
            let base_url = settings.base_url.as_ref().ok_or_else(|| {
                ClassifierError::Unavailable("base_url required for lmstudio provider".to_string())
            })?;
            format!("{}/chat/completions", base_url.trim_end_matches('/'))
        }
        "azure" => {
            let endpoint = settings.azure_endpoint.as_ref().ok_or_else(|| {
                ClassifierError::Unavailable(
                    "azure_endpoint required for azure provider".to_string(),
                )
            })?;
            format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                settings.chat_model,
                settings.api_version
            )
        }
        _ => {
            return Err(ClassifierError::Unavailable(format!(
                "unknown provider: {}",
                settings.provider
            )));
        }
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .map_err(|e| ClassifierError::Unavailable(format!("http client: {}", e)))?;

    Ok(OpenAiComplaintClassifier {
        client,
        provider: settings.provider.clone(),
        endpoint,
        api_key: settings.api_key.clone(),
        model: settings.chat_model.clone(),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    })
}
