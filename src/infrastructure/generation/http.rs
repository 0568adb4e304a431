//! HTTP client for the external generation backend.
//!
//! Talks to a Gemini-style `generateContent` REST endpoint. One request per
//! invocation, no retry or backoff; the caller decides what a failure means
//! for the room.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::config::GenerationConfig;
use crate::domain::{GenerationError, GenerationService};

use super::prompt::SYSTEM_INSTRUCTION;

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Generation client backed by a Gemini-style REST API.
pub struct HttpGenerationClient {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl HttpGenerationClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl GenerationService for HttpGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!("Prompt sent to generation backend: {}", prompt);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Status(response.status().as_u16()));
        }

        let body: GenerateContentResponse = response.json().await?;

        let text: String = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        tracing::debug!("Response from generation backend: {}", text);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_and_key() {
        // テスト項目: エンドポイント URL に model と API key が含まれる
        // given (前提条件):
        let client = HttpGenerationClient::new(GenerationConfig {
            api_url: "https://example.com/v1beta".to_string(),
            api_key: "k".to_string(),
            model: "m".to_string(),
        });

        // when (操作):
        let endpoint = client.endpoint();

        // then (期待する結果):
        assert_eq!(
            endpoint,
            "https://example.com/v1beta/models/m:generateContent?key=k"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        // テスト項目: 候補の parts からテキストが連結して取り出せる
        // given (前提条件):
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"foo"},{"text":"bar"}]}}]}"#,
        )
        .unwrap();

        // when (操作):
        let text: String = body.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        // then (期待する結果):
        assert_eq!(text, "foobar");
    }
}
