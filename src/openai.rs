//! Chat-completions HTTP client for the remote planner.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default chat-completions endpoint.
pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed model identifier; small and cheap.
pub const MODEL: &str = "gpt-4o-mini";

/// Fixed low temperature for reduced variance in structured output.
const TEMPERATURE: f64 = 0.4;

/// Bound on the single outbound attempt. There is no cancellation path once
/// the call is issued; this timeout is the only bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

/// Thin client over the chat-completions endpoint.
///
/// Requests JSON-object output at a fixed low temperature. One bounded
/// attempt per call; retry and degradation policy live in
/// [`GeneratorPolicy`](crate::generator::GeneratorPolicy).
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
}

impl OpenAiClient {
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_url(OPENAI_URL)
    }

    /// Point the client at a different endpoint (test servers, proxies).
    pub fn with_url(url: impl Into<String>) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Execute one chat-completions call and return the message content,
    /// which the endpoint promises to be a JSON object string.
    pub async fn chat_json(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::MalformedResponse("no choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_format() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "build a plan",
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: TEMPERATURE,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "build a plan");
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["temperature"], 0.4);
    }

    #[test]
    fn response_shape_extracts_first_choice() {
        let raw = r#"{"choices":[{"message":{"content":"{\"notes\":\"n\"}"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, r#"{"notes":"n"}"#);
    }
}
