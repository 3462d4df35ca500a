//! Claude-backed summarizer
//!
//! Calls the Anthropic Messages API and extracts the tagged summary section
//! from the model response.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::Summarizer;
use crate::error::{Result, ServiceError};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 8192;
const TEMPERATURE: f64 = 0.3;

const SUMMARY_PROMPT: &str = "<content>{content}</content>\n\n\
Transform this content into an in-depth technical narrative for a \
knowledgeable audience. Combine thorough technical explanation with the \
speaker's own perspective on why the choices matter: cover the novel \
approaches, the reasoning behind them, concrete implementation details, and \
real-world implications, preserving interesting quotes and the original \
voice. Use clear Markdown with a flowing narrative and minimal bullet \
points, at most half an hour of reading time.\n\n\
Wrap the final summary in tags like this:\n<summary>\n[summary]\n</summary>";

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

// == Claude Summarizer ==
/// Summarizer backed by the Anthropic Messages API.
pub struct ClaudeSummarizer {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeSummarizer {
    /// Builds a client with a total request timeout; summarization of long
    /// content is slow, so the timeout is generous and configurable.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ServiceError::Summarizer(format!("build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl Summarizer for ClaudeSummarizer {
    async fn summarize(&self, content: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "messages": [{
                "role": "user",
                "content": SUMMARY_PROMPT.replace("{content}", content),
            }],
        });

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Summarizer(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ServiceError::Summarizer(format!(
                "upstream returned {status}: {detail}"
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Summarizer(format!("malformed response: {e}")))?;

        let text = parsed
            .content
            .first()
            .map(|block| block.text.as_str())
            .ok_or_else(|| ServiceError::Summarizer("empty response content".to_string()))?;

        info!("Summarization produced {} characters", text.len());
        Ok(extract_summary(text))
    }
}

/// Pulls the tagged summary section out of the model response, falling back
/// to the raw text with a marker when the tags are missing.
fn extract_summary(response: &str) -> String {
    let tags = Regex::new(r"(?s)<summary>(.*?)</summary>").expect("summary tag pattern");
    match tags.captures(response).and_then(|c| c.get(1)) {
        Some(matched) => matched.as_str().trim().to_string(),
        None => {
            warn!("Summary tags missing from model response");
            format!("[Failed to extract summary tags]\n\n{response}")
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_summary_from_tags() {
        let response = "thinking...\n<summary>\n# The Summary\n\nBody.\n</summary>\ntrailing";
        assert_eq!(extract_summary(response), "# The Summary\n\nBody.");
    }

    #[test]
    fn test_extract_summary_takes_first_match() {
        let response = "<summary>one</summary><summary>two</summary>";
        assert_eq!(extract_summary(response), "one");
    }

    #[test]
    fn test_extract_summary_fallback_keeps_text() {
        let response = "no tags here";
        let extracted = extract_summary(response);
        assert!(extracted.starts_with("[Failed to extract summary tags]"));
        assert!(extracted.contains("no tags here"));
    }

    #[test]
    fn test_messages_response_parses_api_shape() {
        let json = r#"{"id":"msg_1","content":[{"type":"text","text":"hello"}],"model":"m"}"#;
        let parsed: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.content[0].text, "hello");
    }
}
