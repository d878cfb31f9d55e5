//! Gemini content oracle
//!
//! Calls the `generateContent` endpoint in JSON response mode and parses the
//! returned text into a [`ContentTree`].

use std::time::Duration;

use makalah_ast::{ContentTree, PaperMetadata};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::OracleConfig;
use crate::error::{OracleError, Result};
use crate::prompt::build_request;
use crate::ContentOracle;

/// Client for the Gemini generative language API
#[derive(Debug, Clone)]
pub struct GeminiOracle {
    config: OracleConfig,
    api_key: String,
    client: Client,
}

impl GeminiOracle {
    /// Create a client, resolving the API key up front
    pub fn new(config: OracleConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        Self::with_api_key(config, api_key)
    }

    /// Create a client with an explicit key
    pub fn with_api_key(config: OracleConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config,
            api_key: api_key.into(),
            client,
        })
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }
}

impl ContentOracle for GeminiOracle {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn generate(&self, metadata: &PaperMetadata) -> Result<ContentTree> {
        let url = self.config.endpoint();
        let body = build_request(metadata, &self.config);
        log::info!(
            "requesting content for '{}' from {} ({} mode)",
            metadata.title,
            self.config.model,
            if metadata.mode.is_deep() { "deep" } else { "quick" }
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            let message = error_message(&text);
            log::warn!("content request failed with {}: {}", status, message);
            return Err(OracleError::from_status(status.as_u16(), message));
        }

        let reply = extract_text(&text)?;
        log::debug!("received {} bytes of content", reply.len());
        parse_content(&reply)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    /// Thought summaries are not part of the answer
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Human-readable message from an API error body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Concatenate the answer text of the first candidate
pub fn extract_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| OracleError::MalformedResponse(format!("response envelope: {}", e)))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(OracleError::EmptyResponse);
    };
    if let Some(reason) = candidate.finish_reason.as_deref() {
        if reason != "STOP" {
            log::warn!("generation finished with reason {}", reason);
        }
    }

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.thought)
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    Ok(text)
}

/// Remove a surrounding Markdown code fence, if any
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string ("json") on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parse answer text into a content tree
pub fn parse_content(text: &str) -> Result<ContentTree> {
    let json = strip_code_fence(text);
    if json.is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    serde_json::from_str(json)
        .map_err(|e| OracleError::MalformedResponse(format!("content tree: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(parts: &str) -> String {
        format!(
            r#"{{"candidates":[{{"content":{{"role":"model","parts":{}}},"finishReason":"STOP"}}]}}"#,
            parts
        )
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let body = envelope(r#"[{"text":"{\"preface\":"},{"text":"\"Halo.\"}"}]"#);
        assert_eq!(extract_text(&body).unwrap(), r#"{"preface":"Halo."}"#);
    }

    #[test]
    fn test_extract_text_skips_thoughts() {
        let body = envelope(r#"[{"text":"thinking...","thought":true},{"text":"{}"}]"#);
        assert_eq!(extract_text(&body).unwrap(), "{}");
    }

    #[test]
    fn test_extract_text_empty() {
        assert!(matches!(
            extract_text(r#"{"candidates":[]}"#),
            Err(OracleError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(r#"{}"#),
            Err(OracleError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(&envelope(r#"[{"text":"  "}]"#)),
            Err(OracleError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_text_malformed() {
        assert!(matches!(
            extract_text("<html>"),
            Err(OracleError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fence("  {}  "), "{}");
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
    }

    #[test]
    fn test_parse_content() {
        let content = parse_content(
            "```json\n{\"introduction\":{\"background\":\"Latar.\"},\"chapters\":[{\"title\":\"Pembahasan\",\"subChapters\":[]}]}\n```",
        )
        .unwrap();
        assert_eq!(content.introduction.background, "Latar.");
        assert_eq!(content.chapters[0].title, "Pembahasan");
    }

    #[test]
    fn test_parse_content_rejects_non_object() {
        assert!(matches!(
            parse_content("Maaf, saya tidak bisa."),
            Err(OracleError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_content("```json\n```"),
            Err(OracleError::EmptyResponse)
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error":{"code":429,"message":"Resource exhausted","status":"RESOURCE_EXHAUSTED"}}"#),
            "Resource exhausted"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "Unknown error");
    }
}
