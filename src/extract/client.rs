//! Gemini REST client
//!
//! Posts one synchronous `generateContent` request per extraction: a single
//! attempt with no retry or timeout policy beyond reqwest's defaults. The API
//! key is read from the environment and sent as a request header, never
//! logged or persisted.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerativeModel, RequestPart};
use crate::config::Settings;
use crate::error::{SpeseError, SpeseResult};

/// Default Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from settings, reading the API key from the environment
    pub fn from_settings(settings: &Settings) -> SpeseResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SpeseError::Config(format!(
                    "Gemini API key not found. Set the {} environment variable \
                     (a .env file works too).",
                    API_KEY_ENV
                ))
            })?;

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            model: settings.model.clone(),
            base_url: settings
                .api_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Create a client with explicit parameters (useful for testing)
    pub fn with_api_key(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// The model this client talks to
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

// Manual impl: the API key must never appear in debug output
impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

// Request wire types

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
struct WirePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

impl WirePart {
    fn from_request_part(part: &RequestPart) -> Self {
        match part {
            RequestPart::Text(text) => Self {
                text: Some(text.clone()),
                inline_data: None,
            },
            RequestPart::Blob { mime_type, data } => Self {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: mime_type.clone(),
                    data: STANDARD.encode(data),
                }),
            },
        }
    }
}

// Response wire types

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, parts: &[RequestPart]) -> SpeseResult<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: parts.iter().map(WirePart::from_request_part).collect(),
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!(model = %self.model, parts = parts.len(), "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SpeseError::Extraction(format!(
                "Gemini API error ({}): {}",
                status,
                snippet(&body)
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| SpeseError::Extraction(format!("Malformed API response: {}", e)))?;

        let text: String = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(SpeseError::Extraction(
                "Empty response from the model".into(),
            ));
        }

        debug!(chars = text.len(), "received model response");
        Ok(text)
    }
}

/// First part of a (possibly long) error body, for error messages
fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}
