use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

#[derive(Debug)]
pub enum GeminiError {
    HttpError(reqwest::Error),
    ResponseError(String),
    EmptyResponse,
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeminiError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GeminiError::EmptyResponse => write!(f, "Model returned no candidates"),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::HttpError(err)
    }
}

/// Thin client for the Gemini generateContent REST endpoint. Holds its
/// own reqwest client so a hung model call cannot outlive the timeout.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Returns `None` when no key is configured; callers treat that as
    /// "run in mock mode" rather than an error.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty())?;
        Some(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client for Gemini");

        Self {
            client,
            api_key,
            model: GEMINI_MODEL.to_string(),
        }
    }

    /// Generation with the response constrained to a JSON mime type.
    pub async fn generate_json(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate_content(
            prompt,
            Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        )
        .await
    }

    /// Plain text generation, no output constraint.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate_content(prompt, None).await
    }

    async fn generate_content(
        &self,
        prompt: &str,
        generation_config: Option<GenerationConfig>,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::ResponseError(format!(
                "Generation request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseError(format!("Failed to parse response: {}", e)))?;

        body.candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.unwrap_or_default().into_iter().next())
            .map(|part| part.text)
            .ok_or(GeminiError::EmptyResponse)
    }
}

/// Strips markdown code fences and any prose around the outermost JSON
/// object. Models occasionally wrap their output even when told not to.
pub fn extract_json_object(text: &str) -> String {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(first), Some(last)) if first < last => cleaned[first..=last].to_string(),
        _ => cleaned.to_string(),
    }
}

/// Removes trailing commas before closing braces and brackets so minor
/// model formatting drift still parses as JSON.
pub fn strip_trailing_commas(json: &str) -> String {
    let re = Regex::new(r",\s*([}\]])");
    re.unwrap().replace_all(json, "$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object_strips_fences() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_object(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_object_strips_surrounding_prose() {
        let raw = "Here is your itinerary:\n{\"a\": 1, \"b\": {\"c\": 2}} hope it helps!";
        assert_eq!(extract_json_object(raw), "{\"a\": 1, \"b\": {\"c\": 2}}");
    }

    #[test]
    fn test_extract_json_object_without_braces_is_unchanged() {
        assert_eq!(extract_json_object("no json here"), "no json here");
    }

    #[test]
    fn test_strip_trailing_commas() {
        let raw = "{\"a\": [1, 2,], \"b\": {\"c\": 3,},}";
        assert_eq!(strip_trailing_commas(raw), "{\"a\": [1, 2], \"b\": {\"c\": 3}}");
    }

    #[test]
    fn test_strip_trailing_commas_leaves_valid_json_alone() {
        let raw = "{\"a\": [1, 2], \"b\": \"x, y\"}";
        assert_eq!(strip_trailing_commas(raw), raw);
    }
}
