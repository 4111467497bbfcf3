use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::models::passport::PassportRanking;
use crate::models::visa::VisaInfo;

const DIRECT_BASE_URL: &str = "https://api.travel-buddy.ai/v2";
const RAPID_API_HOST: &str = "visa-requirement.p.rapidapi.com";
const PLACEHOLDER_KEY: &str = "your_travel_buddy_key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How the configured key authenticates: TravelBuddy's own header, or a
/// RapidAPI marketplace subscription. RapidAPI keys are recognized by
/// their shape ("ca" prefix or an "msh" fragment), picked once at
/// startup so every request uses the same scheme.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderAuth {
    Direct { key: String },
    RapidApi { key: String },
}

impl ProviderAuth {
    pub fn from_key(key: &str) -> Self {
        if key.starts_with("ca") || key.contains("msh") {
            ProviderAuth::RapidApi {
                key: key.to_string(),
            }
        } else {
            ProviderAuth::Direct {
                key: key.to_string(),
            }
        }
    }
}

#[derive(Debug)]
pub enum ProviderError {
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ProviderError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::HttpError(err)
    }
}

#[derive(Debug, Deserialize)]
struct RankResponse {
    data: Vec<RankItem>,
}

#[derive(Debug, Deserialize)]
struct RankItem {
    rank: i32,
    score: f64,
    passport: RankPassport,
}

#[derive(Debug, Deserialize)]
struct RankPassport {
    code: String,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VisaCheckResponse {
    data: Option<ProviderVisa>,
}

#[derive(Debug, Deserialize)]
struct ProviderVisa {
    #[serde(rename = "type")]
    visa_type: Option<String>,
    duration: Option<i32>,
    notes: Option<String>,
}

/// Client for the TravelBuddy visa data API.
#[derive(Clone)]
pub struct TravelBuddyProvider {
    client: Client,
    auth: ProviderAuth,
    base_url: String,
}

impl TravelBuddyProvider {
    /// Returns `None` when the key is absent or still the placeholder
    /// from the sample environment file.
    pub fn from_env() -> Option<Self> {
        let key = env::var("TRAVEL_BUDDY_API_KEY").ok()?;
        if key.is_empty() || key == PLACEHOLDER_KEY {
            return None;
        }
        Some(Self::new(&key))
    }

    pub fn new(key: &str) -> Self {
        let auth = ProviderAuth::from_key(key);
        let base_url = match auth {
            ProviderAuth::RapidApi { .. } => format!("https://{}", RAPID_API_HOST),
            ProviderAuth::Direct { .. } => DIRECT_BASE_URL.to_string(),
        };

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client for TravelBuddy");

        Self {
            client,
            auth,
            base_url,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            ProviderAuth::Direct { key } => request.header("X-API-Key", key),
            ProviderAuth::RapidApi { key } => request
                .header("X-RapidAPI-Key", key)
                .header("X-RapidAPI-Host", RAPID_API_HOST),
        }
    }

    /// Custom-weighted passport ranking. Full credit for visa-free and
    /// freedom-of-movement access, partial credit for on-arrival and
    /// electronic visas, nothing for the rest.
    pub async fn rank_passports(&self) -> Result<Vec<PassportRanking>, ProviderError> {
        let url = format!("{}/v2/passport/rank/custom", self.base_url);
        let body = json!({
            "weights": {
                "Visa-free": 1,
                "Visa on arrival": 0.7,
                "Visa required": 0,
                "eVisa": 0.5,
                "eTA": 0.5,
                "Tourist card": 0,
                "Freedom of movement": 1,
                "Not admitted": 0
            }
        });

        let response = self
            .authorized(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ResponseError(format!(
                "Ranking request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: RankResponse = response.json().await.map_err(|e| {
            ProviderError::ResponseError(format!("Failed to parse ranking response: {}", e))
        })?;

        Ok(body
            .data
            .into_iter()
            .map(|item| PassportRanking {
                country_code: item.passport.code,
                rank: item.rank,
                mobility_score: item.score.round() as i32,
                country_name: item.passport.name,
            })
            .collect())
    }

    /// Live visa check for a passport/destination pair. `Ok(None)` means
    /// the provider answered but has no data for the pair.
    pub async fn check_visa(
        &self,
        passport_code: &str,
        destination_code: &str,
    ) -> Result<Option<VisaInfo>, ProviderError> {
        let url = format!("{}/v2/visa/check", self.base_url);
        let body = json!({
            "passport": passport_code,
            "destination": destination_code,
        });

        let response = self
            .authorized(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ResponseError(format!(
                "Visa check failed with status {}: {}",
                status, error_text
            )));
        }

        let body: VisaCheckResponse = response.json().await.map_err(|e| {
            ProviderError::ResponseError(format!("Failed to parse visa check response: {}", e))
        })?;

        Ok(body.data.map(|data| VisaInfo {
            visa_type: data.visa_type.unwrap_or_else(|| "unknown".to_string()),
            duration: data.duration,
            notes: data.notes,
        }))
    }
}
