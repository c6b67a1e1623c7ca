use crate::modules::trend::Snapshot;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const API_KEY_HEADER: &str = "x-nxopen-api-key";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status} {name}: {message}")]
    Service {
        status: u16,
        name: String,
        message: String,
    },

    #[error("Character not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Errors reported by the API itself, usually a bad character name.
    pub fn is_service_error(&self) -> bool {
        matches!(self, ApiError::Service { .. } | ApiError::NotFound(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait GameApi: Send + Sync {
    async fn lookup_character_id(&self, name: &str) -> ApiResult<String>;

    /// Latest state when `date` is `None`, otherwise the state recorded for that day.
    async fn get_snapshot(&self, character_id: &str, date: Option<NaiveDate>) -> ApiResult<Snapshot>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    name: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct IdResponse {
    ocid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BasicResponse {
    character_name: Option<String>,
    world_name: Option<String>,
    character_class: Option<String>,
    character_level: Option<u32>,
    character_exp_rate: Option<String>,
    character_guild_name: Option<String>,
}

impl BasicResponse {
    fn into_snapshot(self, character_id: &str) -> ApiResult<Snapshot> {
        let name = self
            .character_name
            .ok_or_else(|| ApiError::NotFound(character_id.to_string()))?;
        let level = self
            .character_level
            .ok_or_else(|| ApiError::InvalidResponse(format!("missing level for {}", name)))?;
        let raw_rate = self.character_exp_rate.unwrap_or_else(|| "0".to_string());
        let exp_rate = raw_rate
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::InvalidResponse(format!("bad exp rate '{}'", raw_rate)))?;

        Ok(Snapshot::new(name, level, exp_rate)
            .with_class(self.character_class.unwrap_or_default())
            .with_world(self.world_name.unwrap_or_default())
            .with_guild(self.character_guild_name))
    }
}

/// Nexon Open API client for the TMS region.
pub struct NexonClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NexonClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, self.api_key.as_str())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(%status, body = %body, "Game API returned an error");
        Err(service_error(status, &body))
    }
}

fn service_error(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Service {
            status: status.as_u16(),
            name: parsed.error.name,
            message: parsed.error.message,
        },
        Err(_) => ApiError::InvalidResponse(format!("HTTP {}: {}", status, body)),
    }
}

#[async_trait]
impl GameApi for NexonClient {
    async fn lookup_character_id(&self, name: &str) -> ApiResult<String> {
        let request = self.get("/v1/id").query(&[("character_name", name)]);
        let response: IdResponse = self.send(request).await?;

        response
            .ocid
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    async fn get_snapshot(&self, character_id: &str, date: Option<NaiveDate>) -> ApiResult<Snapshot> {
        let mut request = self
            .get("/v1/character/basic")
            .query(&[("ocid", character_id)]);
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }

        let response: BasicResponse = self.send(request).await?;
        response.into_snapshot(character_id)
    }
}
