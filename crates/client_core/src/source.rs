use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::error::FetchError;

/// Base URL of the public dog breed API.
pub const DEFAULT_API_URL: &str = "https://api.thedogapi.com/v1";

/// External collaborator that produces the breed catalog payload. Returns the
/// raw JSON value so the controller can tell a shape-invalid success apart
/// from a transport failure.
#[async_trait]
pub trait BreedSource: Send + Sync {
    async fn fetch_breeds(&self) -> Result<Value, FetchError>;
}

/// reqwest-backed source for the breed API. The api key is optional; the
/// public endpoint answers without one, rate-limited.
pub struct HttpBreedSource {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpBreedSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for HttpBreedSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl BreedSource for HttpBreedSource {
    async fn fetch_breeds(&self) -> Result<Value, FetchError> {
        let url = format!("{}/breeds", self.base_url);
        info!(%url, "fetching breed catalog");

        let mut request = self.http.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }

        let response = request.send().await?.error_for_status()?;
        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
