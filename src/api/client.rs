//! reqwest-backed registration client

use super::{ApiError, RegistrationApi};
use crate::config::OnboardConfig;
use crate::state::{SubmittedUser, UserPayload};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;

/// Header carrying the optional API key
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the registration endpoint
pub struct ApiClient {
    http: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &OnboardConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ApiError::Config(format!("api key is not a valid header: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn create_user(&self, payload: &UserPayload) -> Result<SubmittedUser, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, role = %payload.role, "posting registration");

        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let user = response.json::<SubmittedUser>().await?;
        tracing::info!(status = %status, "registration accepted");
        Ok(user)
    }
}
