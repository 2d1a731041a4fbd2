// src/api.rs
use crate::error::ApiError;
use crate::models::{Advice, AnalyzeRequest};
use log::debug;
use reqwest::Client;

pub const ANALYZE_PATH: &str = "/api/analyze_portfolio";

/// HTTP client for the external analysis service.
pub struct AdviceClient {
    client: Client,
    base_url: String,
}

impl AdviceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST the raw portfolio text and decode the advice.
    ///
    /// Any transport error, non-2xx status, or undecodable body comes back
    /// as an `ApiError`; the caller decides what the user sees.
    pub async fn analyze(&self, portfolio_str: &str) -> Result<Advice, ApiError> {
        let url = format!("{}{}", self.base_url, ANALYZE_PATH);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { portfolio_str })
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        response.json::<Advice>().await.map_err(ApiError::Malformed)
    }
}
