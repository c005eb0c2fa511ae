use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::Domain;
use crate::error::ClientError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest<'a> {
    pub user_input: &'a str,
    pub domain: Domain,
}

#[derive(Deserialize)]
struct RecommendationResponse {
    recommendations: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Anything that can turn user input into recommendation text.
///
/// The controllers hold an `Arc<dyn Recommender>` and call it from spawned tasks.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn send(&self, user_input: &str, domain: Domain) -> Result<String, ClientError>;

    async fn send_general(&self, user_input: &str) -> Result<String, ClientError> {
        self.send(user_input, Domain::General).await
    }
}

/// HTTP client for the recommendation backend.
#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn recommend(&self, user_input: &str, domain: Domain) -> Result<String, ClientError> {
        let url = format!("{}/recommendations", self.base_url);
        let request = RecommendationRequest { user_input, domain };

        debug!(%domain, chars = user_input.chars().count(), "sending recommendation request");

        let result = self.post_recommendation(&url, &request).await;
        if let Err(err) = &result {
            warn!(%domain, kind = err.kind(), error = %err, "recommendation request failed");
        }
        result
    }

    async fn post_recommendation(
        &self,
        url: &str,
        request: &RecommendationRequest<'_>,
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            // The status alone classifies the failure; a broken body only loses the detail.
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &body));
        }

        let body = response.text().await.map_err(ClientError::from_transport)?;

        let parsed: RecommendationResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::Unknown(format!("invalid response body: {e}")))?;

        parsed
            .recommendations
            .ok_or_else(|| ClientError::Unknown("response is missing `recommendations`".to_string()))
    }

    /// Probe the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            // The status alone classifies the failure; a broken body only loses the detail.
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &body));
        }

        let body = response.text().await.map_err(ClientError::from_transport)?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::Unknown(format!("invalid health body: {e}")))
    }
}

#[async_trait]
impl Recommender for RecommendationClient {
    async fn send(&self, user_input: &str, domain: Domain) -> Result<String, ClientError> {
        self.recommend(user_input, domain).await
    }
}
