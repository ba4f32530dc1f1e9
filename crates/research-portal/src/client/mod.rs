//! Research portal API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff for transient failures
//!
//! Responses are never cached: treatment details and result pages are
//! fetched fresh for every view.

mod endpoints;

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

pub use endpoints::Endpoint;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    DataEnvelope, DistributionPoint, HealthStatus, Paper, TopTreatment, TreatmentDetail,
};
use crate::query::PaperQuery;

/// Research portal API client.
#[derive(Clone)]
pub struct PortalClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Portal origin.
    base_url: String,

    /// Request timeout, reported on timeouts.
    request_timeout: Duration,
}

impl PortalClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(250), Duration::from_secs(5))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            request_timeout: config.request_timeout,
        })
    }

    /// Portal origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Papers for a topic, treatment or "latest" query, newest first.
    pub async fn recent_topic_papers(&self, query: &PaperQuery) -> ClientResult<Vec<Paper>> {
        self.get_data(Endpoint::RecentTopicPapers, &query.result_params()).await
    }

    /// Free-text search results, with highlighted sample sentences.
    pub async fn search_papers(&self, query: &PaperQuery) -> ClientResult<Vec<Paper>> {
        self.get_data(Endpoint::PaperSearch, &query.result_params()).await
    }

    /// Weekly publication counts for a query.
    pub async fn paper_distribution(
        &self,
        query: &PaperQuery,
    ) -> ClientResult<Vec<DistributionPoint>> {
        self.get_data(Endpoint::PaperDistribution, &query.distribution_params()).await
    }

    /// Most-mentioned treatments.
    pub async fn top_treatments(&self, size: u32) -> ClientResult<Vec<TopTreatment>> {
        let params = vec![("size".to_string(), size.to_string())];
        self.get_data(Endpoint::TopTreatments, &params).await
    }

    /// Detail record for a treatment. Unknown names yield an empty record.
    pub async fn treatment_detail(&self, name: &str) -> ClientResult<TreatmentDetail> {
        let params = vec![("name".to_string(), name.to_string())];
        self.get_data(Endpoint::TreatmentData, &params).await
    }

    /// Backend health check.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.get(Endpoint::Healthcheck, &[]).await
    }

    /// GET an endpoint and unwrap its `{"data": ...}` envelope.
    async fn get_data<T>(&self, endpoint: Endpoint, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let envelope: DataEnvelope<T> = self.get(endpoint, params).await?;
        Ok(envelope.data)
    }

    /// Make a GET request.
    async fn get<T>(&self, endpoint: Endpoint, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());
        tracing::debug!(endpoint = endpoint.path(), ?params, "GET");

        let response = self.client.get(&url).query(params).send().await.map_err(|e| {
            if e.is_timeout() { ClientError::Timeout(self.request_timeout) } else { e.into() }
        })?;

        let response = self.handle_response(response).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            404 => Err(ClientError::not_found(text)),
            400 => Err(ClientError::bad_request(text)),
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            code => Err(ClientError::UnexpectedStatus { status: code, message: text }),
        }
    }
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient").field("base_url", &self.base_url).finish()
    }
}
