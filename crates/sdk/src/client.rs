// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! REST client for the benchmarks API.

use async_trait::async_trait;
use benchbook_core::wire::parse_id;
use benchbook_core::{BenchmarkFields, BenchmarkPayload, BenchmarkResult, Error, Result, StoredRow};
use benchbook_storage::RecordStore;
use reqwest::{Method, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

const COLLECTION_PATH: &str = "/api/benchmarks";

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// [`RecordStore`] backed by a remote benchmarks API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Client for the API served at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("benchbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(base_url, http_client))
    }

    /// Reuse an existing `reqwest` client.
    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, COLLECTION_PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, COLLECTION_PATH, id)
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&BenchmarkPayload>,
        id: Option<&str>,
    ) -> Result<Response> {
        let mut request = self.http_client.request(method.clone(), url);
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::network(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        if status.is_success() {
            debug!(%method, url, %status, "API request succeeded");
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };
        warn!(%method, url, %status, message = %message, "API request failed");

        Err(match status {
            StatusCode::NOT_FOUND => Error::not_found(id.unwrap_or(url)),
            StatusCode::BAD_REQUEST => Error::validation(message),
            _ => Error::network(format!("{} {} returned {}: {}", method, url, status, message)),
        })
    }

    async fn read_row(response: Response) -> Result<BenchmarkResult> {
        let row: StoredRow = response
            .json()
            .await
            .map_err(|e| Error::network(format!("Failed to parse response: {}", e)))?;
        row.into_record()
    }
}

#[async_trait]
impl RecordStore for ApiClient {
    async fn list(&self) -> Result<Vec<BenchmarkResult>> {
        let url = self.collection_url();
        let response = self.execute(Method::GET, &url, None, None).await?;
        let rows: Vec<StoredRow> = response
            .json()
            .await
            .map_err(|e| Error::network(format!("Failed to parse response: {}", e)))?;
        rows.into_iter().map(StoredRow::into_record).collect()
    }

    async fn create(&self, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        fields.validate()?;
        let url = self.collection_url();
        let payload = BenchmarkPayload::from(&fields);
        let response = self.execute(Method::POST, &url, Some(&payload), None).await?;
        Self::read_row(response).await
    }

    async fn update(&self, id: &str, fields: BenchmarkFields) -> Result<BenchmarkResult> {
        let url = self.item_url(parse_id(id)?);
        fields.validate()?;
        let payload = BenchmarkPayload::from(&fields);
        let response = self
            .execute(Method::PUT, &url, Some(&payload), Some(id))
            .await?;
        Self::read_row(response).await
    }

    async fn remove(&self, id: &str) -> Result<BenchmarkResult> {
        let url = self.item_url(parse_id(id)?);
        let response = self.execute(Method::DELETE, &url, None, Some(id)).await?;
        Self::read_row(response).await
    }

    fn backend(&self) -> &'static str {
        "api"
    }
}
