//! REST client for the portfolio API.
//!
//! Wraps every `/api` route using [`reqwest`]. Envelopes are decoded
//! whatever the status code, so server messages reach the caller intact.

use folio_core::contact::ContactInput;
use folio_core::project::{ProjectInput, ProjectStats};
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::models::{
    ContactPage, ContactReceipt, Envelope, HealthReport, PageQuery, Project, ProjectPage,
    ProjectQuery,
};

/// Default server origin, matching the API's default bind port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// HTTP client for one API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// * `base_url` - Server origin without the `/api` prefix, e.g.
    ///   `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- projects ----

    /// `GET /api/projects`
    pub async fn list_projects(&self, query: &ProjectQuery) -> ClientResult<ProjectPage> {
        let request = self.client.get(self.api_url("/projects")).query(query);
        self.fetch(request, "/projects").await
    }

    /// `GET /api/projects/{id}`
    pub async fn get_project(&self, id: DbId) -> ClientResult<Project> {
        let path = format!("/projects/{id}");
        self.fetch(self.client.get(self.api_url(&path)), &path).await
    }

    /// `POST /api/projects`
    pub async fn create_project(&self, input: &ProjectInput) -> ClientResult<Project> {
        self.send_json(reqwest::Method::POST, "/projects", input).await
    }

    /// `PUT /api/projects/{id}`, replacing the whole record.
    pub async fn update_project(&self, id: DbId, input: &ProjectInput) -> ClientResult<Project> {
        self.send_json(reqwest::Method::PUT, &format!("/projects/{id}"), input)
            .await
    }

    /// `DELETE /api/projects/{id}`. Returns the removed record.
    pub async fn delete_project(&self, id: DbId) -> ClientResult<Project> {
        let path = format!("/projects/{id}");
        self.fetch(self.client.delete(self.api_url(&path)), &path)
            .await
    }

    /// `GET /api/projects/stats`
    pub async fn project_stats(&self) -> ClientResult<ProjectStats> {
        let path = "/projects/stats";
        self.fetch(self.client.get(self.api_url(path)), path).await
    }

    // ---- contact ----

    /// `POST /api/contact`
    pub async fn submit_contact(&self, input: &ContactInput) -> ClientResult<ContactReceipt> {
        self.send_json(reqwest::Method::POST, "/contact", input).await
    }

    /// `GET /api/contact`
    pub async fn list_contacts(&self, query: PageQuery) -> ClientResult<ContactPage> {
        let request = self.client.get(self.api_url("/contact")).query(&query);
        self.fetch(request, "/contact").await
    }

    // ---- health ----

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<HealthReport> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: format!("HTTP {status}"),
                errors: Vec::new(),
            });
        }
        Ok(response.json().await?)
    }

    // ---- private helpers ----

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn send_json<B, T>(&self, method: reqwest::Method, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.request(method, self.api_url(path)).json(body);
        self.fetch(request, path).await
    }

    /// Send a request and unwrap its envelope.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: Envelope<T> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(path, status = status.as_u16(), error = %e, "Undecodable API response");
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message: format!("HTTP {status}"),
                    errors: Vec::new(),
                });
            }
        };

        if !envelope.success {
            if let Some(detail) = &envelope.error {
                tracing::debug!(path, detail = %detail, "Server reported diagnostic detail");
            }
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "An unexpected error occurred".to_string()),
                errors: envelope.errors,
            });
        }

        envelope
            .data
            .ok_or_else(|| ClientError::MissingData(path.to_string()))
    }
}
