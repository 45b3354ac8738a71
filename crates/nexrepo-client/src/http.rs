//! HTTP transport to the Nexus REST API
//!
//! Every request carries basic auth and JSON content headers. Redirects are
//! not followed: Nexus answers the REST endpoints directly, and a redirect
//! usually means the base URL is missing its context path.

use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::config::Connection;
use crate::credentials::ResolvedCredentials;
use crate::error::{ClientError, Result};

/// Hosted and proxy repositories
pub const REPOSITORIES_PATH: &str = "/service/local/repositories";

/// Group repositories
pub const REPO_GROUPS_PATH: &str = "/service/local/repo_groups";

/// Status and body of a Nexus response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusResponse {
    pub status: u16,
    pub body: String,
}

impl NexusResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for one Nexus instance
pub struct NexusClient {
    base_url: String,
    client: reqwest::Client,
    credentials: ResolvedCredentials,
    timeout_secs: u64,
}

impl NexusClient {
    /// Create a client from validated connection settings
    pub fn new(connection: Connection) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(connection.timeout_secs))
            .build()
            .map_err(|e| ClientError::NetworkError {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: connection.base_url.trim_end_matches('/').to_string(),
            client,
            credentials: connection.credentials,
            timeout_secs: connection.timeout_secs,
        })
    }

    /// Absolute URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a single repository, with the id percent-encoded
    pub fn repository_url(&self, id: &str) -> Result<String> {
        let endpoint = self.endpoint(REPOSITORIES_PATH);
        let mut url = Url::parse(&endpoint).map_err(|e| ClientError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl {
                url: endpoint.clone(),
                reason: "URL cannot have path segments".to_string(),
            })?
            .push(id);
        Ok(url.to_string())
    }

    /// POST a JSON body to an API path
    ///
    /// The body is encoded before anything is sent, so an encoding failure
    /// never reaches the network. Non-success statuses are returned, not
    /// raised.
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<NexusResponse> {
        let payload = serde_json::to_string(body)?;
        let url = self.endpoint(path);

        tracing::debug!(method = "POST", %url, body = %payload, "Nexus request");

        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);

        self.send(request, &url).await
    }

    /// GET an absolute URL
    pub async fn get(&self, url: &str) -> Result<NexusResponse> {
        tracing::debug!(method = "GET", %url, "Nexus request");
        self.send(self.client.get(url), url).await
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<NexusResponse> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::AUTHORIZATION, self.credentials.auth_header())
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_secs))?;

        tracing::debug!(%url, status, body = %body, "Nexus response");

        Ok(NexusResponse { status, body })
    }
}
