//! Repository existence checks

use async_trait::async_trait;

use crate::error::{ClientError, Result};
use crate::http::NexusClient;

/// Answers whether a repository id exists in Nexus
#[async_trait]
pub trait RepositoryLookup: Send + Sync {
    async fn exists(&self, id: &str) -> Result<bool>;
}

#[async_trait]
impl RepositoryLookup for NexusClient {
    /// `GET /service/local/repositories/{id}`: 200 means it exists, 404 that
    /// it does not. Auth failures and other statuses are errors.
    async fn exists(&self, id: &str) -> Result<bool> {
        let url = self.repository_url(id)?;
        let response = self.get(&url).await?;

        match response.status {
            200 => Ok(true),
            404 => Ok(false),
            401 => Err(ClientError::AuthRequired { url }),
            403 => Err(ClientError::AuthFailed {
                message: format!("Access denied to {}", url),
            }),
            status => Err(ClientError::HttpError {
                status,
                message: format!("Unexpected response checking repository '{}'", id),
            }),
        }
    }
}

/// Keep the ids that exist, in the order given.
///
/// Checks run one at a time. A missing id (404) is logged and skipped. Any
/// lookup error, including an auth failure or an unexpected status such as
/// a 500, stops the filter and is returned, so no group is created from a
/// partial answer.
pub async fn filter_existing(lookup: &dyn RepositoryLookup, ids: &[String]) -> Result<Vec<String>> {
    let mut existing = Vec::with_capacity(ids.len());

    for id in ids {
        if lookup.exists(id).await? {
            existing.push(id.clone());
        } else {
            tracing::warn!(
                "Repository with ID={} does not exist in Nexus, hence not adding it to the group repository",
                id
            );
        }
    }

    Ok(existing)
}
