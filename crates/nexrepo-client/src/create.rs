//! Repository creation
//!
//! Each operation validates and builds its body first, so a validation
//! failure never reaches the network. Group creation then checks each member
//! in turn before the single creation POST.

use nexrepo_core::{
    GroupParams, GroupRepository, HostedParams, HostedRepository, ProxyParams, ProxyRepository,
    RequestBody,
};

use crate::error::Result;
use crate::http::{NexusClient, NexusResponse, REPO_GROUPS_PATH, REPOSITORIES_PATH};
use crate::lookup::filter_existing;

/// Result of a creation request that reached Nexus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub id: String,
    pub repo_type: String,
    pub response: NexusResponse,
}

impl CreateOutcome {
    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }
}

impl NexusClient {
    /// Create a hosted repository
    pub async fn create_hosted(&self, params: &HostedParams) -> Result<CreateOutcome> {
        let body = RequestBody::new(HostedRepository::build(params)?);
        tracing::info!("Creating hosted repository {}", body.data.id);

        let response = self.post_json(REPOSITORIES_PATH, &body).await?;
        Ok(CreateOutcome {
            id: body.data.id,
            repo_type: params.repo_type().to_string(),
            response,
        })
    }

    /// Create a proxy repository
    pub async fn create_proxy(&self, params: &ProxyParams) -> Result<CreateOutcome> {
        let body = RequestBody::new(ProxyRepository::build(params)?);
        tracing::info!(
            "Creating proxy repository {} for {}",
            body.data.id,
            body.data.remote_storage.remote_storage_url
        );

        let response = self.post_json(REPOSITORIES_PATH, &body).await?;
        Ok(CreateOutcome {
            id: body.data.id,
            repo_type: params.repo_type().to_string(),
            response,
        })
    }

    /// Build a group body, keeping only members that exist in Nexus
    pub async fn resolve_group(&self, params: &GroupParams) -> Result<GroupRepository> {
        let requested = params.member_ids()?;
        let members = filter_existing(self, &requested).await?;

        if members.is_empty() {
            tracing::warn!(
                "None of the requested members of group {} exist; creating it without members",
                params.id.trim()
            );
        }

        Ok(GroupRepository::build(params, members)?)
    }

    /// Create a group repository
    pub async fn create_group(&self, params: &GroupParams) -> Result<CreateOutcome> {
        let body = RequestBody::new(self.resolve_group(params).await?);
        tracing::info!(
            "Creating group repository {} with members [{}]",
            body.data.id,
            body.data.member_ids().join(", ")
        );

        let response = self.post_json(REPO_GROUPS_PATH, &body).await?;
        Ok(CreateOutcome {
            id: body.data.id,
            repo_type: params.repo_type().to_string(),
            response,
        })
    }
}
