//! Repository creation request bodies
//!
//! Each body is built from the caller's parameters in one step that
//! validates the required fields for the (kind, format) combination and
//! derives everything else. Bodies are wrapped in [`RequestBody`] so they
//! serialize as `{"data": {...}}`.

use serde::{Deserialize, Serialize};

use crate::error::{RequestError, Result};
use crate::provider::{PROVIDER_ROLE, provider_for, proxy_policy};
use crate::types::{ChecksumPolicy, Format, RepoPolicy, RepositoryKind, WritePolicy};

/// Minutes Nexus caches a "not found" answer
pub const NOT_FOUND_CACHE_TTL: i32 = 1440;

/// Minutes before proxied items and metadata are re-checked upstream
pub const ITEM_MAX_AGE: i32 = 1440;
pub const METADATA_MAX_AGE: i32 = 1440;

/// Proxied artifacts never expire
pub const ARTIFACT_MAX_AGE_NEVER: i32 = -1;

/// Top-level `data` envelope used by the Nexus REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody<T> {
    pub data: T,
}

impl<T: Serialize> RequestBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Compact JSON as sent on the wire
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============ Parameters ============

/// Caller input for a hosted repository
#[derive(Debug, Clone, PartialEq)]
pub struct HostedParams {
    pub id: String,
    /// Defaults to `hosted`
    pub repo_type: Option<String>,
    /// Required for maven2, ignored for npm and nuget
    pub policy: Option<String>,
    pub format: Format,
    pub exposed: bool,
}

impl HostedParams {
    pub fn repo_type(&self) -> &str {
        repo_type_or_kind(self.repo_type.as_deref(), RepositoryKind::Hosted)
    }
}

/// Caller input for a proxy repository
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyParams {
    pub id: String,
    /// Defaults to `proxy`
    pub repo_type: Option<String>,
    pub remote_storage_url: String,
    pub format: Format,
    pub exposed: bool,
}

impl ProxyParams {
    pub fn repo_type(&self) -> &str {
        repo_type_or_kind(self.repo_type.as_deref(), RepositoryKind::Proxy)
    }
}

/// Caller input for a group repository
#[derive(Debug, Clone, PartialEq)]
pub struct GroupParams {
    pub id: String,
    /// Defaults to `group`
    pub repo_type: Option<String>,
    /// Comma-separated member repository ids
    pub repositories: String,
    pub format: Format,
    pub exposed: bool,
}

impl GroupParams {
    pub fn repo_type(&self) -> &str {
        repo_type_or_kind(self.repo_type.as_deref(), RepositoryKind::Group)
    }

    /// Validate the parameters and return the requested member ids in the
    /// order given.
    ///
    /// Whitespace around ids is trimmed. Empty entries (`a,,b`) are skipped
    /// with a warning; a list with no ids at all is an error.
    pub fn member_ids(&self) -> Result<Vec<String>> {
        require_id(&self.id)?;

        if self.repositories.trim().is_empty() {
            return Err(RequestError::MissingRepositories);
        }

        let mut ids = Vec::new();
        for (position, entry) in self.repositories.split(',').enumerate() {
            let entry = entry.trim();
            if entry.is_empty() {
                tracing::warn!(
                    "Skipping empty repository id at position {} in '{}'",
                    position + 1,
                    self.repositories
                );
                continue;
            }
            ids.push(entry.to_string());
        }

        if ids.is_empty() {
            return Err(RequestError::MissingRepositories);
        }
        Ok(ids)
    }
}

fn repo_type_or_kind(repo_type: Option<&str>, kind: RepositoryKind) -> &str {
    match repo_type.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => kind.as_str(),
    }
}

fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RequestError::MissingId);
    }
    Ok(id)
}

// ============ Hosted ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedRepository {
    pub id: String,
    pub name: String,
    pub repo_type: String,
    pub repo_policy: RepoPolicy,
    pub provider: String,
    pub provider_role: String,
    pub browseable: bool,
    pub exposed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_policy: Option<WritePolicy>,
    pub checksum_policy: ChecksumPolicy,
    pub indexable: bool,
    #[serde(rename = "notFoundCacheTTL")]
    pub not_found_cache_ttl: i32,
}

impl HostedRepository {
    pub fn build(params: &HostedParams) -> Result<Self> {
        let id = require_id(&params.id)?;

        let policy = match params.format {
            Format::Maven2 => params
                .policy
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .ok_or(RequestError::MissingPolicy)?
                .parse::<RepoPolicy>()?,
            Format::Npm | Format::Nuget => {
                if let Some(policy) = params.policy.as_deref().filter(|p| !p.trim().is_empty()) {
                    tracing::warn!(
                        "Ignoring policy '{}': hosted {} repositories are always mixed",
                        policy,
                        params.format
                    );
                }
                RepoPolicy::Mixed
            }
        };

        Ok(Self {
            id: id.to_string(),
            name: id.to_string(),
            repo_type: params.repo_type().to_string(),
            repo_policy: policy,
            provider: provider_for(RepositoryKind::Hosted, params.format).to_string(),
            provider_role: PROVIDER_ROLE.to_string(),
            browseable: true,
            exposed: params.exposed,
            write_policy: Some(policy.write_policy()),
            checksum_policy: ChecksumPolicy::Ignore,
            indexable: true,
            not_found_cache_ttl: NOT_FOUND_CACHE_TTL,
        })
    }
}

// ============ Proxy ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStorage {
    pub remote_storage_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRepository {
    pub id: String,
    pub name: String,
    pub repo_type: String,
    pub repo_policy: RepoPolicy,
    pub provider: String,
    pub provider_role: String,
    pub browseable: bool,
    pub exposed: bool,
    pub checksum_policy: ChecksumPolicy,
    pub indexable: bool,
    #[serde(rename = "notFoundCacheTTL")]
    pub not_found_cache_ttl: i32,
    pub download_remote_indexes: bool,
    pub artifact_max_age: i32,
    pub auto_block_active: bool,
    pub file_type_validation: bool,
    pub item_max_age: i32,
    pub metadata_max_age: i32,
    pub remote_storage: RemoteStorage,
}

impl ProxyRepository {
    pub fn build(params: &ProxyParams) -> Result<Self> {
        let id = require_id(&params.id)?;

        let remote_url = params.remote_storage_url.trim();
        if remote_url.is_empty() {
            return Err(RequestError::MissingRemoteStorageUrl);
        }

        Ok(Self {
            id: id.to_string(),
            name: id.to_string(),
            repo_type: params.repo_type().to_string(),
            repo_policy: proxy_policy(params.format),
            provider: provider_for(RepositoryKind::Proxy, params.format).to_string(),
            provider_role: PROVIDER_ROLE.to_string(),
            browseable: true,
            exposed: params.exposed,
            checksum_policy: ChecksumPolicy::Warn,
            indexable: true,
            not_found_cache_ttl: NOT_FOUND_CACHE_TTL,
            download_remote_indexes: true,
            artifact_max_age: ARTIFACT_MAX_AGE_NEVER,
            auto_block_active: true,
            file_type_validation: true,
            item_max_age: ITEM_MAX_AGE,
            metadata_max_age: METADATA_MAX_AGE,
            remote_storage: RemoteStorage {
                remote_storage_url: remote_url.to_string(),
            },
        })
    }
}

// ============ Group ============

/// Member reference inside a group body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRepository {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub exposed: bool,
    pub repositories: Vec<GroupMember>,
}

impl GroupRepository {
    /// Build a group body from already-filtered member ids.
    ///
    /// An empty member list is accepted and submitted as `[]`.
    pub fn build(params: &GroupParams, members: Vec<String>) -> Result<Self> {
        let id = require_id(&params.id)?;

        Ok(Self {
            id: id.to_string(),
            name: id.to_string(),
            provider: provider_for(RepositoryKind::Group, params.format).to_string(),
            exposed: params.exposed,
            repositories: members.into_iter().map(|id| GroupMember { id }).collect(),
        })
    }

    pub fn member_ids(&self) -> Vec<&str> {
        self.repositories.iter().map(|m| m.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosted(format: Format, policy: Option<&str>) -> HostedParams {
        HostedParams {
            id: "releases".to_string(),
            repo_type: None,
            policy: policy.map(String::from),
            format,
            exposed: true,
        }
    }

    fn proxy(format: Format, url: &str) -> ProxyParams {
        ProxyParams {
            id: "central".to_string(),
            repo_type: None,
            remote_storage_url: url.to_string(),
            format,
            exposed: true,
        }
    }

    fn group(format: Format, repositories: &str) -> GroupParams {
        GroupParams {
            id: "public".to_string(),
            repo_type: None,
            repositories: repositories.to_string(),
            format,
            exposed: false,
        }
    }

    #[test]
    fn test_hosted_write_policy_follows_repo_policy() {
        let release = HostedRepository::build(&hosted(Format::Maven2, Some("release"))).unwrap();
        assert_eq!(release.write_policy, Some(WritePolicy::AllowWriteOnce));

        let mixed = HostedRepository::build(&hosted(Format::Maven2, Some("mixed"))).unwrap();
        assert_eq!(mixed.write_policy, Some(WritePolicy::AllowWriteOnce));

        let snapshot = HostedRepository::build(&hosted(Format::Maven2, Some("snapshot"))).unwrap();
        assert_eq!(snapshot.write_policy, Some(WritePolicy::AllowWrite));
        assert_eq!(snapshot.repo_policy, RepoPolicy::Snapshot);
    }

    #[test]
    fn test_hosted_maven_requires_policy() {
        assert_eq!(
            HostedRepository::build(&hosted(Format::Maven2, None)),
            Err(RequestError::MissingPolicy)
        );
        assert_eq!(
            HostedRepository::build(&hosted(Format::Maven2, Some("  "))),
            Err(RequestError::MissingPolicy)
        );
    }

    #[test]
    fn test_hosted_maven_rejects_unknown_policy() {
        let err = HostedRepository::build(&hosted(Format::Maven2, Some("nightly"))).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidPolicy {
                value: "nightly".to_string()
            }
        );
    }

    #[test]
    fn test_hosted_policy_case_insensitive() {
        let repo = HostedRepository::build(&hosted(Format::Maven2, Some("SnapShot"))).unwrap();
        assert_eq!(repo.repo_policy, RepoPolicy::Snapshot);
    }

    #[test]
    fn test_hosted_npm_and_nuget_forced_mixed() {
        let npm = HostedRepository::build(&hosted(Format::Npm, Some("snapshot"))).unwrap();
        assert_eq!(npm.repo_policy, RepoPolicy::Mixed);
        assert_eq!(npm.provider, "npm-hosted");
        assert_eq!(npm.write_policy, Some(WritePolicy::AllowWriteOnce));

        let nuget = HostedRepository::build(&hosted(Format::Nuget, None)).unwrap();
        assert_eq!(nuget.repo_policy, RepoPolicy::Mixed);
        assert_eq!(nuget.provider, "nuget-proxy");
    }

    #[test]
    fn test_hosted_fixed_fields() {
        let repo = HostedRepository::build(&hosted(Format::Maven2, Some("release"))).unwrap();
        assert_eq!(repo.id, repo.name);
        assert_eq!(repo.repo_type, "hosted");
        assert_eq!(repo.provider_role, PROVIDER_ROLE);
        assert!(repo.browseable);
        assert!(repo.indexable);
        assert_eq!(repo.checksum_policy, ChecksumPolicy::Ignore);
        assert_eq!(repo.not_found_cache_ttl, 1440);
    }

    #[test]
    fn test_hosted_json_body() {
        let body = RequestBody::new(
            HostedRepository::build(&hosted(Format::Maven2, Some("release"))).unwrap(),
        );
        insta::assert_snapshot!(body.to_json_pretty().unwrap(), @r#"
        {
          "data": {
            "id": "releases",
            "name": "releases",
            "repoType": "hosted",
            "repoPolicy": "RELEASE",
            "provider": "maven2",
            "providerRole": "org.sonatype.nexus.proxy.repository.Repository",
            "browseable": true,
            "exposed": true,
            "writePolicy": "ALLOW_WRITE_ONCE",
            "checksumPolicy": "IGNORE",
            "indexable": true,
            "notFoundCacheTTL": 1440
          }
        }
        "#);
    }

    #[test]
    fn test_write_policy_omitted_when_unset() {
        let mut repo = HostedRepository::build(&hosted(Format::Npm, None)).unwrap();
        repo.write_policy = None;
        let json = serde_json::to_value(&repo).unwrap();
        assert!(json.get("writePolicy").is_none());
    }

    #[test]
    fn test_custom_repo_type_is_kept() {
        let mut params = hosted(Format::Maven2, Some("release"));
        params.repo_type = Some("virtual".to_string());
        let repo = HostedRepository::build(&params).unwrap();
        assert_eq!(repo.repo_type, "virtual");
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut params = hosted(Format::Npm, None);
        params.id = " ".to_string();
        assert_eq!(HostedRepository::build(&params), Err(RequestError::MissingId));
    }

    #[test]
    fn test_proxy_requires_remote_url_for_every_format() {
        for format in Format::ALL {
            assert_eq!(
                ProxyRepository::build(&proxy(format, "")),
                Err(RequestError::MissingRemoteStorageUrl)
            );
        }
    }

    #[test]
    fn test_proxy_fields() {
        let repo = ProxyRepository::build(&proxy(
            Format::Npm,
            "https://registry.npmjs.org",
        ))
        .unwrap();

        assert_eq!(repo.provider, "npm-proxy");
        assert_eq!(repo.repo_policy, RepoPolicy::Mixed);
        assert_eq!(repo.repo_type, "proxy");
        assert_eq!(repo.checksum_policy, ChecksumPolicy::Warn);
        assert_eq!(repo.artifact_max_age, -1);
        assert_eq!(repo.item_max_age, 1440);
        assert_eq!(repo.metadata_max_age, 1440);
        assert!(repo.download_remote_indexes);
        assert!(repo.auto_block_active);
        assert!(repo.file_type_validation);
        assert_eq!(
            repo.remote_storage.remote_storage_url,
            "https://registry.npmjs.org"
        );
    }

    #[test]
    fn test_proxy_maven_is_release() {
        let repo = ProxyRepository::build(&proxy(
            Format::Maven2,
            "https://repo1.maven.org/maven2/",
        ))
        .unwrap();
        assert_eq!(repo.repo_policy, RepoPolicy::Release);
        assert_eq!(repo.provider, "maven2");
    }

    #[test]
    fn test_proxy_json_field_names() {
        let body = RequestBody::new(
            ProxyRepository::build(&proxy(Format::Nuget, "https://www.nuget.org/api/v2/"))
                .unwrap(),
        );
        let json: serde_json::Value = serde_json::from_str(&body.to_json().unwrap()).unwrap();
        let data = &json["data"];

        assert_eq!(data["provider"], "nuget-proxy");
        assert_eq!(data["repoPolicy"], "MIXED");
        assert_eq!(data["notFoundCacheTTL"], 1440);
        assert_eq!(data["downloadRemoteIndexes"], true);
        assert_eq!(data["artifactMaxAge"], -1);
        assert_eq!(data["autoBlockActive"], true);
        assert_eq!(data["fileTypeValidation"], true);
        assert_eq!(data["itemMaxAge"], 1440);
        assert_eq!(data["metadataMaxAge"], 1440);
        assert_eq!(
            data["remoteStorage"]["remoteStorageUrl"],
            "https://www.nuget.org/api/v2/"
        );
        assert!(data.get("writePolicy").is_none());
    }

    #[test]
    fn test_group_member_ids() {
        let ids = group(Format::Npm, "npm-hosted, npmjs ,,internal").member_ids().unwrap();
        assert_eq!(ids, vec!["npm-hosted", "npmjs", "internal"]);
    }

    #[test]
    fn test_group_requires_repositories() {
        assert_eq!(
            group(Format::Maven2, "").member_ids(),
            Err(RequestError::MissingRepositories)
        );
        assert_eq!(
            group(Format::Maven2, " , ,").member_ids(),
            Err(RequestError::MissingRepositories)
        );
    }

    #[test]
    fn test_group_body() {
        let params = group(Format::Nuget, "a,c");
        let repo = GroupRepository::build(&params, vec!["a".into(), "c".into()]).unwrap();

        assert_eq!(repo.provider, "nuget-group");
        assert_eq!(repo.member_ids(), vec!["a", "c"]);
        assert!(!repo.exposed);

        let json = RequestBody::new(repo).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"data":{"id":"public","name":"public","provider":"nuget-group","exposed":false,"repositories":[{"id":"a"},{"id":"c"}]}}"#
        );
    }

    #[test]
    fn test_group_with_no_members_still_builds() {
        let repo = GroupRepository::build(&group(Format::Maven2, "gone"), Vec::new()).unwrap();
        let json = serde_json::to_value(RequestBody::new(repo)).unwrap();
        assert_eq!(json["data"]["repositories"], serde_json::json!([]));
        assert_eq!(json["data"]["provider"], "maven2");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let params = hosted(Format::Maven2, Some("snapshot"));
        let first = RequestBody::new(HostedRepository::build(&params).unwrap())
            .to_json()
            .unwrap();
        let second = RequestBody::new(HostedRepository::build(&params).unwrap())
            .to_json()
            .unwrap();
        assert_eq!(first, second);
    }
}
