//! nexrepo core - request model for creating Nexus repositories
//!
//! This crate turns command-line parameters into the JSON bodies the Nexus
//! repository manager expects:
//! - `HostedRepository`, `ProxyRepository`, `GroupRepository`: request bodies
//! - `provider_for`: the (kind, format) to provider id table
//! - `RequestError`: validation failures, raised before any network call

pub mod error;
pub mod provider;
pub mod request;
pub mod types;

pub use error::{RequestError, Result};
pub use provider::{PROVIDER_ROLE, provider_for, proxy_policy};
pub use request::{
    GroupMember, GroupParams, GroupRepository, HostedParams, HostedRepository, ProxyParams,
    ProxyRepository, RemoteStorage, RequestBody,
};
pub use types::{ChecksumPolicy, Format, RepoPolicy, RepositoryKind, WritePolicy};
