//! Mapping from (repository kind, package format) to Nexus provider ids

use crate::types::{Format, RepoPolicy, RepositoryKind};

/// Provider role sent with every hosted and proxy repository
pub const PROVIDER_ROLE: &str = "org.sonatype.nexus.proxy.repository.Repository";

/// Nexus provider id for a repository kind and package format.
///
/// Hosted nuget maps to `nuget-proxy`, which is the id the Nexus nuget
/// plugin registers for hosted feeds.
pub fn provider_for(kind: RepositoryKind, format: Format) -> &'static str {
    use Format::*;
    use RepositoryKind::*;

    match (kind, format) {
        (Hosted, Maven2) => "maven2",
        (Hosted, Npm) => "npm-hosted",
        (Hosted, Nuget) => "nuget-proxy",

        (Proxy, Maven2) => "maven2",
        (Proxy, Npm) => "npm-proxy",
        (Proxy, Nuget) => "nuget-proxy",

        (Group, Maven2) => "maven2",
        (Group, Npm) => "npm-group",
        (Group, Nuget) => "nuget-group",
    }
}

/// Repository policy a proxy repository is created with
pub fn proxy_policy(format: Format) -> RepoPolicy {
    match format {
        Format::Maven2 => RepoPolicy::Release,
        Format::Npm | Format::Nuget => RepoPolicy::Mixed,
    }
}
