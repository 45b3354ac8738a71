//! Repository kinds, package formats and the policy enums that appear in
//! request bodies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// Package format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Maven2,
    Npm,
    Nuget,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Maven2, Format::Npm, Format::Nuget];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Maven2 => "maven2",
            Format::Npm => "npm",
            Format::Nuget => "nuget",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maven2" | "maven" => Ok(Format::Maven2),
            "npm" => Ok(Format::Npm),
            "nuget" => Ok(Format::Nuget),
            _ => Err(RequestError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of repository being created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    Hosted,
    Proxy,
    Group,
}

impl RepositoryKind {
    pub const ALL: [RepositoryKind; 3] = [
        RepositoryKind::Hosted,
        RepositoryKind::Proxy,
        RepositoryKind::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::Hosted => "hosted",
            RepositoryKind::Proxy => "proxy",
            RepositoryKind::Group => "group",
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository policy
///
/// Parsed case-insensitively, serialized uppercase (`RELEASE`, `SNAPSHOT`,
/// `MIXED`) as Nexus expects in `repoPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RepoPolicy {
    Release,
    Snapshot,
    Mixed,
}

impl RepoPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoPolicy::Release => "release",
            RepoPolicy::Snapshot => "snapshot",
            RepoPolicy::Mixed => "mixed",
        }
    }

    /// Write policy a hosted repository gets for this repository policy
    pub fn write_policy(&self) -> WritePolicy {
        match self {
            RepoPolicy::Release | RepoPolicy::Mixed => WritePolicy::AllowWriteOnce,
            RepoPolicy::Snapshot => WritePolicy::AllowWrite,
        }
    }
}

impl fmt::Display for RepoPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoPolicy {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "release" => Ok(RepoPolicy::Release),
            "snapshot" => Ok(RepoPolicy::Snapshot),
            "mixed" => Ok(RepoPolicy::Mixed),
            _ => Err(RequestError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WritePolicy {
    AllowWriteOnce,
    AllowWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecksumPolicy {
    Ignore,
    Warn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("maven2".parse::<Format>().unwrap(), Format::Maven2);
        assert_eq!("NPM".parse::<Format>().unwrap(), Format::Npm);
        assert_eq!(" nuget ".parse::<Format>().unwrap(), Format::Nuget);
        assert!(matches!(
            "docker".parse::<Format>(),
            Err(RequestError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_policy_parse_is_case_insensitive() {
        assert_eq!("Release".parse::<RepoPolicy>().unwrap(), RepoPolicy::Release);
        assert_eq!("SNAPSHOT".parse::<RepoPolicy>().unwrap(), RepoPolicy::Snapshot);
        assert_eq!("mixed".parse::<RepoPolicy>().unwrap(), RepoPolicy::Mixed);
        assert!("nightly".parse::<RepoPolicy>().is_err());
    }

    #[test]
    fn test_write_policy() {
        assert_eq!(RepoPolicy::Release.write_policy(), WritePolicy::AllowWriteOnce);
        assert_eq!(RepoPolicy::Mixed.write_policy(), WritePolicy::AllowWriteOnce);
        assert_eq!(RepoPolicy::Snapshot.write_policy(), WritePolicy::AllowWrite);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&RepoPolicy::Snapshot).unwrap(),
            "\"SNAPSHOT\""
        );
        assert_eq!(
            serde_json::to_string(&WritePolicy::AllowWriteOnce).unwrap(),
            "\"ALLOW_WRITE_ONCE\""
        );
        assert_eq!(
            serde_json::to_string(&ChecksumPolicy::Ignore).unwrap(),
            "\"IGNORE\""
        );
    }
}
