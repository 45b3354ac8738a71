//! Request validation errors

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Repository id must not be empty")]
    #[diagnostic(code(nexrepo::request::missing_id))]
    MissingId,

    #[error("repoPolicy is a required parameter for creating a hosted maven repository in Nexus")]
    #[diagnostic(
        code(nexrepo::request::missing_policy),
        help("pass --policy with one of: release, snapshot, mixed")
    )]
    MissingPolicy,

    #[error("Invalid repository policy '{value}'")]
    #[diagnostic(
        code(nexrepo::request::invalid_policy),
        help("valid policies are: release, snapshot, mixed")
    )]
    InvalidPolicy { value: String },

    #[error("remoteStorageUrl is a required parameter for creating a proxy repository")]
    #[diagnostic(
        code(nexrepo::request::missing_remote_url),
        help("pass --remote-url with the URL of the repository to proxy")
    )]
    MissingRemoteStorageUrl,

    #[error("repositories is a required parameter for creating a group repository")]
    #[diagnostic(
        code(nexrepo::request::missing_repositories),
        help("pass --repositories as a comma-separated list of repository ids")
    )]
    MissingRepositories,

    #[error("Unknown repository format '{value}'")]
    #[diagnostic(
        code(nexrepo::request::unknown_format),
        help("supported formats are: maven2, npm, nuget")
    )]
    UnknownFormat { value: String },
}

pub type Result<T> = std::result::Result<T, RequestError>;
