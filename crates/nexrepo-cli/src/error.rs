//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use miette::Diagnostic;
use nexrepo_client::ClientError;
use nexrepo_core::RequestError;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// A required parameter is missing or invalid
    #[error("Validation failed: {message}")]
    #[diagnostic(code(nexrepo::cli::validation))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Missing or unusable connection settings
    #[error("Configuration error: {message}")]
    #[diagnostic(code(nexrepo::cli::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Nexus could not be reached or refused the credentials
    #[error("Nexus request failed: {message}")]
    #[diagnostic(code(nexrepo::cli::nexus))]
    Nexus { message: String },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(nexrepo::cli::io))]
    Io { message: String },

    /// Internal error (encoding failure, unexpected state)
    #[error("Internal error: {message}")]
    #[diagnostic(code(nexrepo::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation { .. } => exit_codes::VALIDATION_ERROR,
            CliError::Config { .. } => exit_codes::USAGE_ERROR,
            CliError::Nexus { .. } => exit_codes::NETWORK_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }
}

impl From<RequestError> for CliError {
    fn from(err: RequestError) -> Self {
        CliError::Validation {
            message: err.to_string(),
            help: err.help().map(|h| h.to_string()),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => e.into(),
            ClientError::InvalidUrl { .. } | ClientError::InvalidConfig { .. } => CliError::Config {
                message: err.to_string(),
                help: Some(
                    "set the Nexus URL and credentials with --url/--username/--password, \
                     NEXUS_URL/NEXUS_USERNAME/NEXUS_PASSWORD, or a config file"
                        .to_string(),
                ),
            },
            ClientError::ConfigNotFound { .. } | ClientError::Serialization(_) => {
                CliError::config(err.to_string())
            }
            ClientError::Encoding(message) => CliError::internal(message),
            ClientError::Io(e) => CliError::Io {
                message: e.to_string(),
            },
            ClientError::HttpError { .. }
            | ClientError::NetworkError { .. }
            | ClientError::Timeout { .. }
            | ClientError::AuthRequired { .. }
            | ClientError::AuthFailed { .. } => CliError::Nexus {
                message: err.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_help() {
        let err: CliError = RequestError::MissingPolicy.into();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_ERROR);
        match err {
            CliError::Validation { message, help } => {
                assert!(message.contains("repoPolicy is a required parameter"));
                assert!(help.unwrap().contains("--policy"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_client_request_error_is_validation() {
        let err: CliError = ClientError::Request(RequestError::MissingRepositories).into();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_network_errors_map_to_nexus() {
        let err: CliError = ClientError::Timeout { seconds: 30 }.into();
        assert_eq!(err.exit_code(), exit_codes::NETWORK_ERROR);
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_missing_url_is_usage_error() {
        let err: CliError = ClientError::InvalidConfig {
            message: "Nexus URL is not set".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn test_encoding_error_is_internal() {
        let err: CliError = ClientError::Encoding("bad float".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::ERROR);
    }
}
