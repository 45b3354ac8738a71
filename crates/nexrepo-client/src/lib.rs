//! nexrepo client - talks to the Nexus repository manager REST API
//!
//! This crate provides:
//!
//! - **Transport**: `NexusClient`, JSON over HTTP with basic auth
//! - **Existence checks**: the `RepositoryLookup` trait
//! - **Creation**: hosted, proxy and group repositories
//! - **Configuration**: config file, credentials and overrides
//!
//! ## Example
//!
//! ```rust,no_run
//! use nexrepo_client::{NexusClient, NexusConfig, Overrides};
//! use nexrepo_core::{Format, ProxyParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = NexusConfig::load()?
//!     .apply(Overrides {
//!         url: Some("http://localhost:8081/nexus".to_string()),
//!         username: Some("admin".to_string()),
//!         password: Some("admin123".to_string()),
//!     })
//!     .connection()?;
//! let client = NexusClient::new(connection)?;
//!
//! let outcome = client
//!     .create_proxy(&ProxyParams {
//!         id: "npmjs".to_string(),
//!         repo_type: None,
//!         remote_storage_url: "https://registry.npmjs.org".to_string(),
//!         format: Format::Npm,
//!         exposed: true,
//!     })
//!     .await?;
//! println!("status {}", outcome.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod create;
pub mod credentials;
pub mod error;
pub mod http;
pub mod lookup;

// Re-exports for convenience
pub use config::{Connection, NexusConfig, Overrides};
pub use create::CreateOutcome;
pub use credentials::{Credentials, ResolvedCredentials};
pub use error::{ClientError, DEFAULT_TIMEOUT_SECS, Result};
pub use http::{NexusClient, NexusResponse, REPO_GROUPS_PATH, REPOSITORIES_PATH};
pub use lookup::{RepositoryLookup, filter_existing};
