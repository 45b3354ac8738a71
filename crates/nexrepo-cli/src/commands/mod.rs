//! CLI commands

pub mod create;
pub mod exists;

use std::path::PathBuf;

use nexrepo_client::{NexusClient, NexusConfig, Overrides};

use crate::error::Result;

/// Connection settings given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub config: Option<PathBuf>,
}

/// Build a client from the config file and the command-line overrides
pub fn connect(options: &ConnectionOptions) -> Result<NexusClient> {
    let config = match &options.config {
        Some(path) => NexusConfig::load_from(path)?,
        None => NexusConfig::load()?,
    };

    let connection = config
        .apply(Overrides {
            url: options.url.clone(),
            username: options.username.clone(),
            password: options.password.clone(),
        })
        .connection()?;

    tracing::debug!("Connecting to {} as {}", connection.base_url, connection.credentials.username);

    Ok(NexusClient::new(connection)?)
}
