//! Exists command - check whether a repository id is known to Nexus

use nexrepo_client::RepositoryLookup;
use nexrepo_core::RequestError;

use super::{ConnectionOptions, connect};
use crate::display::StatusReporter;
use crate::error::Result;
use crate::exit_codes;

pub async fn run(options: &ConnectionOptions, id: &str) -> Result<i32> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RequestError::MissingId.into());
    }

    let client = connect(options)?;
    let exists = client.exists(id).await?;

    StatusReporter::stdout().report_exists(id, exists)?;

    Ok(if exists {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR
    })
}
