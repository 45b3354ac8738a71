//! Create command - hosted, proxy and group repositories
//!
//! Parameters are validated before any connection is made. With `dry_run`
//! the body is printed instead of sent; group dry runs still query Nexus for
//! member existence because that decides the body.

use nexrepo_client::{CreateOutcome, REPO_GROUPS_PATH, REPOSITORIES_PATH};
use nexrepo_core::{
    GroupParams, HostedParams, HostedRepository, ProxyParams, ProxyRepository, RequestBody,
};
use serde::Serialize;

use super::{ConnectionOptions, connect};
use crate::display::{StatusReporter, print_dry_run};
use crate::error::{CliError, Result};
use crate::exit_codes;

pub async fn hosted(options: &ConnectionOptions, params: &HostedParams, dry_run: bool) -> Result<i32> {
    let body = RequestBody::new(HostedRepository::build(params)?);

    if dry_run {
        return dry_run_output(REPOSITORIES_PATH, &body);
    }

    let client = connect(options)?;
    let outcome = client.create_hosted(params).await?;
    report(&outcome)
}

pub async fn proxy(options: &ConnectionOptions, params: &ProxyParams, dry_run: bool) -> Result<i32> {
    let body = RequestBody::new(ProxyRepository::build(params)?);

    if dry_run {
        return dry_run_output(REPOSITORIES_PATH, &body);
    }

    let client = connect(options)?;
    let outcome = client.create_proxy(params).await?;
    report(&outcome)
}

pub async fn group(options: &ConnectionOptions, params: &GroupParams, dry_run: bool) -> Result<i32> {
    params.member_ids()?;

    let client = connect(options)?;

    if dry_run {
        let body = RequestBody::new(client.resolve_group(params).await?);
        return dry_run_output(REPO_GROUPS_PATH, &body);
    }

    let outcome = client.create_group(params).await?;
    report(&outcome)
}

fn dry_run_output<T: Serialize>(endpoint: &str, body: &RequestBody<T>) -> Result<i32> {
    let json = body
        .to_json_pretty()
        .map_err(|e| CliError::internal(format!("Failed to encode request body: {}", e)))?;
    print_dry_run(endpoint, &json);
    Ok(exit_codes::SUCCESS)
}

fn report(outcome: &CreateOutcome) -> Result<i32> {
    StatusReporter::stdout().report_create(outcome)?;

    Ok(if outcome.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::REJECTED
    })
}
