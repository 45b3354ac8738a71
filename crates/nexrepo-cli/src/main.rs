//! nexrepo - create repositories in a Nexus repository manager

use clap::{ArgAction, Args, Parser, Subcommand};
use nexrepo_core::{Format, GroupParams, HostedParams, ProxyParams};
use std::path::PathBuf;

mod commands;
mod display;
mod error;
mod exit_codes;
mod logging;

use commands::ConnectionOptions;
use error::Result;

#[derive(Parser)]
#[command(name = "nexrepo")]
#[command(author = "nexrepo Contributors")]
#[command(version)]
#[command(about = "Create hosted, proxy and group repositories in Nexus", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: ConnectionArgs,

    /// Trace requests and responses
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Nexus base URL, including the context path (e.g. http://localhost:8081/nexus)
    #[arg(long, global = true, env = "NEXUS_URL")]
    url: Option<String>,

    /// Nexus username
    #[arg(short, long, global = true, env = "NEXUS_USERNAME")]
    username: Option<String>,

    /// Nexus password
    #[arg(short, long, global = true, env = "NEXUS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Config file (default: ~/.config/nexrepo/config.yaml)
    #[arg(long, global = true, env = "NEXREPO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a repository
    #[command(subcommand)]
    Create(CreateCommands),

    /// Check whether a repository exists
    Exists {
        /// Repository id
        id: String,
    },
}

#[derive(Subcommand)]
enum CreateCommands {
    /// Create a hosted repository
    Hosted {
        #[command(flatten)]
        common: CommonArgs,

        /// Repository policy: release, snapshot or mixed (required for maven2)
        #[arg(long)]
        policy: Option<String>,
    },

    /// Create a proxy repository
    Proxy {
        #[command(flatten)]
        common: CommonArgs,

        /// URL of the remote repository to proxy
        #[arg(long = "remote-url", visible_alias = "remote-storage-url")]
        remote_url: Option<String>,
    },

    /// Create a group repository
    Group {
        #[command(flatten)]
        common: CommonArgs,

        /// Comma-separated member repository ids
        #[arg(short, long)]
        repositories: Option<String>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Repository id (also used as its name)
    #[arg(long)]
    id: String,

    /// Package format: maven2, npm or nuget
    #[arg(short, long)]
    format: Format,

    /// Repository type sent to Nexus (defaults to the subcommand)
    #[arg(long)]
    repo_type: Option<String>,

    /// Publish the repository URL (use --exposed=false to hide it)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    exposed: bool,

    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl From<ConnectionArgs> for ConnectionOptions {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            url: args.url,
            username: args.username,
            password: args.password,
            config: args.config,
        }
    }
}

async fn run(command: Commands, options: &ConnectionOptions) -> Result<i32> {
    match command {
        Commands::Create(CreateCommands::Hosted { common, policy }) => {
            let params = HostedParams {
                id: common.id,
                repo_type: common.repo_type,
                policy,
                format: common.format,
                exposed: common.exposed,
            };
            commands::create::hosted(options, &params, common.dry_run).await
        }

        Commands::Create(CreateCommands::Proxy { common, remote_url }) => {
            let params = ProxyParams {
                id: common.id,
                repo_type: common.repo_type,
                remote_storage_url: remote_url.unwrap_or_default(),
                format: common.format,
                exposed: common.exposed,
            };
            commands::create::proxy(options, &params, common.dry_run).await
        }

        Commands::Create(CreateCommands::Group {
            common,
            repositories,
        }) => {
            let params = GroupParams {
                id: common.id,
                repo_type: common.repo_type,
                repositories: repositories.unwrap_or_default(),
                format: common.format,
                exposed: common.exposed,
            };
            commands::create::group(options, &params, common.dry_run).await
        }

        Commands::Exists { id } => commands::exists::run(options, &id).await,
    }
}

#[tokio::main]
async fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug);

    let options = ConnectionOptions::from(cli.connection);

    let code = match run(cli.command, &options).await {
        Ok(code) => code,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };

    std::process::exit(code);
}
