use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "woodstock")]
#[command(about = "Woodstock - sync local profiles with mozillians.org and reps.mozilla.org", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON record store (defaults to the platform data dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending data migrations
    Migrate,
    /// Pull member data from the remote directories
    Sync {
        #[command(subcommand)]
        action: SyncAction,
    },
    /// Manage local profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Inspect tracking groups
    Group {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Inspect events
    Event {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Subcommand)]
enum SyncAction {
    /// Enrich profiles from mozillians.org
    Profiles {
        /// Only sync the profiles with these emails
        #[arg(long = "email")]
        emails: Vec<String>,
    },
    /// Copy Reps display names from reps.mozilla.org
    Reps {
        /// Only sync the profiles with these emails
        #[arg(long = "email")]
        emails: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Register a new profile
    Add {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        username: String,
    },
    /// List stored profiles
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ListAction {
    /// List all records
    List,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = commands::utils::PathOverrides {
        config: cli.config,
        store: cli.store,
    };

    match cli.command {
        Commands::Migrate => commands::migrate::run(&paths).await?,
        Commands::Sync { action } => match action {
            SyncAction::Profiles { emails } => commands::sync::profiles(&paths, emails).await?,
            SyncAction::Reps { emails } => commands::sync::reps(&paths, emails).await?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Add { email, username } => {
                commands::profile::add(&paths, email, username).await?
            }
            ProfileAction::List { json } => commands::profile::list(&paths, json).await?,
        },
        Commands::Group { action } => match action {
            ListAction::List => commands::listing::groups(&paths).await?,
        },
        Commands::Event { action } => match action {
            ListAction::List => commands::listing::events(&paths).await?,
        },
    }

    Ok(())
}
