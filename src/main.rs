//! jaelon - GitHub milestone checker and fixer
//!
//! Checks that pull requests merged between two releases carry the release
//! milestone, and assigns it where it is missing.

mod cli;

use clap::{ArgAction, Parser};
use jaelon::config::{Config, ConfigOverrides, default_config_path, load_file_config};
use jaelon::error::{Error, Result};
use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error};

use crate::cli::check::run_check;
use crate::cli::context::CommandContext;

#[derive(Parser)]
#[command(name = "jaelon")]
#[command(version)]
#[command(about = "GitHub milestone checker and fixer")]
#[command(
    long_about = "Jaelon is a GitHub milestone checker and fixer.\nCheck if pull requests have a milestone."
)]
struct Cli {
    /// Repository owner
    #[arg(short = 'o', long)]
    owner: Option<String>,

    /// Repository name
    #[arg(short = 'r', long = "repo-name")]
    repo_name: Option<String>,

    /// Major version part of the milestone
    #[arg(short = 'a', long)]
    major: u64,

    /// Minor version part of the milestone
    #[arg(short = 'i', long)]
    minor: u64,

    /// Follow the head of the base branch
    #[arg(short = 'c', long)]
    current: bool,

    /// GitHub token
    #[arg(short = 't', long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Debug mode
    #[arg(long)]
    debug: bool,

    /// Dry run mode (report only, never assign milestones)
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    dry_run: bool,

    /// Mainline branch [default: master]
    #[arg(long)]
    base_branch: Option<String>,

    /// Template for the current version ref [default: v{major}.{minor}.0]
    #[arg(long)]
    current_version_template: Option<String>,

    /// Template for the previous version ref [default: v{major}.{minor}.0]
    #[arg(long)]
    previous_version_template: Option<String>,

    /// Template for the release branch [default: v{major}.{minor}]
    #[arg(long)]
    release_branch_template: Option<String>,

    /// GitHub Enterprise host
    #[arg(long)]
    host: Option<String>,

    /// Config file [default: <config dir>/jaelon/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort the run after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let file = match cli.config.clone().or_else(default_config_path) {
        Some(path) => load_file_config(&path)?,
        None => Default::default(),
    };
    let host = cli.host.clone().or_else(|| file.host.clone());

    let overrides = ConfigOverrides {
        owner: cli.owner,
        repo_name: cli.repo_name,
        major: cli.major,
        minor: cli.minor,
        current: cli.current,
        base_branch: cli.base_branch,
        current_version_template: cli.current_version_template,
        previous_version_template: cli.previous_version_template,
        release_branch_template: cli.release_branch_template,
        dry_run: cli.dry_run,
        debug: cli.debug,
    };
    let config = Config::resolve(overrides, file)?;

    if config.debug {
        let rendered = serde_json::to_string(&config).unwrap_or_default();
        debug!(config = %rendered, "running with config");
    }

    let ctx = CommandContext::new(config, cli.token.as_deref(), host.as_deref()).await?;

    let timeout = cli.timeout;
    tokio::select! {
        result = with_deadline(run_check(&ctx), timeout) => result.map(|_| ()),
        _ = tokio::signal::ctrl_c() => Err(Error::Cancelled),
    }
}

/// Bound `fut` by an optional deadline in seconds
async fn with_deadline<T>(fut: impl Future<Output = Result<T>>, secs: Option<u64>) -> Result<T> {
    match secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), fut)
            .await
            .unwrap_or(Err(Error::Timeout(secs))),
        None => fut.await,
    }
}
