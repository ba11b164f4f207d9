//! Merchant API Samples - Command Line Entry Point
//!
//! Lists and runs the samples of the crate against the Merchant API, and
//! stores user credentials obtained through the browser consent flow.
//!
//! # Architecture
//!
//! - **HTTP client**: reqwest (REST/JSON against `merchantapi.googleapis.com`)
//! - **Authentication**: OAuth2 with service accounts (signed JWT), stored
//!   refresh tokens or a pre-issued access token
//! - **Login receiver**: Axum on a loopback port
//! - **Format**: JSON requests/responses, pretty-printed to stdout
//!
//! # Startup Flow
//!
//! 1. Parse the command line
//! 2. `list`: print the registered samples
//! 3. `login`: load configuration from environment variables (and `.env`),
//!    run the consent flow and write `token.json`
//! 4. `run`: load configuration and `merchant-info.json`, discover credentials
//!    and run one sample

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use merchant_api_samples::auth::user_flow;
use merchant_api_samples::client::build_http;
use merchant_api_samples::config::Config;
use merchant_api_samples::samples::{self, SampleContext};

#[derive(Parser)]
#[command(name = "merchant-samples", version, about = "Merchant API samples")]
struct Cli {
    /// Directory with merchant-info.json and credential files
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every sample with a short description
    List {
        /// Only show samples whose name contains this text
        filter: Option<String>,
    },
    /// Run one sample
    Run {
        /// Sample name as printed by `list`
        name: String,

        /// Sample parameter, repeatable: -p data_source_id=123
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Authorize the samples in a browser and store token.json
    Login,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    samples::parse_param(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    // `list` and `--help` work without a valid configuration
    let Cli {
        config_dir,
        command,
    } = Cli::parse();

    match command {
        Command::List { filter } => list(filter.as_deref()),
        Command::Login => {
            let config = load_config(config_dir)?;
            let http = build_http(&config)?;
            let path = user_flow::login(&config, &http).await?;
            println!("Credentials stored in {}", path.display());
            Ok(())
        }
        Command::Run { name, params } => run(load_config(config_dir)?, &name, params).await,
    }
}

fn load_config(config_dir: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(dir) = config_dir {
        config.config_dir = dir;
    }
    tracing::debug!("Configuration directory: {}", config.config_dir.display());
    Ok(config)
}

fn list(filter: Option<&str>) -> anyhow::Result<()> {
    let registry = samples::registry()?;
    for sample in registry
        .list()
        .filter(|s| filter.is_none_or(|f| s.name.contains(f)))
    {
        println!("{:<80} {}", sample.name, sample.description);
    }
    Ok(())
}

async fn run(config: Config, name: &str, params: Vec<(String, String)>) -> anyhow::Result<()> {
    let registry = samples::registry()?;
    let sample = registry.find(name).with_context(|| {
        format!("unknown sample '{}', run `merchant-samples list` to see them all", name)
    })?;

    let params: HashMap<String, String> = params.into_iter().collect();
    let ctx = SampleContext::from_config(config, params)?;
    tracing::info!(
        "Running {} for account {} with {} credentials",
        sample.name,
        ctx.account_id(),
        ctx.client.credential_kind()
    );

    if let Err(err) = (sample.run)(&ctx).await {
        if err.is_permission_denied() {
            eprintln!(
                "The caller lacks access to this method. Check that the credentials belong to a \
                 user or service account added to Merchant Center account {}.",
                ctx.account_id()
            );
        }
        return Err(err.into());
    }
    Ok(())
}
