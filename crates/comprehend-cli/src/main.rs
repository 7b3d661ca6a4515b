/*
[INPUT]:  CLI arguments, optional YAML settings file, COMPREHEND_* environment
[OUTPUT]: Operation listings, encoded wire requests, decoded responses
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or command dispatch
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use comprehend_cli::{Cli, Command, Decoded, Overrides, Settings, commands};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let settings = load_settings(&args)?;
    init_tracing(&settings.log_level, args.log_level.is_some())?;
    debug!(region = %settings.region, endpoint = ?settings.endpoint, "settings loaded");

    match args.command {
        Command::Operations => {
            print!("{}", commands::list_operations());
        }
        Command::Encode { operation, input, .. } => {
            let config = settings.service_config()?;
            print!("{}", commands::encode(&operation, &input, &config)?);
        }
        Command::Decode {
            operation,
            input,
            status,
        } => match commands::decode(&operation, &input, status)? {
            Decoded::Output(rendered) => println!("{rendered}"),
            Decoded::Failed(err) => {
                warn!(kind = %err.kind, retryable = err.is_retryable(), "service returned an error");
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn load_settings(args: &Cli) -> Result<Settings> {
    let (region, endpoint) = match &args.command {
        Command::Encode {
            region, endpoint, ..
        } => (region.clone(), endpoint.clone()),
        _ => (None, None),
    };
    let overrides = Overrides {
        region,
        endpoint,
        log_level: args.log_level.clone(),
    };
    Settings::load(args.settings.as_deref(), &overrides).context("load settings")
}

/// `RUST_LOG` applies unless `--log-level` was given.
fn init_tracing(log_level: &str, explicit: bool) -> Result<()> {
    let directives = match std::env::var("RUST_LOG") {
        Ok(from_env) if !explicit && !from_env.is_empty() => from_env,
        _ => log_level.to_string(),
    };
    let filter = EnvFilter::try_new(&directives).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
