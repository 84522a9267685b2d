use anyhow::{Context, anyhow};
use clap::Parser;
use common::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::{pipeline::Pipeline, report::render};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML config file; the built-in preset is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Parses arguments, loads the config (or takes `preset`) and installs the
/// tracing subscriber. Logs go to stderr so stdout only carries the report.
pub fn initialize_executable(preset: impl FnOnce() -> Config) -> anyhow::Result<Config> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let config = preset();
            config.validate()?;
            config
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.common.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    match &args.config {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
        None => tracing::info!(project = %config.common.project_name, "Using built-in preset"),
    }

    Ok(config)
}

/// Runs the whole pipeline once and prints the report to stdout.
pub fn run_report(config: Config) -> anyhow::Result<()> {
    let report_config = config.report.clone();
    let outcome = Pipeline::new(config).run()?;
    let report = render(&outcome, &report_config)?;
    print!("{report}");
    Ok(())
}
