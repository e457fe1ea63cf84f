use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heap_percent::cli::Cli;
use heap_percent::config::Settings;
use heap_percent::AppError;

fn run() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    // Logs go to stderr, stdout only carries the result
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("init logger")?;

    let cli = Cli::parse();
    let report = cli.report(&settings)?;
    let output = cli.render(&report).context("render report")?;

    writeln!(io::stdout(), "{}", output).context("write result")?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            _ = writeln!(io::stderr(), "ERROR: {:#}", err);
            ExitCode::from(code)
        }
    }
}
