//! Mingpan terminal entry point.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mingpan_cli::args::Args;
use mingpan_cli::error::{CliError, exit_message};
use mingpan_cli::run::run;
use mingpan_gateway::{GatewayConfig, HttpGateway};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the report.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match execute(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "wizard did not finish");
            if let Some(message) = exit_message(&err) {
                eprintln!("{message}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(args: &Args) -> Result<(), CliError> {
    let config = GatewayConfig::parse(&args.engine_url)?;
    tracing::info!(engine_url = %config.base_url, "starting wizard");
    let gateway = Arc::new(HttpGateway::new(config));

    let stdin = std::io::stdin();
    let markup = run(args, gateway, stdin.lock(), std::io::stderr()).await?;

    match &args.output {
        Some(path) => std::fs::write(path, markup)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{markup}")?;
        }
    }
    Ok(())
}
