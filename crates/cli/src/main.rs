use crate::{commands::Commands, error::CliError, shutdown::ExitCode};
use clap::Parser;
use connectors::mongo::{client::StoreSettings, sink::TransactionSink, source::AccountSource};
use engine_core::{error::SyncError, retry::RetryPolicy, runner::SyncRunner};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;
mod shutdown;

#[derive(Parser)]
#[command(
    name = "denorm",
    version = "0.1.0",
    about = "Embeds account projections into matching transaction documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is reserved for the JSON report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match dispatch(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::Failed
        }
    };

    std::process::exit(code.as_i32());
}

async fn dispatch(command: Commands) -> Result<ExitCode, CliError> {
    match command {
        Commands::Run {
            uri,
            env_file,
            database,
            source_collection,
            target_collection,
            page_size,
            retry_attempts,
            connect_timeout_secs,
            json,
        } => {
            let client = build_client(uri, env_file.as_deref(), connect_timeout_secs).await?;
            let source =
                AccountSource::for_collection(&client, &database, &source_collection, page_size);
            let sink = TransactionSink::for_collection(&client, &database, &target_collection);

            let cancel = CancellationToken::new();
            shutdown::install_signal_handlers(cancel.clone());

            info!(
                database = %database,
                source = %source_collection,
                target = %target_collection,
                page_size,
                "starting sync"
            );

            let runner = SyncRunner::new(source, sink)
                .with_retry(RetryPolicy::with_attempts(retry_attempts))
                .with_cancellation(cancel);

            match runner.run().await {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    Ok(ExitCode::Done)
                }
                Err(SyncError::Cancelled) => {
                    warn!("interrupted; the next invocation restarts from the beginning");
                    Ok(ExitCode::Interrupted)
                }
                Err(err) => Err(CliError::Sync(err)),
            }
        }
        Commands::TestConn {
            uri,
            env_file,
            connect_timeout_secs,
        } => {
            let client = build_client(uri, env_file.as_deref(), connect_timeout_secs).await?;
            connectors::mongo::client::ping(&client).await?;
            info!("connection ok");
            Ok(ExitCode::Done)
        }
    }
}

async fn build_client(
    uri: Option<String>,
    env_file: Option<&str>,
    connect_timeout_secs: u64,
) -> Result<mongodb::Client, CliError> {
    let uri = env::resolve_uri(uri, env_file)?;
    let settings =
        StoreSettings::new(uri).with_timeout(Duration::from_secs(connect_timeout_secs));
    Ok(connectors::mongo::client::connect(&settings).await?)
}
