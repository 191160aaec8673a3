use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qris_core::cli::{self, Cli, Commands};
use qris_core::config::{Config, LogFormat};
use qris_core::error::AppError;
use qris_core::startup::Repositories;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Configuration error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    init_tracing(config.log_format);

    match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            match e.downcast_ref::<AppError>() {
                Some(app_error) => {
                    tracing::debug!(code = app_error.code(), "command failed");
                    ExitCode::from(app_error.exit_code() as u8)
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output stays pipeable.
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Decode { payload, reveal } => cli::handle_decode(&payload, reveal)?,
        Commands::Validate { payload } => {
            if !cli::handle_validate(&payload)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config => cli::handle_config(&config)?,
        Commands::Generate(args) => {
            let repos = Repositories::connect(&config).await?;
            cli::handle_generate(&repos, args).await?
        }
        Commands::Configure(args) => {
            let repos = Repositories::connect(&config).await?;
            cli::handle_configure(&repos, args).await?
        }
        Commands::History(command) => {
            let repos = Repositories::connect(&config).await?;
            cli::handle_history(&repos, command).await?
        }
    }

    Ok(ExitCode::SUCCESS)
}
