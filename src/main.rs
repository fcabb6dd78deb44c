//! tfectl - Main entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{debug, info};

use tfectl::{
    emit, run_oauth_client_command, run_run_command, run_workspace_command, Cli, Command,
    CommandOutput, Config, Connection, Result,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfectl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(output) => match emit(&output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: failed to write output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) if e.is_config() => {
            eprintln!("{}", e);
            eprintln!("{}", Cli::command().render_help());
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<CommandOutput> {
    let config = Config::from_cli(cli)?;
    debug!(
        "Config: address={}, org={:?}, retry_server_errors={}",
        config.address, config.organization, config.retry_server_errors
    );

    let conn = Connection::new(&config);

    match &cli.command {
        Command::Workspace { command } => run_workspace_command(&conn, command).await,
        Command::OAuthClient { command } => run_oauth_client_command(&conn, command).await,
        Command::Run { command } => run_run_command(&conn, command).await,
    }
}

