//! OAuth client command handlers

use crate::cli::OAuthClientCommand;
use crate::error::Result;
use crate::hcp::connection::Connection;
use crate::output::CommandOutput;

/// Run an 'oauth_client' verb
pub async fn run_oauth_client_command(
    conn: &Connection,
    command: &OAuthClientCommand,
) -> Result<CommandOutput> {
    match command {
        OAuthClientCommand::List => Ok(CommandOutput::Json(conn.list_oauth_clients().await?)),
    }
}
