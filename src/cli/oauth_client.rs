//! OAuth client command definitions

use clap::Subcommand;

/// Verbs for the 'oauth_client' noun
#[derive(Subcommand, Debug)]
pub enum OAuthClientCommand {
    /// List OAuth clients (VCS connections) as JSON
    List,
}
