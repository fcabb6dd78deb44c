//! OAuth Client module

mod api;
mod commands;
mod models;

pub use commands::run_oauth_client_command;
pub use models::{OAuthClient, OAuthClientAttributes, OAuthClientSummary};
