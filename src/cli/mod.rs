//! CLI argument parsing

mod common;
mod oauth_client;
mod run;
mod workspace;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{RunIdArgs, WorkspaceNameArgs};
pub use oauth_client::OAuthClientCommand;
pub use run::{RunActionArgs, RunCommand, RunLogsArgs};
pub use workspace::{
    AddRepoArgs, AssignVariableSetArgs, CreateWorkspaceArgs, PlanArgs, VariableArgs,
    WorkspaceCommand,
};

/// Drive Terraform Enterprise workspaces, runs and variables
#[derive(Parser, Debug)]
#[command(name = "tfectl")]
#[command(version)]
#[command(about = "Manage TFE workspaces, runs, variables and VCS bindings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Terraform Enterprise address
    #[arg(long = "tfe_url", env = defaults::URL_ENV, global = true)]
    pub tfe_url: Option<String>,

    /// API token
    #[arg(long = "tfe_token", env = defaults::TOKEN_ENV, global = true, hide_env_values = true)]
    pub tfe_token: Option<String>,

    /// Organization name
    #[arg(long = "tfe_org", env = defaults::ORG_ENV, global = true)]
    pub tfe_org: Option<String>,

    /// Do not retry requests that fail with 5xx or 429
    #[arg(long = "no_retry", global = true, default_value_t = false)]
    pub no_retry: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log_level", global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

/// Top-level nouns
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Workspaces, their variables, VCS bindings and variable sets
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommand,
    },

    /// OAuth clients (VCS connections)
    #[command(name = "oauth_client")]
    OAuthClient {
        #[command(subcommand)]
        command: OAuthClientCommand,
    },

    /// Runs, their plan/apply output and logs
    Run {
        #[command(subcommand)]
        command: RunCommand,
    },
}
