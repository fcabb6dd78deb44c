//! tfectl - Drive Terraform Enterprise from the command line
//!
//! A CLI for the TFE / HCP Terraform API covering workspaces, runs,
//! variables, variable sets and VCS bindings.
//!
//! # Features
//!
//! - Create workspaces and bind them to VCS repositories
//! - Queue, apply, discard and cancel runs
//! - Read structured plan output, apply records and phase logs
//! - Add Terraform and environment variables, assign variable sets
//! - Sequential, lazy pagination over every listing
//!
//! # Example
//!
//! ```bash
//! export TFE_URL=app.terraform.io TFE_TOKEN=... TFE_ORG=acme
//!
//! # Queue a plan and inspect it
//! tfectl workspace plan --workspace_name infra-prod --message "nightly"
//! tfectl run plan_logs --run_id run-abc123
//!
//! # Apply it
//! tfectl run apply --run_id run-abc123
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;

pub use cli::{Cli, Command, OAuthClientCommand, RunCommand, WorkspaceCommand};
pub use config::Config;
pub use error::{Result, TfeError};
pub use hcp::{
    run_oauth_client_command, run_run_command, run_workspace_command, Connection, LogBundle,
    LogPhase, TfeClient,
};
pub use output::{emit, CommandOutput};
