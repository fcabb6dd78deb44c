//! Argument groups shared across commands

use clap::Args;

/// Arguments selecting a workspace by name
#[derive(Args, Debug)]
pub struct WorkspaceNameArgs {
    /// Workspace name
    #[arg(long = "workspace_name")]
    pub workspace_name: String,
}

/// Arguments selecting a run by ID
#[derive(Args, Debug)]
pub struct RunIdArgs {
    /// Run ID (run-xxx)
    #[arg(long = "run_id", visible_alias = "plan_id")]
    pub run_id: String,
}
