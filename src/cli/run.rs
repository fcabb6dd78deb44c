//! Run command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{RunIdArgs, WorkspaceNameArgs};

/// Verbs for the 'run' noun
#[derive(Subcommand, Debug)]
pub enum RunCommand {
    /// Print the structured plan output of a run
    Get(RunIdArgs),

    /// Confirm and apply a planned run
    Apply(RunActionArgs),

    /// Print the apply record of a run
    #[command(name = "apply_status")]
    ApplyStatus(RunIdArgs),

    /// Discard a run that is waiting for confirmation
    Discard(RunActionArgs),

    /// Cancel a run that is planning or applying
    Cancel(RunActionArgs),

    /// List the runs of a workspace
    #[command(visible_alias = "list_runs")]
    List(WorkspaceNameArgs),

    /// Print the plan log of a run
    #[command(name = "plan_logs")]
    PlanLogs(RunIdArgs),

    /// Print the apply log of a run
    #[command(name = "apply_logs")]
    ApplyLogs(RunIdArgs),

    /// Print the log of a run phase selected by name
    Logs(RunLogsArgs),
}

/// Arguments for run state transitions
#[derive(Args, Debug)]
pub struct RunActionArgs {
    #[command(flatten)]
    pub run: RunIdArgs,

    /// Comment recorded with the transition
    #[arg(long = "message")]
    pub message: Option<String>,
}

/// Arguments for 'run logs'
#[derive(Args, Debug)]
pub struct RunLogsArgs {
    #[command(flatten)]
    pub run: RunIdArgs,

    /// Run phase: plan or apply. Other values print an empty log.
    #[arg(long = "phase", default_value = "plan")]
    pub phase: String,
}
