//! Run command handlers

use crate::cli::{RunActionArgs, RunCommand};
use crate::error::Result;
use crate::hcp::connection::Connection;
use crate::hcp::logs::LogPhase;
use crate::output::CommandOutput;

use super::models::RunAction;

/// Run a 'run' verb
pub async fn run_run_command(conn: &Connection, command: &RunCommand) -> Result<CommandOutput> {
    match command {
        RunCommand::Get(args) => Ok(CommandOutput::Json(
            conn.read_plan_output(&args.run_id).await?,
        )),
        RunCommand::ApplyStatus(args) => Ok(CommandOutput::Json(
            conn.read_apply_output(&args.run_id).await?,
        )),
        RunCommand::Apply(args) => transition(conn, args, RunAction::Apply).await,
        RunCommand::Discard(args) => transition(conn, args, RunAction::Discard).await,
        RunCommand::Cancel(args) => transition(conn, args, RunAction::Cancel).await,
        RunCommand::List(args) => {
            let runs = conn.list_runs(&args.workspace_name).await?;
            CommandOutput::json(&runs)
        }
        RunCommand::PlanLogs(args) => {
            let bundle = conn.read_logs(&args.run_id, LogPhase::Plan).await?;
            Ok(CommandOutput::Json(bundle.to_json()?))
        }
        RunCommand::ApplyLogs(args) => {
            let bundle = conn.read_logs(&args.run_id, LogPhase::Apply).await?;
            Ok(CommandOutput::Json(bundle.to_json()?))
        }
        RunCommand::Logs(args) => {
            let bundle = conn.read_logs_tagged(&args.run.run_id, &args.phase).await?;
            Ok(CommandOutput::Json(bundle.to_json()?))
        }
    }
}

async fn transition(
    conn: &Connection,
    args: &RunActionArgs,
    action: RunAction,
) -> Result<CommandOutput> {
    let run_id = &args.run.run_id;
    let comment = args.message.as_deref();

    conn.transition_run(run_id, action, comment).await?;

    Ok(CommandOutput::Message(format!(
        "Run id {} {}",
        run_id,
        action.past_tense()
    )))
}
