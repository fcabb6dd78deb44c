//! Workspace command handlers

use serde::Serialize;

use crate::cli::{VariableArgs, WorkspaceCommand};
use crate::error::Result;
use crate::hcp::connection::Connection;
use crate::hcp::traits::TfeResource;
use crate::hcp::variable_sets::VariableSetSummary;
use crate::hcp::variables::{NewVariable, VariableCategory};
use crate::output::CommandOutput;

/// Payload printed after queueing a plan
#[derive(Serialize)]
struct QueuedRun<'a> {
    run_id: &'a str,
    status: &'static str,
}

/// Run a 'workspace' verb
pub async fn run_workspace_command(
    conn: &Connection,
    command: &WorkspaceCommand,
) -> Result<CommandOutput> {
    match command {
        WorkspaceCommand::List => Ok(CommandOutput::Lines(conn.list_workspaces().await?)),
        WorkspaceCommand::Create(args) => {
            let workspace = conn
                .create_workspace(&args.workspace_name, &args.work_dir)
                .await?;
            Ok(CommandOutput::Message(format!(
                "Workspace '{}' created with ID {}",
                workspace.name(),
                workspace.id
            )))
        }
        WorkspaceCommand::Get(args) => Ok(CommandOutput::Json(
            conn.get_workspace(&args.workspace_name).await?,
        )),
        WorkspaceCommand::AddRepo(args) => {
            conn.add_repo(
                &args.workspace_name,
                &args.oauth_client_id,
                &args.branch,
                &args.repo_url,
            )
            .await?;
            Ok(CommandOutput::Message(format!(
                "Workspace '{}' bound to {} ({})",
                args.workspace_name, args.repo_url, args.branch
            )))
        }
        WorkspaceCommand::AddTfeVar(args) => {
            add_variable(conn, args, VariableCategory::Terraform).await
        }
        WorkspaceCommand::AddEnvVar(args) => add_variable(conn, args, VariableCategory::Env).await,
        WorkspaceCommand::Plan(args) => {
            let run_id = conn
                .create_run(&args.workspace_name, args.message.as_deref())
                .await?;
            CommandOutput::json(&QueuedRun {
                run_id: &run_id,
                status: "planning",
            })
        }
        WorkspaceCommand::AssignVariableSet(args) => {
            let varset = conn
                .assign_variable_set(&args.workspace_name, &args.variable_set)
                .await?;
            CommandOutput::json(&VariableSetSummary::from(&varset))
        }
    }
}

async fn add_variable(
    conn: &Connection,
    args: &VariableArgs,
    category: VariableCategory,
) -> Result<CommandOutput> {
    let variable = NewVariable::new(
        &args.var_name,
        &args.var_value,
        &args.var_description,
        args.is_hcl,
        args.is_sensitive,
        category,
    );
    conn.add_variable(&args.workspace_name, &variable).await?;
    Ok(CommandOutput::Message(format!(
        "Variable '{}' added to workspace '{}'",
        args.var_name, args.workspace_name
    )))
}
