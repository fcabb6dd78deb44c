//! Workspace command definitions and arguments

use clap::{Args, Subcommand};

use super::common::WorkspaceNameArgs;

/// Verbs for the 'workspace' noun
#[derive(Subcommand, Debug)]
pub enum WorkspaceCommand {
    /// List workspace names, one per line
    List,

    /// Create a workspace (auto-apply disabled)
    Create(CreateWorkspaceArgs),

    /// Show name, working directory, VCS binding and lock state
    Get(WorkspaceNameArgs),

    /// Bind a workspace to a VCS repository through an OAuth client
    #[command(name = "add_repo")]
    AddRepo(AddRepoArgs),

    /// Add a Terraform variable to a workspace
    #[command(name = "add_tfe_var")]
    AddTfeVar(VariableArgs),

    /// Add an environment variable to a workspace (never HCL)
    #[command(name = "add_env_var")]
    AddEnvVar(VariableArgs),

    /// Queue a plan for a workspace
    Plan(PlanArgs),

    /// Attach a variable set to a workspace
    #[command(name = "assign_variable_set")]
    AssignVariableSet(AssignVariableSetArgs),
}

/// Arguments for 'workspace create'
#[derive(Args, Debug)]
pub struct CreateWorkspaceArgs {
    /// Workspace name
    #[arg(long = "workspace_name")]
    pub workspace_name: String,

    /// Working directory, relative to the repository root
    #[arg(long = "work_dir", default_value = "")]
    pub work_dir: String,
}

/// Arguments for 'workspace add_repo'
#[derive(Args, Debug)]
pub struct AddRepoArgs {
    /// Workspace name
    #[arg(long = "workspace_name")]
    pub workspace_name: String,

    /// OAuth client ID (oc-xxx); its first OAuth token authorizes the binding
    #[arg(long = "oauth_client_id")]
    pub oauth_client_id: String,

    /// Repository branch
    #[arg(long = "branch")]
    pub branch: String,

    /// Repository in format organization/repository
    #[arg(long = "repo_url")]
    pub repo_url: String,
}

/// Arguments for 'workspace add_tfe_var' and 'workspace add_env_var'
#[derive(Args, Debug)]
pub struct VariableArgs {
    /// Workspace name
    #[arg(long = "workspace_name")]
    pub workspace_name: String,

    /// Variable name
    #[arg(long = "var_name")]
    pub var_name: String,

    /// Variable value
    #[arg(long = "var_value", default_value = "")]
    pub var_value: String,

    /// Variable description
    #[arg(long = "var_description", default_value = "")]
    pub var_description: String,

    /// Parse the value as HCL (ignored for environment variables)
    #[arg(long = "is_hcl", default_value_t = false)]
    pub is_hcl: bool,

    /// Mark the variable sensitive (write-only)
    #[arg(long = "is_sensitive", default_value_t = false)]
    pub is_sensitive: bool,
}

/// Arguments for 'workspace plan'
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Workspace name
    #[arg(long = "workspace_name")]
    pub workspace_name: String,

    /// Message attached to the run
    #[arg(long = "message")]
    pub message: Option<String>,
}

/// Arguments for 'workspace assign_variable_set'
#[derive(Args, Debug)]
pub struct AssignVariableSetArgs {
    /// Workspace name
    #[arg(long = "workspace_name")]
    pub workspace_name: String,

    /// Variable set name (exact, case-sensitive)
    #[arg(long = "variable_set")]
    pub variable_set: String,
}
