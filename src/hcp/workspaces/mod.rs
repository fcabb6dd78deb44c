//! Workspace module

mod api;
mod commands;
mod models;

pub use commands::run_workspace_command;
pub use models::{VcsRepo, VcsRepoOptions, Workspace, WorkspaceAttributes, WorkspaceSummary};
