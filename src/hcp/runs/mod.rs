//! Runs module

mod api;
mod commands;
mod models;

pub use commands::run_run_command;
pub use models::{
    Apply, ApplyAttributes, Plan, PlanAttributes, Run, RunAction, RunAttributes,
    RunRelationships, RunSummary,
};
