//! Workspace variable module

mod api;
mod models;

pub use models::{NewVariable, Variable, VariableAttributes, VariableCategory};
