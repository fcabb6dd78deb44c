//! Variable set module

mod api;
mod models;

pub use models::{VariableSet, VariableSetAttributes, VariableSetSummary};
