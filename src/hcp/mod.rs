//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform
//! Enterprise API: resource readers, run lifecycle, logs and pagination.

mod client;
pub mod connection;
pub mod logs;
pub mod oauth_clients;
pub mod pager;
pub mod runs;
pub mod traits;
pub mod variable_sets;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use connection::Connection;
pub use logs::{LogBundle, LogPhase, LogReader};
pub use oauth_clients::{run_oauth_client_command, OAuthClient, OAuthClientSummary};
pub use pager::{paginate, Page};
pub use runs::{run_run_command, Apply, Plan, Run, RunSummary};
pub use traits::{ApiListResponse, PaginatedResponse, TfeResource};
pub use variable_sets::{VariableSet, VariableSetSummary};
pub use variables::{NewVariable, Variable, VariableCategory};
pub use workspaces::{run_workspace_command, VcsRepoOptions, Workspace, WorkspaceSummary};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details; only `next-page` drives iteration
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "next-page")]
    pub next_page: Option<u32>,
}

/// Response wrapper for a single resource (`{"data": {...}}`)
#[derive(Deserialize, Debug)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Generic relationship data
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
}

impl RelationshipData {
    /// ID of the related resource, if the relationship is populated
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}
