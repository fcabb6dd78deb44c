//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    #[serde(rename = "working-directory")]
    pub working_directory: Option<String>,

    pub locked: Option<bool>,

    #[serde(rename = "vcs-repo")]
    pub vcs_repo: Option<VcsRepo>,
}

/// VCS binding of a workspace as reported by the API
#[derive(Deserialize, Debug, Clone)]
pub struct VcsRepo {
    pub branch: Option<String>,
    pub identifier: Option<String>,
    #[serde(rename = "oauth-token-id")]
    pub oauth_token_id: Option<String>,
}

/// VCS binding sent when attaching a repository to a workspace
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VcsRepoOptions {
    pub branch: String,
    /// Repository in `organization/repository` form
    pub identifier: String,
    #[serde(rename = "oauth-token-id")]
    pub oauth_token_id: String,
}

/// Workspace projection printed by `workspace get`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSummary {
    pub name: String,
    pub working_directory: String,
    pub branch: String,
    pub repo_id: String,
    pub locked: bool,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Get working directory, defaulting to empty string (repository root)
    pub fn working_directory(&self) -> &str {
        self.attributes.working_directory.as_deref().unwrap_or("")
    }

    /// Check if workspace is locked
    pub fn is_locked(&self) -> bool {
        self.attributes.locked.unwrap_or(false)
    }

    /// VCS branch, empty when the workspace has no repository
    pub fn branch(&self) -> &str {
        self.attributes
            .vcs_repo
            .as_ref()
            .and_then(|v| v.branch.as_deref())
            .unwrap_or("")
    }

    /// VCS repository identifier, empty when the workspace has no repository
    pub fn repo_identifier(&self) -> &str {
        self.attributes
            .vcs_repo
            .as_ref()
            .and_then(|v| v.identifier.as_deref())
            .unwrap_or("")
    }
}

impl From<&Workspace> for WorkspaceSummary {
    fn from(ws: &Workspace) -> Self {
        Self {
            name: ws.name().to_string(),
            working_directory: ws.working_directory().to_string(),
            branch: ws.branch().to_string(),
            repo_id: ws.repo_identifier().to_string(),
            locked: ws.is_locked(),
        }
    }
}
