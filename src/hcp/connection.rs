//! Connection facade over one authenticated session
//!
//! A `Connection` is built once per invocation from the immutable
//! [`Config`] and scopes every organization-level operation to the
//! configured organization. Names given by the user are resolved to remote
//! IDs on every call; nothing is cached between operations.

use futures::stream::TryStreamExt;
use log::{info, warn};

use crate::config::Config;
use crate::error::{Result, TfeError};
use crate::hcp::logs::{LogBundle, LogPhase};
use crate::hcp::oauth_clients::{OAuthClient, OAuthClientSummary};
use crate::hcp::runs::{Run, RunAction, RunSummary};
use crate::hcp::traits::TfeResource;
use crate::hcp::variable_sets::VariableSet;
use crate::hcp::variables::{NewVariable, Variable};
use crate::hcp::workspaces::{VcsRepoOptions, Workspace, WorkspaceSummary};
use crate::hcp::TfeClient;

/// Session handle plus organization scope
pub struct Connection {
    client: TfeClient,
    organization: Option<String>,
}

impl Connection {
    pub fn new(config: &Config) -> Self {
        Self {
            client: TfeClient::new(config),
            organization: config.organization.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_client(client: TfeClient, organization: Option<&str>) -> Self {
        Self {
            client,
            organization: organization.map(str::to_string),
        }
    }

    /// Organization this connection is scoped to
    pub fn org(&self) -> Result<&str> {
        self.organization.as_deref().ok_or_else(|| {
            TfeError::Config("organization is required (--tfe_org or TFE_ORG)".to_string())
        })
    }

    // Workspaces

    /// Names of all workspaces in the organization, in API order
    pub async fn list_workspaces(&self) -> Result<Vec<String>> {
        let org = self.org()?;
        self.client
            .list_workspaces(org)
            .map_ok(|ws| ws.name().to_string())
            .try_collect()
            .await
    }

    pub async fn create_workspace(&self, name: &str, working_directory: &str) -> Result<Workspace> {
        let org = self.org()?;
        let workspace = self
            .client
            .create_workspace(org, name, working_directory)
            .await?;
        info!("Created workspace '{}' ({})", name, workspace.id);
        Ok(workspace)
    }

    /// Resolve a workspace by exact name
    pub async fn read_workspace(&self, name: &str) -> Result<Workspace> {
        let org = self.org()?;
        self.client
            .get_workspace_by_name(org, name)
            .await?
            .ok_or_else(|| TfeError::NotFound(format!("workspace '{}'", name)))
    }

    /// Workspace summary as a JSON document
    pub async fn get_workspace(&self, name: &str) -> Result<Vec<u8>> {
        let workspace = self.read_workspace(name).await?;
        Ok(serde_json::to_vec(&WorkspaceSummary::from(&workspace))?)
    }

    /// Bind a workspace to a repository through an OAuth client
    ///
    /// The first OAuth token of the client authorizes the binding.
    pub async fn add_repo(
        &self,
        workspace_name: &str,
        oauth_client_id: &str,
        branch: &str,
        repo_identifier: &str,
    ) -> Result<Workspace> {
        let oauth_client = self.read_oauth_client(oauth_client_id).await?;
        let oauth_token_id = oauth_client.first_oauth_token_id().ok_or_else(|| {
            TfeError::NotFound(format!("OAuth token for client '{}'", oauth_client_id))
        })?;

        let workspace = self.read_workspace(workspace_name).await?;
        let vcs_repo = VcsRepoOptions {
            branch: branch.to_string(),
            identifier: repo_identifier.to_string(),
            oauth_token_id: oauth_token_id.to_string(),
        };

        let updated = self
            .client
            .update_workspace_vcs_repo(self.org()?, workspace.name(), &vcs_repo)
            .await?;
        info!(
            "Bound workspace '{}' to '{}' on branch '{}'",
            workspace_name, repo_identifier, branch
        );
        Ok(updated)
    }

    // OAuth clients

    /// All OAuth clients of the organization as a JSON array of `{name, id}`
    pub async fn list_oauth_clients(&self) -> Result<Vec<u8>> {
        let org = self.org()?;
        let clients: Vec<OAuthClientSummary> = self
            .client
            .list_oauth_clients(org)
            .map_ok(|client| OAuthClientSummary::from(&client))
            .try_collect()
            .await?;
        Ok(serde_json::to_vec(&clients)?)
    }

    pub async fn read_oauth_client(&self, id: &str) -> Result<OAuthClient> {
        self.client
            .get_oauth_client(id)
            .await?
            .ok_or_else(|| TfeError::NotFound(format!("OAuth client '{}'", id)))
    }

    // Runs

    /// Queue a run for a workspace and return its ID
    pub async fn create_run(&self, workspace_name: &str, message: Option<&str>) -> Result<String> {
        let workspace = self.read_workspace(workspace_name).await?;
        let run = self.client.create_run(&workspace.id, message).await?;
        info!("Queued run {} for workspace '{}'", run.id, workspace_name);
        Ok(run.id)
    }

    pub async fn discard_run(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.transition_run(run_id, RunAction::Discard, comment).await
    }

    pub async fn cancel_run(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.transition_run(run_id, RunAction::Cancel, comment).await
    }

    pub async fn apply_run(&self, run_id: &str, comment: Option<&str>) -> Result<()> {
        self.transition_run(run_id, RunAction::Apply, comment).await
    }

    /// Request a state transition; the service decides whether it is legal
    pub async fn transition_run(
        &self,
        run_id: &str,
        action: RunAction,
        comment: Option<&str>,
    ) -> Result<()> {
        self.client.run_action(run_id, action, comment).await?;
        info!("Run {} {}", run_id, action.past_tense());
        Ok(())
    }

    /// Runs of a workspace projected to `{id, status, created_at}`
    pub async fn list_runs(&self, workspace_name: &str) -> Result<Vec<RunSummary>> {
        let workspace = self.read_workspace(workspace_name).await?;
        self.client
            .list_runs(&workspace.id)
            .map_ok(|run| RunSummary::from(&run))
            .try_collect()
            .await
    }

    pub async fn read_run(&self, run_id: &str) -> Result<Run> {
        self.client
            .get_run_by_id(run_id)
            .await?
            .ok_or_else(|| TfeError::NotFound(format!("run '{}'", run_id)))
    }

    /// Structured plan output of a run, verbatim
    pub async fn read_plan_output(&self, run_id: &str) -> Result<Vec<u8>> {
        let run = self.read_run(run_id).await?;
        let plan_id = run
            .plan_id()
            .ok_or_else(|| TfeError::NotFound(format!("plan of run '{}'", run_id)))?;
        self.client.get_plan_json_output(plan_id).await
    }

    /// Full apply record of a run as JSON
    pub async fn read_apply_output(&self, run_id: &str) -> Result<Vec<u8>> {
        let run = self.read_run(run_id).await?;
        let apply_id = run
            .apply_id()
            .ok_or_else(|| TfeError::NotFound(format!("apply of run '{}'", run_id)))?;
        let apply = self.client.get_apply(apply_id).await?;
        Ok(serde_json::to_vec(&apply)?)
    }

    /// Logs of one phase of a run
    pub async fn read_logs(&self, run_id: &str, phase: LogPhase) -> Result<LogBundle> {
        let run = self.read_run(run_id).await?;
        let logs = self.client.fetch_run_log(&run, phase).await?;
        Ok(LogBundle {
            id: run_id.to_string(),
            logs,
        })
    }

    /// Logs selected by a free-form phase tag
    ///
    /// An unrecognized tag still resolves the run, then yields an empty log.
    pub async fn read_logs_tagged(&self, run_id: &str, phase: &str) -> Result<LogBundle> {
        match phase.parse::<LogPhase>() {
            Ok(phase) => self.read_logs(run_id, phase).await,
            Err(e) => {
                self.read_run(run_id).await?;
                warn!("{}, returning empty logs for run {}", e, run_id);
                Ok(LogBundle {
                    id: run_id.to_string(),
                    logs: String::new(),
                })
            }
        }
    }

    // Variables

    /// Create a variable on a workspace resolved by name
    pub async fn add_variable(&self, workspace_name: &str, variable: &NewVariable) -> Result<Variable> {
        let workspace = self.read_workspace(workspace_name).await?;
        let created = self.client.create_variable(&workspace.id, variable).await?;
        info!(
            "Added {} variable '{}' to workspace '{}'",
            variable.category, variable.key, workspace_name
        );
        Ok(created)
    }

    pub async fn find_variable_set(&self, name: &str) -> Result<VariableSet> {
        let org = self.org()?;
        self.client.find_variable_set_by_name(org, name).await
    }

    /// Attach a variable set to a workspace, both resolved by name
    ///
    /// Returns the variable set as re-read after the association.
    pub async fn assign_variable_set(
        &self,
        workspace_name: &str,
        variable_set_name: &str,
    ) -> Result<VariableSet> {
        let workspace = self.read_workspace(workspace_name).await?;
        let varset = self.find_variable_set(variable_set_name).await?;
        self.client
            .apply_variable_set_to_workspaces(&varset.id, &[workspace.id.as_str()])
            .await?;
        info!(
            "Assigned variable set '{}' to workspace '{}'",
            variable_set_name, workspace_name
        );
        self.client
            .get_variable_set(&varset.id)
            .await?
            .ok_or_else(|| TfeError::NotFound(format!("variable set '{}'", variable_set_name)))
    }
}
