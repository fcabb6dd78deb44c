//! Variable set API operations

use futures::stream::{Stream, TryStreamExt};
use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::api_error;
use crate::hcp::traits::TfeResource;
use crate::hcp::TfeClient;

use super::models::VariableSet;

impl TfeClient {
    /// Stream all variable sets of an organization, page by page
    pub fn list_variable_sets<'a>(
        &'a self,
        org: &str,
    ) -> impl Stream<Item = Result<VariableSet>> + 'a {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::VARSETS
        );
        self.paginate(path, format!("variable sets for organization '{}'", org))
    }

    /// Find a variable set by exact name
    ///
    /// The API has no name filter for variable sets, so the listing is
    /// scanned in order. The first exact match wins and no further pages are
    /// requested once it is found.
    pub async fn find_variable_set_by_name(&self, org: &str, name: &str) -> Result<VariableSet> {
        let varsets = self.list_variable_sets(org);
        futures::pin_mut!(varsets);

        while let Some(varset) = varsets.try_next().await? {
            if varset.has_name(name) {
                debug!("Found variable set '{}' with ID {}", name, varset.id);
                return Ok(varset);
            }
        }

        Err(TfeError::NotFound(format!("variable set '{}'", name)))
    }

    /// Get a single variable set by ID, `None` if it does not exist
    pub async fn get_variable_set(&self, varset_id: &str) -> Result<Option<VariableSet>> {
        let path = format!("/{}/{}", api::VARSETS, urlencoding::encode(varset_id));
        self.fetch_resource_by_path::<VariableSet>(&path, &format!("variable set '{}'", varset_id))
            .await
    }

    /// Apply a variable set to workspaces
    ///
    /// Uses POST /varsets/:varset_id/relationships/workspaces
    pub async fn apply_variable_set_to_workspaces(
        &self,
        varset_id: &str,
        workspace_ids: &[&str],
    ) -> Result<()> {
        let url = format!(
            "{}/{}/{}/relationships/{}",
            self.base_url(),
            api::VARSETS,
            urlencoding::encode(varset_id),
            api::WORKSPACES
        );

        debug!(
            "Applying variable set {} to workspaces {:?}",
            varset_id, workspace_ids
        );

        let data: Vec<serde_json::Value> = workspace_ids
            .iter()
            .map(|id| serde_json::json!({ "type": "workspaces", "id": id }))
            .collect();
        let body = serde_json::json!({ "data": data });

        let response = self.send(self.post(&url).json(&body)).await?;

        if !response.status().is_success() {
            return Err(api_error(
                response,
                &format!("apply variable set '{}' to workspaces", varset_id),
            )
            .await);
        }

        Ok(())
    }
}
