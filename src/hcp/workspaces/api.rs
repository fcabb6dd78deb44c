//! Workspace API operations

use futures::stream::Stream;
use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::api_error;
use crate::hcp::{DataResponse, TfeClient};

use super::models::{VcsRepoOptions, Workspace};

/// API path of a workspace addressed by organization and name
fn workspace_path(org: &str, name: &str) -> String {
    format!(
        "/{}/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES,
        urlencoding::encode(name)
    )
}

/// Parse a `{"data": {...}}` document holding one workspace
fn parse_workspace(body: &[u8]) -> Result<Workspace> {
    serde_json::from_slice::<DataResponse<Workspace>>(body)
        .map(|document| document.data)
        .map_err(|e| TfeError::Json(format!("Failed to parse workspace response: {}", e)))
}

impl TfeClient {
    /// Stream all workspaces of an organization, page by page
    pub fn list_workspaces<'a>(&'a self, org: &str) -> impl Stream<Item = Result<Workspace>> + 'a {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        self.paginate(path, format!("workspaces for organization '{}'", org))
    }

    /// Get a single workspace by name (requires org)
    pub async fn get_workspace_by_name(&self, org: &str, name: &str) -> Result<Option<Workspace>> {
        self.fetch_resource_by_path::<Workspace>(
            &workspace_path(org, name),
            &format!("workspace '{}'", name),
        )
        .await
    }

    /// Create a workspace with auto-apply disabled
    pub async fn create_workspace(
        &self,
        org: &str,
        name: &str,
        working_directory: &str,
    ) -> Result<Workspace> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );

        debug!("Creating workspace '{}' in organization '{}'", name, org);

        let body = serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": {
                    "name": name,
                    "auto-apply": false,
                    "working-directory": working_directory
                }
            }
        });

        let response = self.send(self.post(&url).json(&body)).await?;

        match response.status().as_u16() {
            200 | 201 => parse_workspace(&response.bytes().await?),
            _ => Err(api_error(response, &format!("create workspace '{}'", name)).await),
        }
    }

    /// Bind a workspace to a VCS repository
    ///
    /// Uses PATCH /organizations/:org/workspaces/:name with a `vcs-repo` attribute
    pub async fn update_workspace_vcs_repo(
        &self,
        org: &str,
        name: &str,
        vcs_repo: &VcsRepoOptions,
    ) -> Result<Workspace> {
        let url = format!("{}{}", self.base_url(), workspace_path(org, name));

        debug!(
            "Binding workspace '{}' to repository '{}' (branch '{}')",
            name, vcs_repo.identifier, vcs_repo.branch
        );

        let body = serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": {
                    "vcs-repo": vcs_repo
                }
            }
        });

        let response = self.send(self.patch(&url).json(&body)).await?;

        match response.status().as_u16() {
            200 => parse_workspace(&response.bytes().await?),
            404 => Err(TfeError::NotFound(format!("workspace '{}'", name))),
            _ => Err(api_error(response, &format!("update workspace '{}'", name)).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::traits::TfeResource;
    use futures::TryStreamExt;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "workspaces",
            "attributes": {
                "name": name,
                "working-directory": "",
                "auto-apply": false,
                "locked": false
            }
        })
    }

    #[tokio::test]
    async fn test_list_workspaces_two_pages() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [workspace_json("ws-1", "alpha"), workspace_json("ws-2", "beta")],
                "meta": {"pagination": {"current-page": 1, "next-page": 2}}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [workspace_json("ws-3", "gamma")],
                "meta": {"pagination": {"current-page": 2, "next-page": null}}
            })))
            .mount(&mock_server)
            .await;

        let workspaces: Vec<Workspace> = client.list_workspaces("my-org").try_collect().await.unwrap();

        let names: Vec<&str> = workspaces.iter().map(|w| w.name()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_get_workspace_by_name_success() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/infra-prod"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": workspace_json("ws-abc123", "infra-prod")
            })))
            .mount(&mock_server)
            .await;

        let workspace = client
            .get_workspace_by_name("my-org", "infra-prod")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(workspace.id, "ws-abc123");
        assert_eq!(workspace.name(), "infra-prod");
    }

    #[tokio::test]
    async fn test_get_workspace_by_name_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/workspaces/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client.get_workspace_by_name("my-org", "missing").await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_workspace_sends_expected_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/my-org/workspaces"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {
                        "name": "infra-dev",
                        "auto-apply": false,
                        "working-directory": "stacks/dev"
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": workspace_json("ws-new", "infra-dev")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let workspace = client
            .create_workspace("my-org", "infra-dev", "stacks/dev")
            .await
            .unwrap();
        assert_eq!(workspace.id, "ws-new");
    }

    #[tokio::test]
    async fn test_create_workspace_validation_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/my-org/workspaces"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"errors":[{"detail":"Name has already been taken"}]}"#),
            )
            .mount(&mock_server)
            .await;

        let err = client
            .create_workspace("my-org", "infra-dev", "")
            .await
            .unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("already been taken"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_workspace_vcs_repo() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/organizations/my-org/workspaces/infra-prod"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "workspaces",
                    "attributes": {
                        "vcs-repo": {
                            "branch": "main",
                            "identifier": "acme/infra",
                            "oauth-token-id": "ot-first"
                        }
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": workspace_json("ws-abc123", "infra-prod")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = VcsRepoOptions {
            branch: "main".to_string(),
            identifier: "acme/infra".to_string(),
            oauth_token_id: "ot-first".to_string(),
        };
        let workspace = client
            .update_workspace_vcs_repo("my-org", "infra-prod", &options)
            .await
            .unwrap();
        assert_eq!(workspace.id, "ws-abc123");
    }
}
