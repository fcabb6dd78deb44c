//! Run API operations

use futures::stream::Stream;
use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::api_error;
use crate::hcp::{DataResponse, TfeClient};

use super::models::{Apply, Plan, Run, RunAction};

impl TfeClient {
    /// Stream the runs of a workspace in the order the API returns them
    pub fn list_runs<'a>(&'a self, workspace_id: &str) -> impl Stream<Item = Result<Run>> + 'a {
        let path = format!(
            "/{}/{}/{}",
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::RUNS
        );
        self.paginate(path, format!("runs for workspace '{}'", workspace_id))
    }

    /// Get a single run by ID, `None` if it does not exist
    pub async fn get_run_by_id(&self, run_id: &str) -> Result<Option<Run>> {
        let path = format!("/{}/{}", api::RUNS, urlencoding::encode(run_id));
        self.fetch_resource_by_path::<Run>(&path, &format!("run '{}'", run_id))
            .await
    }

    /// Queue a new run (plan stage) for a workspace
    ///
    /// Sends POST /runs with the workspace relationship
    pub async fn create_run(&self, workspace_id: &str, message: Option<&str>) -> Result<Run> {
        let url = format!("{}/{}", self.base_url(), api::RUNS);

        debug!("Creating run for workspace: {}", workspace_id);

        let mut attributes = serde_json::Map::new();
        if let Some(message) = message {
            attributes.insert("message".to_string(), message.into());
        }

        let body = serde_json::json!({
            "data": {
                "type": "runs",
                "attributes": attributes,
                "relationships": {
                    "workspace": {
                        "data": {
                            "type": "workspaces",
                            "id": workspace_id
                        }
                    }
                }
            }
        });

        let response = self.send(self.post(&url).json(&body)).await?;

        match response.status().as_u16() {
            200 | 201 => {
                let created: DataResponse<Run> = response.json().await?;
                Ok(created.data)
            }
            _ => {
                Err(api_error(response, &format!("create run for workspace '{}'", workspace_id))
                    .await)
            }
        }
    }

    /// Request a state transition on a run
    ///
    /// Sends POST /runs/:run_id/actions/{apply,discard,cancel}. The service
    /// rejects transitions that are not legal for the run's current status
    /// (usually 409), which is returned as an API error.
    pub async fn run_action(
        &self,
        run_id: &str,
        action: RunAction,
        comment: Option<&str>,
    ) -> Result<()> {
        let url = format!(
            "{}/{}/{}/actions/{}",
            self.base_url(),
            api::RUNS,
            urlencoding::encode(run_id),
            action.as_str()
        );

        debug!("Requesting '{}' for run: {}", action, run_id);

        let mut request = self.post(&url);
        if let Some(comment) = comment {
            request = request.json(&serde_json::json!({ "comment": comment }));
        }

        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(api_error(response, &format!("{} run '{}'", action, run_id)).await);
        }

        Ok(())
    }

    /// Get a plan by ID
    pub async fn get_plan(&self, plan_id: &str) -> Result<Plan> {
        let path = format!("/{}/{}", api::PLANS, urlencoding::encode(plan_id));
        self.fetch_resource_by_path::<Plan>(&path, &format!("plan '{}'", plan_id))
            .await?
            .ok_or_else(|| TfeError::NotFound(format!("plan '{}'", plan_id)))
    }

    /// Get an apply by ID
    pub async fn get_apply(&self, apply_id: &str) -> Result<Apply> {
        let path = format!("/{}/{}", api::APPLIES, urlencoding::encode(apply_id));
        self.fetch_resource_by_path::<Apply>(&path, &format!("apply '{}'", apply_id))
            .await?
            .ok_or_else(|| TfeError::NotFound(format!("apply '{}'", apply_id)))
    }

    /// Get the structured (JSON) plan output verbatim
    ///
    /// The API answers with a redirect to a temporary download URL, which
    /// reqwest follows.
    pub async fn get_plan_json_output(&self, plan_id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/{}/{}/json-output",
            self.base_url(),
            api::PLANS,
            urlencoding::encode(plan_id)
        );

        debug!("Fetching JSON output for plan: {}", url);

        let response = self.send(self.get(&url)).await?;

        if !response.status().is_success() {
            return Err(
                api_error(response, &format!("fetch JSON output of plan '{}'", plan_id)).await,
            );
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn run_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "runs",
            "attributes": {
                "status": status,
                "created-at": "2025-01-01T10:00:00.000Z"
            }
        })
    }

    #[tokio::test]
    async fn test_list_runs_follows_pages() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-test123/runs"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [run_json("run-1", "applied"), run_json("run-2", "planned")],
                "meta": {"pagination": {"current-page": 1, "next-page": 2}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-test123/runs"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [run_json("run-3", "pending")],
                "meta": {"pagination": {"current-page": 2, "next-page": null}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let runs: Vec<Run> = client.list_runs("ws-test123").try_collect().await.unwrap();
        let ids: Vec<&str> = runs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["run-1", "run-2", "run-3"]);
    }

    #[tokio::test]
    async fn test_get_run_by_id_success() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/runs/run-abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": run_json("run-abc123", "applied")
            })))
            .mount(&mock_server)
            .await;

        let run = client.get_run_by_id("run-abc123").await.unwrap().unwrap();
        assert_eq!(run.id, "run-abc123");
        assert_eq!(run.status(), "applied");
    }

    #[tokio::test]
    async fn test_get_run_by_id_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/runs/run-notfound"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        assert!(client.get_run_by_id("run-notfound").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_run_sends_workspace_and_message() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "runs",
                    "attributes": {"message": "nightly"},
                    "relationships": {
                        "workspace": {"data": {"type": "workspaces", "id": "ws-abc"}}
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": run_json("run-new", "pending")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let run = client.create_run("ws-abc", Some("nightly")).await.unwrap();
        assert_eq!(run.id, "run-new");
    }

    #[tokio::test]
    async fn test_create_run_without_message() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "runs",
                    "attributes": {},
                    "relationships": {
                        "workspace": {"data": {"type": "workspaces", "id": "ws-abc"}}
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": run_json("run-new", "pending")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client.create_run("ws-abc", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_action_posts_comment() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs/run-abc123/actions/discard"))
            .and(body_json(serde_json::json!({"comment": "not needed"})))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client
            .run_action("run-abc123", RunAction::Discard, Some("not needed"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_action_cancel_without_comment() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs/run-abc123/actions/cancel"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client
            .run_action("run-abc123", RunAction::Cancel, None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_run_action_rejected_transition() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/runs/run-abc123/actions/apply"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_string(r#"{"errors":[{"status":"409","title":"transition not allowed"}]}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client
            .run_action("run-abc123", RunAction::Apply, None)
            .await
            .unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 409);
                assert!(message.contains("transition not allowed"));
                assert!(message.contains("apply run 'run-abc123'"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_plan_json_output_passthrough() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let body = r#"{"format_version":"1.2","resource_changes":[]}"#;

        Mock::given(method("GET"))
            .and(path("/plans/plan-abc/json-output"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let bytes = client.get_plan_json_output("plan-abc").await.unwrap();
        assert_eq!(bytes, body.as_bytes());
    }

    #[tokio::test]
    async fn test_get_plan_json_output_follows_redirect() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/plans/plan-abc/json-output"))
            .respond_with(
                ResponseTemplate::new(307)
                    .insert_header("Location", format!("{}/archivist/json", mock_server.uri())),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/archivist/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"planned_values\":{}}"))
            .mount(&mock_server)
            .await;

        let bytes = client.get_plan_json_output("plan-abc").await.unwrap();
        assert_eq!(bytes, b"{\"planned_values\":{}}");
    }

    #[tokio::test]
    async fn test_get_apply_success() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/applies/apply-xyz789"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "id": "apply-xyz789",
                    "type": "applies",
                    "attributes": {
                        "status": "finished",
                        "resource-additions": 3,
                        "log-read-url": "https://archivist.terraform.io/v1/object/xyz789"
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let apply = client.get_apply("apply-xyz789").await.unwrap();
        assert_eq!(apply.id, "apply-xyz789");
        assert_eq!(apply.status(), "finished");
        assert_eq!(
            apply.log_read_url(),
            Some("https://archivist.terraform.io/v1/object/xyz789")
        );
    }

    #[tokio::test]
    async fn test_get_plan_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/plans/plan-missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client.get_plan("plan-missing").await.unwrap_err();
        assert!(matches!(err, TfeError::NotFound(_)));
    }
}
