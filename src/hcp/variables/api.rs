//! Variable API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::client::api_error;
use crate::hcp::{DataResponse, TfeClient};

use super::models::{NewVariable, Variable};

impl TfeClient {
    /// Create a variable on a workspace
    ///
    /// Uses POST /workspaces/:workspace_id/vars
    pub async fn create_variable(&self, workspace_id: &str, variable: &NewVariable) -> Result<Variable> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::VARS
        );

        debug!(
            "Creating {} variable '{}' in workspace {}",
            variable.category, variable.key, workspace_id
        );

        let body = serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": variable
            }
        });

        let response = self.send(self.post(&url).json(&body)).await?;

        match response.status().as_u16() {
            200 | 201 => {
                let body = response.bytes().await?;
                serde_json::from_slice::<DataResponse<Variable>>(&body)
                    .map(|document| document.data)
                    .map_err(|e| TfeError::Json(format!("Failed to parse variable response: {}", e)))
            }
            _ => {
                Err(api_error(response, &format!("create variable '{}'", variable.key)).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::variables::VariableCategory;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_env_variable_sends_hcl_false() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-abc/vars"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "vars",
                    "attributes": {
                        "key": "TF_LOG",
                        "value": "DEBUG",
                        "description": "",
                        "hcl": false,
                        "sensitive": false,
                        "category": "env"
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {
                    "id": "var-123",
                    "type": "vars",
                    "attributes": {
                        "key": "TF_LOG",
                        "value": "DEBUG",
                        "category": "env",
                        "hcl": false,
                        "sensitive": false
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let var = NewVariable::new("TF_LOG", "DEBUG", "", true, false, VariableCategory::Env);
        let created = client.create_variable("ws-abc", &var).await.unwrap();
        assert_eq!(created.id, "var-123");
    }

    #[tokio::test]
    async fn test_create_variable_validation_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-abc/vars"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"errors":[{"detail":"Key has already been taken"}]}"#),
            )
            .mount(&mock_server)
            .await;

        let var = NewVariable::new("region", "eu", "", false, false, VariableCategory::Terraform);
        let err = client.create_variable("ws-abc", &var).await.unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("already been taken"));
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }
}
