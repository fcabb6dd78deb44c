//! OAuth Client data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;
use crate::hcp::RelationshipId;

/// OAuth Client data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClient {
    pub id: String,
    pub attributes: OAuthClientAttributes,
    pub relationships: Option<OAuthClientRelationships>,
}

/// OAuth Client attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClientAttributes {
    pub name: Option<String>,
    #[serde(rename = "service-provider-display-name")]
    pub service_provider_display_name: Option<String>,
}

/// OAuth Client relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClientRelationships {
    #[serde(rename = "oauth-tokens")]
    pub oauth_tokens: Option<OAuthTokensRelationship>,
}

/// OAuth Tokens relationship (ordered array of tokens)
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthTokensRelationship {
    pub data: Option<Vec<RelationshipId>>,
}

/// Entry printed by `oauth_client list`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OAuthClientSummary {
    pub name: String,
    pub id: String,
}

impl TfeResource for OAuthClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.attributes
            .name
            .as_deref()
            .or(self.attributes.service_provider_display_name.as_deref())
            .unwrap_or(&self.id)
    }
}

impl OAuthClient {
    /// Get OAuth token IDs in the order the API returned them
    pub fn oauth_token_ids(&self) -> Vec<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.oauth_tokens.as_ref())
            .and_then(|ot| ot.data.as_ref())
            .map(|tokens| tokens.iter().map(|t| t.id.as_str()).collect())
            .unwrap_or_default()
    }

    /// The token used to authorize VCS bindings
    pub fn first_oauth_token_id(&self) -> Option<&str> {
        self.oauth_token_ids().into_iter().next()
    }
}

impl From<&OAuthClient> for OAuthClientSummary {
    fn from(client: &OAuthClient) -> Self {
        Self {
            name: client.name().to_string(),
            id: client.id.clone(),
        }
    }
}
