//! OAuth Client API operations

use futures::stream::Stream;

use crate::config::api;
use crate::error::Result;
use crate::hcp::TfeClient;

use super::models::OAuthClient;

impl TfeClient {
    /// Stream all OAuth clients of an organization, page by page
    pub fn list_oauth_clients<'a>(
        &'a self,
        org: &str,
    ) -> impl Stream<Item = Result<OAuthClient>> + 'a {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::OAUTH_CLIENTS
        );
        self.paginate(path, format!("OAuth clients for organization '{}'", org))
    }

    /// Get a single OAuth client by ID, `None` if it does not exist
    pub async fn get_oauth_client(&self, client_id: &str) -> Result<Option<OAuthClient>> {
        let path = format!("/{}/{}", api::OAUTH_CLIENTS, urlencoding::encode(client_id));
        self.fetch_resource_by_path::<OAuthClient>(&path, &format!("OAuth client '{}'", client_id))
            .await
    }
}
