//! Sequential cursor-following pagination
//!
//! Listings are exposed as lazy streams. Page 1 is requested first; every
//! following request uses the `next-page` value the previous page reported,
//! and the stream ends when that value is null or zero. Nothing is fetched
//! ahead of the consumer, so a caller that stops early stops the requests.

use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{ApiListResponse, PaginatedResponse};
use crate::hcp::TfeClient;

/// One page of items plus the cursor to the next page
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    /// Build a page from any paginated response
    pub fn from_response<R: PaginatedResponse<T>>(response: R) -> Self {
        let next_page = response.next_page();
        Self {
            items: response.into_data(),
            next_page,
        }
    }
}

/// Flatten a page-fetching function into a lazy stream of items
///
/// `fetch_page` receives the page number to request. Any error ends the
/// stream after being yielded once.
pub fn paginate<'a, T, F, Fut>(fetch_page: F) -> impl Stream<Item = Result<T>> + 'a
where
    T: 'a,
    F: FnMut(u32) -> Fut + 'a,
    Fut: Future<Output = Result<Page<T>>> + 'a,
{
    stream::try_unfold(
        (fetch_page, Some(1u32)),
        |(mut fetch_page, cursor)| async move {
            let Some(page_number) = cursor else {
                return Ok::<_, TfeError>(None);
            };
            let page = fetch_page(page_number).await?;
            let next = page.next_page.filter(|n| *n != 0);
            Ok(Some((page.items, (fetch_page, next))))
        },
    )
    .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
    .try_flatten()
}

impl TfeClient {
    /// Stream every item of a paginated API listing
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/varsets")
    /// * `error_context` - Context for error messages (e.g., "variable sets for 'my-org'")
    pub fn paginate<'a, T>(
        &'a self,
        path: String,
        error_context: String,
    ) -> impl Stream<Item = Result<T>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        paginate(move |page_number| {
            let path = path.clone();
            let error_context = error_context.clone();
            async move { self.fetch_page::<T>(&path, page_number, &error_context).await }
        })
    }

    /// Fetch a single page of a listing
    async fn fetch_page<T>(&self, path: &str, page_number: u32, error_context: &str) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}{}page[size]={}&page[number]={}",
            self.base_url(),
            path,
            separator,
            api::DEFAULT_PAGE_SIZE,
            page_number
        );

        debug!("Fetching page {} from: {}", page_number, url);

        let response = self.send(self.get(&url)).await?;
        let page_context = format!("fetch {} (page {})", error_context, page_number);
        let resp: ApiListResponse<T> = self.parse_api_response(response, &page_context).await?;
        let page = Page::from_response(resp);

        debug!(
            "Page {} returned {} items, next page: {:?}",
            page_number,
            page.items.len(),
            page.next_page
        );
        Ok(page)
    }
}
