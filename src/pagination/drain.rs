//! Page draining loop
//!
//! Requests `page=1,2,...` one at a time and stops once the server's own
//! `current_page` equals its `last_page`. The counters are overwritten from
//! each response, so a server that clamps or renumbers pages still ends the
//! loop. Inconsistent metadata is neither detected nor repaired.

use super::types::{PageMetadata, PaginationState};
use crate::error::{Error, Result};
use crate::transport::Transport;
use bytes::Bytes;
use tracing::{debug, info};

/// Drains one paginated endpoint through a [`Transport`]
pub struct PageDrain<'a> {
    transport: &'a dyn Transport,
    endpoint: String,
    page_size: i64,
}

impl<'a> PageDrain<'a> {
    /// Create a drain for `endpoint` requesting `page_size` items per page.
    ///
    /// The page size is sent verbatim, including zero or negative values.
    pub fn new(transport: &'a dyn Transport, endpoint: impl Into<String>, page_size: i64) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            page_size,
        }
    }

    /// URL for a given page number
    pub fn page_url(&self, page: i64) -> String {
        format!("{}?limit={}&page={}", self.endpoint, self.page_size, page)
    }

    /// Fetch every page, handing each body to `handle`.
    ///
    /// `handle` decodes the page, merges its items wherever the caller keeps
    /// them, and returns the page's metadata. The first transport or decode
    /// error stops the loop and is returned. On success, returns the number
    /// of pages fetched.
    pub async fn run<F>(&self, mut handle: F) -> Result<u32>
    where
        F: FnMut(Bytes) -> Result<PageMetadata> + Send,
    {
        let mut state = PaginationState::new();

        while !state.is_done() {
            let page = state.next_page();
            let url = self.page_url(page);
            debug!("Fetching page {}: {}", page, url);

            let body = self.transport.get(&url).await?;
            let meta = handle(body).map_err(|e| match e {
                Error::Decode { message } => {
                    Error::decode(format!("page {page} of {}: {message}", self.endpoint))
                }
                other => other,
            })?;

            debug!(
                "Page {} reported current_page={} last_page={}",
                page, meta.current_page, meta.last_page
            );
            state.update(&meta);
        }

        info!(
            "Drained {} page(s) from {}",
            state.pages_fetched, self.endpoint
        );
        Ok(state.pages_fetched)
    }
}

impl std::fmt::Debug for PageDrain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDrain")
            .field("endpoint", &self.endpoint)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
