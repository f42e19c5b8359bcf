//! catfact.ninja API client

use crate::decode::decode_json;
use crate::error::Result;
use crate::models::{Breed, Fact};
use crate::pagination::{Page, PageDrain};
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Base URL used by [`CatFactsClient::new`]
pub const DEFAULT_BASE_URL: &str = "https://catfact.ninja";

/// Items requested per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: i64 = 10;

const RANDOM_FACT_ENDPOINT: &str = "fact";
const LIST_BREEDS_ENDPOINT: &str = "breeds";
const LIST_FACTS_ENDPOINT: &str = "facts";

/// Client for the catfact.ninja API
///
/// Holds configuration only. Setters take and return the client by value so
/// they chain:
///
/// ```rust,ignore
/// let facts = CatFactsClient::new()
///     .with_page_size(100)
///     .list_all_facts()
///     .await?;
/// ```
///
/// Larger page sizes mean fewer round trips; the list operations are not
/// streaming and return only once every page has arrived.
#[derive(Clone)]
pub struct CatFactsClient {
    base_url: Url,
    page_size: i64,
    transport: Arc<dyn Transport>,
}

impl CatFactsClient {
    /// Create a client for [`DEFAULT_BASE_URL`].
    ///
    /// # Panics
    ///
    /// Never in practice: the default URL is a valid constant.
    pub fn new() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::from_url(base_url)
    }

    /// Create a client from a base URL string
    pub fn from_url_str(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::from_url(base_url))
    }

    /// Create a client from an already parsed base URL
    pub fn from_url(base_url: Url) -> Self {
        Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Set the number of items requested per page.
    ///
    /// Not validated; zero or negative values go to the server as-is.
    #[must_use]
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Replace the transport, e.g. with a stub in tests
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// The configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured page size
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Fetch one random fact from `/fact`
    pub async fn get_random_fact(&self) -> Result<Fact> {
        let url = self.endpoint_url(RANDOM_FACT_ENDPOINT);
        debug!("Fetching random fact: {}", url);

        let body = self.transport.get(&url).await?;
        decode_json(&body, "fact")
    }

    /// Fetch every breed from `/breeds`
    pub async fn list_all_breeds(&self) -> Result<Vec<Breed>> {
        self.list_all(LIST_BREEDS_ENDPOINT).await
    }

    /// Fetch every fact from `/facts`
    pub async fn list_all_facts(&self) -> Result<Vec<Fact>> {
        self.list_all(LIST_FACTS_ENDPOINT).await
    }

    /// Drain a list endpoint, collecting items in page order
    async fn list_all<T>(&self, endpoint: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();

        PageDrain::new(
            self.transport.as_ref(),
            self.endpoint_url(endpoint),
            self.page_size,
        )
        .run(|body| {
            let page: Page<T> = decode_json(&body, endpoint)?;
            let (meta, data) = page.into_parts();
            items.extend(data);
            Ok(meta)
        })
        .await?;

        Ok(items)
    }

    /// Join the base URL and an endpoint path
    fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/{endpoint}")
    }
}

impl Default for CatFactsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatFactsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatFactsClient")
            .field("base_url", &self.base_url.as_str())
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
