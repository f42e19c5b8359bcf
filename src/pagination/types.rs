//! Pagination types
//!
//! The page envelope shared by every list endpoint, and the two-counter
//! state the drain loop runs on.

use serde::{Deserialize, Deserializer, Serialize};

/// Position metadata the server attaches to every page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Total number of items in the collection
    #[serde(default)]
    pub total: u64,
    /// Items per page. The server sends this as text; it is kept as-is and
    /// never used for control flow.
    #[serde(default, deserialize_with = "string_or_number")]
    pub per_page: String,
    /// Page this response represents (1-based)
    pub current_page: i64,
    /// Last page of the collection (1-based)
    pub last_page: i64,
    /// Index of the first item on this page, null on empty pages
    #[serde(default)]
    pub from: Option<u64>,
    /// Index of the last item on this page, null on empty pages
    #[serde(default)]
    pub to: Option<u64>,
    /// Link to the next page. Ignores `limit`; do not follow.
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// Link to the previous page. Ignores `limit`; do not follow.
    #[serde(default)]
    pub prev_page_url: Option<String>,
}

impl PageMetadata {
    /// Whether the server says this is the final page
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.last_page
    }
}

/// One page of a list endpoint: metadata plus that page's items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Position of this page within the collection
    #[serde(flatten)]
    pub meta: PageMetadata,
    /// Items on this page, in server order
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Split into metadata and items
    pub fn into_parts(self) -> (PageMetadata, Vec<T>) {
        (self.meta, self.data)
    }
}

/// Tracks where the drain loop is, as last reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Current page number
    pub current_page: i64,
    /// Last page number
    pub last_page: i64,
    /// Pages fetched so far
    pub pages_fetched: u32,
}

impl PaginationState {
    /// Initial state: nothing fetched, last page unknown.
    ///
    /// `last_page` starts at 1 so the loop runs at least once.
    pub fn new() -> Self {
        Self {
            current_page: 0,
            last_page: 1,
            pages_fetched: 0,
        }
    }

    /// Is pagination complete?
    pub fn is_done(&self) -> bool {
        self.current_page == self.last_page
    }

    /// Advance to the page to request next and return its number
    pub fn next_page(&mut self) -> i64 {
        self.current_page = self.current_page.saturating_add(1);
        self.current_page
    }

    /// Adopt the server's view of where we are
    pub fn update(&mut self, meta: &PageMetadata) {
        self.current_page = meta.current_page;
        self.last_page = meta.last_page;
        self.pages_fetched += 1;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept `per_page` as either a JSON string or a JSON number
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
