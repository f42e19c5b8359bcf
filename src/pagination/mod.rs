//! Pagination module
//!
//! Drains a page-numbered list endpoint (`?limit=<n>&page=<p>`) until the
//! server reports that its current page is its last page.
//!
//! # Overview
//!
//! The server also returns `next_page_url`, but that link drops the `limit`
//! parameter, so it is carried in [`PageMetadata`] and never followed.
//! [`PageDrain`] walks the pages, and a caller-supplied handler decodes each
//! body and merges its items.

mod drain;
mod types;

pub use drain::PageDrain;
pub use types::{Page, PageMetadata, PaginationState};
