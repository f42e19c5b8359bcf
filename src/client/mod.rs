//! Client module
//!
//! [`CatFactsClient`] is the entry point: a base URL, a page size and a
//! transport, plus the three API operations. [`ClientConfig`] builds one
//! from a JSON settings file.

mod catfacts;
mod config;

pub use catfacts::{CatFactsClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use config::ClientConfig;

#[cfg(test)]
mod tests;
