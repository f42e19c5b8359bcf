//! # catfacts
//!
//! An async client for the [catfact.ninja](https://catfact.ninja) REST API.
//!
//! ## Features
//!
//! - **Random fact**: `GET /fact`
//! - **Full listings**: every breed or fact, drained page by page
//! - **Pluggable transport**: swap the reqwest transport for a scripted stub
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catfacts::{CatFactsClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CatFactsClient::new().with_page_size(100);
//!
//!     let fact = client.get_random_fact().await?;
//!     println!("{}", fact.fact);
//!
//!     let breeds = client.list_all_breeds().await?;
//!     println!("{} breeds", breeds.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                CatFactsClient                 │
//! │  get_random_fact  list_all_breeds  list_all_facts
//! └───────────────────────┬───────────────────────┘
//!                         │
//!          ┌──────────────┼──────────────┐
//!          │  PageDrain   │    decode    │
//!          └──────┬───────┴──────────────┘
//!                 │
//! ┌───────────────┴───────────────────────────────┐
//! │          Transport (HttpTransport, stub)      │
//! └───────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Breed and fact records
pub mod models;

/// GET transport abstraction and implementations
pub mod transport;

/// JSON body decoding
pub mod decode;

/// Page envelope and draining loop
pub mod pagination;

/// API client and its configuration
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{CatFactsClient, ClientConfig};
pub use error::{Error, Result};
pub use models::{Breed, Fact};
pub use transport::{HttpTransport, StubTransport, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
