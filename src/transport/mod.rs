//! Transport module
//!
//! The client only needs one capability from the network: GET a URL and
//! hand back the response body. Anything implementing [`Transport`] can be
//! plugged in.
//!
//! # Implementations
//!
//! - [`HttpTransport`]: reqwest-backed transport used by default
//! - [`StubTransport`]: in-memory transport replaying scripted responses

mod http;
mod stub;

pub use http::{HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder};
pub use stub::StubTransport;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Performs an HTTP GET and returns the full response body
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return its body.
    ///
    /// Failures are reported as [`crate::Error::Transport`].
    async fn get(&self, url: &str) -> Result<Bytes>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<Bytes> {
        (**self).get(url).await
    }
}
