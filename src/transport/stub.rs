//! In-memory transport for tests
//!
//! Replays a queue of scripted responses in order and records every URL it
//! was asked for.

use super::Transport;
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
enum Scripted {
    Body(Bytes),
    Failure(String),
}

/// Transport that answers from a scripted queue instead of the network
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    /// Create a stub with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON body
    #[must_use]
    pub fn respond_json(self, body: &Value) -> Self {
        self.respond_body(body.to_string())
    }

    /// Queue a raw body
    #[must_use]
    pub fn respond_body(self, body: impl Into<Bytes>) -> Self {
        self.push(Scripted::Body(body.into()));
        self
    }

    /// Queue a transport failure
    #[must_use]
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Scripted::Failure(message.into()));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of GETs performed so far
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn push(&self, response: Scripted) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<Bytes> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match next {
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Failure(message)) => Err(Error::transport(url, message)),
            None => Err(Error::transport(url, "no scripted response left")),
        }
    }
}
