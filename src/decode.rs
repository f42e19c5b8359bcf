//! JSON response decoding
//!
//! Turns a raw body into a typed value, mapping serde failures to
//! [`Error::Decode`] tagged with what was being decoded.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode a JSON body into `T`.
///
/// `what` names the payload in the error message, e.g. `"fact"` or
/// `"breeds page 3"`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::decode(format!("{what}: {e}")))
}
