//! Resource records returned by the API
//!
//! All fields are opaque server text; nothing here is validated.

use serde::{Deserialize, Serialize};

/// A description of a specific cat breed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Breed name
    pub breed: String,
    /// Country the breed is associated with
    pub country: String,
    /// Origin (natural, mutation, crossbred, ...)
    pub origin: String,
    /// Coat length
    pub coat: String,
    /// Coat pattern
    pub pattern: String,
}

/// An interesting fact about cats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The fact text
    pub fact: String,
    /// Character length as reported by the server
    pub length: u64,
}
