use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered (name, age) pair with a fixed two-element shape.
///
/// Serde encodes a tuple struct as a fixed-arity JSON array, so the wire
/// form is exactly `["Xcat Liu", 25]` and arrays of any other arity or
/// element type fail to decode. The shape is just as rigid in code:
///
/// ```compile_fail
/// let mut entry = namecard::ProfileEntry::new("Xcat Liu", 25);
/// entry.2 = "http://xcatliu.com/";
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry(pub String, pub u32);

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile decode error: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("profile encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ProfileEntry {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self(name.into(), age)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn age(&self) -> u32 {
        self.1
    }

    /// Decode from a two-element JSON array.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(raw).map_err(ProfileError::Decode)
    }

    /// Encode to a two-element JSON array.
    pub fn to_json(&self) -> Result<String, ProfileError> {
        serde_json::to_string(self).map_err(ProfileError::Encode)
    }
}
