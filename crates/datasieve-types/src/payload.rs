use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user-authored submission body.
///
/// The service contract requires a JSON object with a `data` array; the
/// element types inside the array are left to the service. Serializing a
/// `Payload` produces exactly the outbound request body, with the array
/// order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub data: Vec<Value>,
}

impl Payload {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
