use serde::{Deserialize, Serialize};
use std::fmt;

/// The response fields a user can choose to view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseField {
    Alphabets,
    Numbers,
    HighestLowercaseAlphabet,
}

impl ResponseField {
    /// Fixed rendering order. Projection always walks fields in this order,
    /// regardless of the order they were selected in.
    pub const DISPLAY_ORDER: [ResponseField; 3] = [
        ResponseField::Alphabets,
        ResponseField::Numbers,
        ResponseField::HighestLowercaseAlphabet,
    ];

    /// Wire name of the field in the service response body.
    pub fn key(&self) -> &'static str {
        match self {
            ResponseField::Alphabets => "alphabets",
            ResponseField::Numbers => "numbers",
            ResponseField::HighestLowercaseAlphabet => "highest_lowercase_alphabet",
        }
    }

    /// Human-facing label shown next to the projected values.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseField::Alphabets => "Alphabets",
            ResponseField::Numbers => "Numbers",
            ResponseField::HighestLowercaseAlphabet => "Highest Lowercase Alphabet",
        }
    }

    /// Parse a wire name back into a field.
    pub fn from_key(key: &str) -> Option<ResponseField> {
        ResponseField::DISPLAY_ORDER
            .into_iter()
            .find(|field| field.key() == key)
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
