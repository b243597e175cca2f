use crate::field::ResponseField;
use serde::{Deserialize, Serialize};

/// Decoded body of a classification response.
///
/// The field sequences default to empty because failure bodies may carry
/// nothing but `is_success`. The service is an external collaborator; no
/// invariant beyond the shape is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SieveResponse {
    pub is_success: bool,

    #[serde(default)]
    pub alphabets: Vec<String>,

    #[serde(default)]
    pub numbers: Vec<String>,

    #[serde(default)]
    pub highest_lowercase_alphabet: Vec<String>,
}

impl SieveResponse {
    /// The sequence the service returned for a selectable field.
    pub fn field(&self, field: ResponseField) -> &[String] {
        match field {
            ResponseField::Alphabets => &self.alphabets,
            ResponseField::Numbers => &self.numbers,
            ResponseField::HighestLowercaseAlphabet => &self.highest_lowercase_alphabet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_body_decodes_without_sequences() {
        let decoded: SieveResponse = serde_json::from_str(r#"{"is_success":false}"#).unwrap();
        assert!(!decoded.is_success);
        assert!(decoded.alphabets.is_empty());
        assert!(decoded.numbers.is_empty());
        assert!(decoded.highest_lowercase_alphabet.is_empty());
    }

    #[test]
    fn full_body_decodes() {
        let body = r#"{
            "is_success": true,
            "alphabets": ["M", "B"],
            "numbers": ["1"],
            "highest_lowercase_alphabet": ["b"]
        }"#;
        let decoded: SieveResponse = serde_json::from_str(body).unwrap();
        assert!(decoded.is_success);
        assert_eq!(decoded.field(ResponseField::Alphabets), ["M", "B"]);
        assert_eq!(decoded.field(ResponseField::Numbers), ["1"]);
        assert_eq!(decoded.field(ResponseField::HighestLowercaseAlphabet), ["b"]);
    }
}
