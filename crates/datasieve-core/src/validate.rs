use crate::{Error, Result};
use datasieve_types::Payload;
use serde_json::Value;

/// Validate raw editor text against the submission contract.
///
/// The form calls this on every keystroke, so it must stay pure and cheap:
/// one parse, no I/O. Anything other than a JSON object with a `data` array
/// is rejected; extra top-level fields are tolerated but do not travel with
/// the submission.
pub fn validate(raw: &str) -> Result<Payload> {
    let value: Value = serde_json::from_str(raw)?;

    let Value::Object(mut object) = value else {
        return Err(Error::Shape);
    };

    match object.remove("data") {
        Some(Value::Array(data)) => Ok(Payload::new(data)),
        _ => Err(Error::Shape),
    }
}
