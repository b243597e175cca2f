pub mod field;
pub mod payload;
pub mod response;
pub mod selection;

pub use field::ResponseField;
pub use payload::Payload;
pub use response::SieveResponse;
pub use selection::Selection;
