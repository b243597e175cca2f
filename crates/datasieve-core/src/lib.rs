pub mod error;
pub mod project;
pub mod validate;

pub use error::{Error, Result};
pub use project::{ProjectedField, project};
pub use validate::validate;
