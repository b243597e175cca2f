pub mod client;
pub mod error;

pub use client::SieveClient;
pub use error::{Error, Result};
