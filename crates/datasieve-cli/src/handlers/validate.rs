use crate::types::OutputFormat;
use anyhow::{Context, Result};
use datasieve_core::validate;
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::Path;

/// Read raw payload text from a file, or stdin when no file is given.
pub(crate) fn read_payload_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

pub fn handle(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let raw = read_payload_text(file)?;

    match validate(&raw) {
        Ok(payload) => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "valid": true, "items": payload.len() })
                ),
                OutputFormat::Plain => {
                    println!("{} payload is valid ({} data items)", "✓".green(), payload.len());
                }
            }
            Ok(())
        }
        Err(err) => {
            if let OutputFormat::Json = format {
                println!(
                    "{}",
                    serde_json::json!({ "valid": false, "message": err.to_string() })
                );
            }
            Err(err.into())
        }
    }
}
