use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::Result;
use datasieve_client::SieveClient;
use std::path::Path;

pub fn show(endpoint: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "endpoint": endpoint })),
        OutputFormat::Plain => println!("{}", endpoint),
    }
    Ok(())
}

pub fn set(config_path: &Path, mut config: Config, url: String) -> Result<()> {
    // Reject URLs the client could never submit to before persisting them
    SieveClient::new(&url)?;

    config.endpoint = url;
    config.save_to(config_path)?;

    println!("endpoint set to {}", config.endpoint);
    Ok(())
}
