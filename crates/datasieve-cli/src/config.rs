use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Endpoint used when nothing else is configured. Matches the service's
/// default local deployment.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DATASIEVE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.datasieve (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: DATASIEVE_PATH environment variable
    if let Ok(env_path) = std::env::var("DATASIEVE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("datasieve"));
    }

    // Priority 4: Fallback to ~/.datasieve (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".datasieve"));
    }

    anyhow::bail!("could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Endpoint priority: --endpoint flag, DATASIEVE_ENDPOINT environment
/// variable, config file, built-in default (already folded into `Config`).
pub fn resolve_endpoint(flag: Option<&str>, config: &Config) -> String {
    if let Some(endpoint) = flag {
        return endpoint.to_string();
    }

    if let Ok(endpoint) = std::env::var("DATASIEVE_ENDPOINT") {
        return endpoint;
    }

    config.endpoint.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            endpoint: "http://sieve.internal:8080".to_string(),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.endpoint, "http://sieve.internal:8080");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        Ok(())
    }

    #[test]
    fn test_missing_endpoint_key_falls_back_to_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        Ok(())
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            endpoint: "http://from-config:1".to_string(),
        };

        let resolved = resolve_endpoint(Some("http://from-flag:2"), &config);
        assert_eq!(resolved, "http://from-flag:2");
    }
}
