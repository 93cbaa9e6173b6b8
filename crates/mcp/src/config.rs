//! Command line and configuration-file settings for the `coolify-mcp` binary.

use anyhow::{Context, Result};
use clap::Parser;
use coolify_sdk::config::DEFAULT_TIMEOUT;
use coolify_sdk::ClientConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Parser, Debug)]
#[command(name = "coolify-mcp")]
#[command(about = "MCP server for the Coolify deployment platform", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the Coolify instance
    #[arg(long, env = "COOLIFY_BASE_URL")]
    pub base_url: Option<String>,

    /// API access token
    #[arg(long, env = "COOLIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "COOLIFY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Optional TOML file with `base_url`, `access_token` and `timeout_secs`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Settings read from a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub access_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

impl Cli {
    /// Merge flags and environment over the optional file, then defaults.
    ///
    /// A missing access token resolves to an empty string and is rejected
    /// when the client is built.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(self.merge(file))
    }

    fn merge(&self, file: FileConfig) -> ClientConfig {
        let base_url = self
            .base_url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let access_token = self
            .access_token
            .clone()
            .or(file.access_token)
            .unwrap_or_default();
        let timeout = self
            .timeout_secs
            .or(file.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        ClientConfig {
            base_url,
            access_token,
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["coolify-mcp"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = cli(&["--access-token", "tok"]).merge(FileConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token, "tok");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            base_url: Some("https://from-file.example.com".to_string()),
            access_token: Some("file-token".to_string()),
            timeout_secs: Some(10),
        };

        let config = cli(&["--base-url", "https://flag.example.com"]).merge(file);
        assert_eq!(config.base_url, "https://flag.example.com");
        assert_eq!(config.access_token, "file-token");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_token_resolves_empty() {
        let config = cli(&[]).merge(FileConfig::default());
        assert!(config.access_token.is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"https://coolify.example.com\"\naccess_token = \"secret\"\ntimeout_secs = 5"
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = cli(&["--config", &path]).resolve().unwrap();
        assert_eq!(config.base_url, "https://coolify.example.com");
        assert_eq!(config.access_token, "secret");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "token = \"secret\"").unwrap();

        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }
}
