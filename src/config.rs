//! Client configuration
//!
//! Settings can come from defaults, a YAML/JSON file, environment variables
//! and the builder, in that order of increasing precedence when combined:
//!
//! ```yaml
//! base_url: https://api.amctheatres.com
//! timeout_secs: 15
//! vendor_key: 00000000-0000-0000-0000-000000000000
//! ```

use crate::error::{Error, Result};
use crate::target::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "AMC_API_BASE_URL";
/// Environment variable supplying the vendor key
pub const ENV_VENDOR_KEY: &str = "AMC_VENDOR_KEY";
/// Environment variable overriding the timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "AMC_API_TIMEOUT_SECS";

/// Fixed upper bound for a request, connect through body
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for an API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL that target paths resolve against
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// AMC vendor key, sent as `X-AMC-Vendor-Key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_key: Option<String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            vendor_key: None,
            user_agent: format!("amc-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let config: Self = match extension.as_deref() {
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {e}", path.display())))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {e}", path.display())))?,
            _ => {
                return Err(Error::config(format!(
                    "unsupported config file type: {}",
                    path.display()
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply `AMC_API_BASE_URL`, `AMC_VENDOR_KEY` and `AMC_API_TIMEOUT_SECS`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(key) = lookup(ENV_VENDOR_KEY).filter(|k| !k.trim().is_empty()) {
            self.vendor_key = Some(key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Set the vendor key
    pub fn vendor_key(mut self, key: impl Into<String>) -> Self {
        self.config.vendor_key = Some(key.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.amctheatres.com");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.vendor_key.is_none());
        assert!(config.user_agent.starts_with("amc-api/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(3))
            .vendor_key("abc")
            .user_agent("test/1.0")
            .build();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.vendor_key.as_deref(), Some("abc"));
        assert_eq!(config.user_agent, "test/1.0");
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "base_url: http://localhost:9000\nvendor_key: from-file").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.vendor_key.as_deref(), Some("from-file"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"timeout_secs": 30}}"#).unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file_rejects_bad_url() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "base_url: ftp://example.com").unwrap();
        assert!(ClientConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ClientConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://127.0.0.1:1234"),
            (ENV_VENDOR_KEY, "env-key"),
            (ENV_TIMEOUT_SECS, " 20 "),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::default()
            .with_overrides_from(|k| vars.get(k).map(|v| (*v).to_string()))
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert_eq!(config.vendor_key.as_deref(), Some("env-key"));
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn test_blank_vendor_key_override_ignored() {
        let config = ClientConfig::builder()
            .vendor_key("kept")
            .build()
            .with_overrides_from(|k| (k == ENV_VENDOR_KEY).then(|| "  ".to_string()))
            .unwrap();
        assert_eq!(config.vendor_key.as_deref(), Some("kept"));
    }

    #[test]
    fn test_bad_timeout_override() {
        let err = ClientConfig::default()
            .with_overrides_from(|k| (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }
}
