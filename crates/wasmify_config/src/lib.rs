use std::{fmt, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, String>;

/// Base URL used when no API URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Request timeout (seconds) used when the configured timeout is not positive.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "WASMIFY_API_URL";
pub const ENV_API_KEY: &str = "WASMIFY_API_KEY";
pub const ENV_TIMEOUT: &str = "WASMIFY_TIMEOUT";

/// Settings for a Wasmify client, as written by the user.
///
/// Every field is optional. Defaults are applied by [`ClientConfig::resolve`],
/// not at parse time, so a config can be layered (file, environment, flags)
/// before it is frozen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the Wasmify API, e.g. `https://wasmify.example.com/api`.
    #[serde(default)]
    pub api_url: Option<String>,
    /// API key sent as a bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    /// condition: values <= 0 mean "use the default"
    #[serde(default)]
    pub timeout: i64,
}

impl ClientConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config: ClientConfig = serde_yaml::from_reader(
            std::fs::File::open(path).map_err(|e| format!("Failed to open file: {}", e))?,
        )
        .map_err(|e| format!("Failed to parse YAML: {}", e))?;
        config.validate()?;

        Ok(config)
    }

    /// Overlay `WASMIFY_API_URL`, `WASMIFY_API_KEY` and `WASMIFY_TIMEOUT` from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::apply_env`] but reads variables through `lookup`.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = Some(url);
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.timeout = timeout
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {} value '{}': {}", ENV_TIMEOUT, timeout, e))?;
        }
        self.validate()?;

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api_url {
            if url.is_empty() {
                return Err("API URL must not be empty".to_string());
            }

            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!(
                    "API URL must start with http:// or https://: {}",
                    url
                ));
            }
        }

        if matches!(self.api_key.as_deref(), Some("")) {
            return Err("API key must not be empty when specified".to_string());
        }

        Ok(())
    }

    /// Apply defaults and freeze the settings.
    ///
    /// The result owns copies of every string, so the caller's config can be
    /// dropped or modified afterwards.
    pub fn resolve(&self) -> ResolvedConfig {
        let api_url = self
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let api_key = self.api_key.clone().filter(|key| !key.is_empty());
        let timeout = match u64::try_from(self.timeout) {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        ResolvedConfig {
            api_url,
            api_key,
            timeout,
        }
    }
}

/// Client settings with every default applied.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
