//! Backend settings loaded from `config.toml` and the environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "HEARTCHECK_API_URL";
/// Prediction service used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://heart-disease-predictor-uj7r.onrender.com";

/// Settings persisted in the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub backend: BackendSettings,
}

/// `[backend]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the prediction service; the environment wins over this.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout; absent leaves the transport defaults in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Ping the service once when the desktop app starts.
    #[serde(default = "default_true")]
    pub check_status_on_launch: bool,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: None,
            check_status_on_launch: true,
        }
    }
}

/// Where the base URL came from, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    Environment,
    ConfigFile,
    Default,
}

/// Fully resolved backend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: BaseUrl,
    pub url_source: UrlSource,
    pub request_timeout: Option<Duration>,
    pub check_status_on_launch: bool,
}

/// Validated absolute http(s) origin without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason,
        };
        let parsed = url::Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }
        Ok(Self(parsed.as_str().trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute path such as `/predict` onto the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl std::fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
}

/// Resolve the config file path (`.heartcheck/config.toml`).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Load settings from a specific path; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the config file and the environment and resolve the backend.
pub fn load_backend_config() -> Result<BackendConfig, ConfigError> {
    let settings = load_or_default()?;
    resolve_backend(&settings.backend, std::env::var(API_URL_ENV).ok())
}

/// Combine file settings with an optional environment override.
///
/// Precedence: non-empty environment value, then `base_url`, then
/// [`DEFAULT_API_URL`].
pub fn resolve_backend(
    settings: &BackendSettings,
    env_override: Option<String>,
) -> Result<BackendConfig, ConfigError> {
    let env_override = env_override.filter(|value| !value.trim().is_empty());
    let file_url = settings
        .base_url
        .as_deref()
        .filter(|value| !value.trim().is_empty());
    let (raw, url_source) = match (env_override.as_deref(), file_url) {
        (Some(url), _) => (url, UrlSource::Environment),
        (None, Some(url)) => (url, UrlSource::ConfigFile),
        (None, None) => (DEFAULT_API_URL, UrlSource::Default),
    };
    Ok(BackendConfig {
        base_url: BaseUrl::parse(raw)?,
        url_source,
        request_timeout: settings
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
        check_status_on_launch: settings.check_status_on_launch,
    })
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(settings.backend.check_status_on_launch);
    }

    #[test]
    fn loads_backend_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[backend]\nbase_url = \"http://127.0.0.1:8000/\"\nrequest_timeout_secs = 15\ncheck_status_on_launch = false\n",
        )
        .unwrap();
        let settings = load_from(&path).unwrap();
        assert_eq!(settings.backend.base_url.as_deref(), Some("http://127.0.0.1:8000/"));

        let resolved = resolve_backend(&settings.backend, None).unwrap();
        assert_eq!(resolved.base_url.as_str(), "http://127.0.0.1:8000");
        assert_eq!(resolved.url_source, UrlSource::ConfigFile);
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(15)));
        assert!(!resolved.check_status_on_launch);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[backend\nbase_url = 3").unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn environment_wins_over_file_and_default() {
        let settings = BackendSettings {
            base_url: Some("http://file.example".to_string()),
            ..BackendSettings::default()
        };
        let resolved =
            resolve_backend(&settings, Some("https://env.example/api/".to_string())).unwrap();
        assert_eq!(resolved.base_url.as_str(), "https://env.example/api");
        assert_eq!(resolved.url_source, UrlSource::Environment);

        let resolved = resolve_backend(&settings, Some("  ".to_string())).unwrap();
        assert_eq!(resolved.url_source, UrlSource::ConfigFile);
    }

    #[test]
    fn falls_back_to_default_service() {
        let resolved = resolve_backend(&BackendSettings::default(), None).unwrap();
        assert_eq!(resolved.base_url.as_str(), DEFAULT_API_URL);
        assert_eq!(resolved.url_source, UrlSource::Default);
        assert_eq!(resolved.request_timeout, None);
    }

    #[test]
    fn rejects_non_http_urls() {
        for bad in ["ftp://example.com", "not a url", "http://example.com/?q=1"] {
            assert!(
                matches!(BaseUrl::parse(bad), Err(ConfigError::InvalidUrl { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let base = BaseUrl::parse("http://localhost:8000/").unwrap();
        assert_eq!(base.endpoint("/predict"), "http://localhost:8000/predict");
        assert_eq!(base.endpoint("/"), "http://localhost:8000/");
    }
}
