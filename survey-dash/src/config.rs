//! Runtime configuration.
//!
//! Read once at startup from an optional YAML file, then overridden by CLI
//! flags. Never written back.

use std::{fs, path::Path, path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/ainagif/SCV/refs/heads/main/df.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// CSV source: an http(s) URL or a local path.
    #[serde(default = "default_data_url")]
    pub data_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Redraw interval of the UI loop.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Page id shown at startup.
    #[serde(default = "default_page")]
    pub default_page: String,
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_tick_ms() -> u64 {
    200
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_page() -> String {
    "home".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            request_timeout_secs: default_request_timeout_secs(),
            tick_ms: default_tick_ms(),
            log_dir: default_log_dir(),
            default_page: default_page(),
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub data_url: Option<String>,
    pub page: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub tick_ms: Option<u64>,
}

impl Config {
    /// Reads the YAML file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_url.trim().is_empty() {
            return Err(Error::Config("data_url must not be empty".into()));
        }
        if self.tick_ms == 0 {
            return Err(Error::Config("tick_ms must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Applies CLI overrides on top of the file values.
    pub fn merge(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(url) = overrides.data_url {
            self.data_url = url;
        }
        if let Some(page) = overrides.page {
            self.default_page = page;
        }
        if let Some(dir) = overrides.log_dir {
            self.log_dir = dir;
        }
        if let Some(tick) = overrides.tick_ms {
            self.tick_ms = tick;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = Config::from_yaml("tick_ms: 100\n").unwrap();
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.default_page, "home");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_yaml("data_uri: x\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_yaml("request_timeout_secs: 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: request_timeout_secs must be positive"
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default()
            .merge(Overrides {
                data_url: Some("./df.csv".into()),
                page: Some("social".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.data_url, "./df.csv");
        assert_eq!(config.default_page, "social");
        assert_eq!(config.tick_ms, 200);

        let bad = Config::default().merge(Overrides {
            tick_ms: Some(0),
            ..Default::default()
        });
        assert!(bad.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey-dash.yaml");
        fs::write(&path, "data_url: /tmp/df.csv\nrequest_timeout_secs: 5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_url, "/tmp/df.csv");
        assert_eq!(config.request_timeout_secs, 5);

        assert!(Config::load(Some(&dir.path().join("missing.yaml"))).is_err());
        assert_eq!(Config::load(None).unwrap().data_url, DEFAULT_DATA_URL);
    }
}
