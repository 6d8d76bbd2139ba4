use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use fwms_domain::{RuntimeConfig, MAX_LIST_LIMIT};

use super::validation::{validate_bind_addr, validate_list_limit, validate_positive};
use crate::utils::{blank_to_none, resolve_path};

pub const CONFIG_ENV: &str = "FWMS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log_format '{}'", other)),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Snapshot file. An empty value runs memory-only.
    pub data_path: Option<String>,
    /// YAML list of users loaded when no snapshot exists yet.
    pub seed_path: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_list_limit: usize,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Directory for daily rolling log files; stdout only when unset.
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3400".to_string(),
            data_path: Some("./data/fwms.json".to_string()),
            seed_path: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_list_limit: 50,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads `path`, else `$FWMS_CONFIG`, else `./config.toml`. A missing file
    /// falls back to defaults; environment overrides apply either way.
    pub async fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_string(),
            None => env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
        };
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::parse(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.finish(file_path.parent())?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    /// Path resolution, normalization and validation after all sources merged.
    pub fn finish(&mut self, base_dir: Option<&Path>) -> Result<()> {
        self.resolve_paths(base_dir);
        self.normalize();
        self.validate()
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.data_path = blank_to_none(self.data_path.take());
        self.seed_path = blank_to_none(self.seed_path.take());
        self.log_dir = blank_to_none(self.log_dir.take());
        let level = self.log_level.trim().to_lowercase();
        self.log_level = if level.is_empty() {
            "info".to_string()
        } else {
            level
        };
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        for path in [&mut self.data_path, &mut self.seed_path, &mut self.log_dir]
            .into_iter()
            .flatten()
        {
            let resolved = resolve_path(base, path);
            *path = resolved;
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_bind_addr(&self.bind_addr)?;
        validate_positive("max_body_bytes", self.max_body_bytes)?;
        validate_positive("request_timeout_seconds", self.request_timeout_seconds)?;
        validate_list_limit(self.default_list_limit, MAX_LIST_LIMIT)?;
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            data_path: self.data_path.clone(),
            seed_path: self.seed_path.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            default_list_limit: self.default_list_limit,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("FWMS_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("FWMS_DATA_PATH") {
            self.data_path = Some(value);
        }
        if let Ok(value) = env::var("FWMS_SEED_PATH") {
            self.seed_path = Some(value);
        }
        if let Ok(value) = env::var("FWMS_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("FWMS_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("FWMS_DEFAULT_LIST_LIMIT") {
            self.default_list_limit = value.parse().unwrap_or(self.default_list_limit);
        }
        if let Ok(value) = env::var("FWMS_LOG_LEVEL") {
            self.log_level = value;
        }
        if let Ok(value) = env::var("FWMS_LOG_FORMAT") {
            match value.parse() {
                Ok(format) => self.log_format = format,
                Err(err) => warn!("ignoring FWMS_LOG_FORMAT: {}", err),
            }
        }
        if let Ok(value) = env::var("FWMS_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}
