use crate::constants::{
    BASE_PATH_ENV, DEFAULT_BASE_PATH, DEFAULT_FINANCIAL_PATH, DEFAULT_HOST, DEFAULT_LIST_PATH,
    DEFAULT_SCHEME, HOST_ENV,
};
use crate::error::{ImportError, Result};
use crate::types::ImportProfile;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one import run. Defaults reproduce the compiled-in paths
/// and database address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub list_path: PathBuf,
    pub financial_path: PathBuf,
    pub profile: ImportProfile,
    pub weaviate: WeaviateConfig,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeaviateConfig {
    pub scheme: String,
    pub host: String,
    pub base_path: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            list_path: PathBuf::from(DEFAULT_LIST_PATH),
            financial_path: PathBuf::from(DEFAULT_FINANCIAL_PATH),
            profile: ImportProfile::default(),
            weaviate: WeaviateConfig::default(),
            log_dir: None,
        }
    }
}

impl Default for WeaviateConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

/// Command-line values that win over every other source.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub list_path: Option<PathBuf>,
    pub financial_path: Option<PathBuf>,
    pub profile: Option<ImportProfile>,
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ImportConfig {
    /// Defaults, then the optional TOML file, then the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV).filter(|v| !v.trim().is_empty()) {
            self.weaviate.host = host;
        }
        if let Some(base_path) = lookup(BASE_PATH_ENV) {
            self.weaviate.base_path = base_path;
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.list_path {
            self.list_path = v;
        }
        if let Some(v) = overrides.financial_path {
            self.financial_path = v;
        }
        if let Some(v) = overrides.profile {
            self.profile = v;
        }
        if let Some(v) = overrides.host {
            self.weaviate.host = v;
        }
        if let Some(v) = overrides.base_path {
            self.weaviate.base_path = v;
        }
        if let Some(v) = overrides.log_dir {
            self.log_dir = Some(v);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.weaviate.host.trim().is_empty() {
            return Err(ImportError::Config("weaviate host must not be empty".to_string()));
        }
        if !matches!(self.weaviate.scheme.as_str(), "http" | "https") {
            return Err(ImportError::Config(format!(
                "unsupported scheme '{}'",
                self.weaviate.scheme
            )));
        }
        Ok(())
    }
}
