use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::source::DEFAULT_CATALOG_PATH;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Site root: an http(s) URL or a local directory.
    pub catalog_base: String,
    /// Catalog file relative to `catalog_base`.
    pub catalog_path: String,
    /// Prefix printed before every amount.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base: ".".to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            currency: "$".to_string(),
        }
    }
}

impl Config {
    /// Explicit file if given, else `storefront.toml` in the user config dir, else defaults.
    /// `STOREFRONT_*` environment variables override whatever was read.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut cfg = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Self = toml::from_str(&text)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    pub(crate) fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(v) = non_empty("STOREFRONT_CATALOG_BASE") { self.catalog_base = v; }
        if let Some(v) = non_empty("STOREFRONT_CATALOG_PATH") { self.catalog_path = v; }
        if let Some(v) = non_empty("STOREFRONT_CURRENCY") { self.currency = v; }
    }
}

fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("dev", "storefront", "storefront")?;
    Some(proj.config_dir().join("storefront.toml"))
}
