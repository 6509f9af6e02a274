// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use folio_catalog::{APP_NAME, DEFAULT_BASE_PATH};
use folio_tui::DEFAULT_WIDE_BREAKPOINT;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging;

const CONFIG_VERSION: i64 = 1;
const MIN_WIDE_BREAKPOINT: u16 = 40;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: Catalog::default(),
            ui: Ui::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub path: Option<String>,
    pub base_path: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            path: None,
            base_path: Some(DEFAULT_BASE_PATH.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub wide_breakpoint: Option<u16>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            wide_breakpoint: Some(DEFAULT_WIDE_BREAKPOINT),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: Some(logging::DEFAULT_DIRECTIVE.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("FOLIO_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set FOLIO_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [catalog], [ui], and [logging]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(catalog_path) = &self.catalog.path
            && catalog_path.trim().is_empty()
        {
            bail!(
                "catalog.path in {} is empty; remove it to use the default location",
                path.display()
            );
        }

        if let Some(base_path) = &self.catalog.base_path {
            folio_catalog::validate_base_path(base_path)
                .with_context(|| format!("invalid catalog.base_path in {}", path.display()))?;
        }

        if let Some(breakpoint) = self.ui.wide_breakpoint
            && breakpoint < MIN_WIDE_BREAKPOINT
        {
            bail!(
                "ui.wide_breakpoint in {} must be at least {}, got {}",
                path.display(),
                MIN_WIDE_BREAKPOINT,
                breakpoint
            );
        }

        if let Some(level) = &self.logging.level {
            logging::parse_filter(level)
                .with_context(|| format!("invalid logging.level in {}", path.display()))?;
        }

        Ok(())
    }

    pub fn catalog_path(&self) -> Result<PathBuf> {
        match &self.catalog.path {
            Some(path) => Ok(PathBuf::from(path)),
            None => folio_catalog::default_catalog_path(),
        }
    }

    pub fn base_path(&self) -> &str {
        self.catalog
            .base_path
            .as_deref()
            .unwrap_or(DEFAULT_BASE_PATH)
    }

    pub fn wide_breakpoint(&self) -> u16 {
        self.ui.wide_breakpoint.unwrap_or(DEFAULT_WIDE_BREAKPOINT)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .level
            .as_deref()
            .unwrap_or(logging::DEFAULT_DIRECTIVE)
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(PathBuf::from(path)),
            None => folio_catalog::default_log_path(),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# folio config\n# Place this file at: {}\n\nversion = 1\n\n[catalog]\n# Optional. Default is the platform data dir (for example ~/.local/share/folio/projects.json)\n# path = \"/absolute/path/to/projects.json\"\nbase_path = \"{}\"\n\n[ui]\n# Terminal width (columns) at which the table layout replaces cards\nwide_breakpoint = {}\n\n[logging]\n# tracing filter directive; FOLIO_LOG overrides it\nlevel = \"{}\"\n# file = \"/absolute/path/to/folio.log\"\n",
            path.display(),
            DEFAULT_BASE_PATH,
            DEFAULT_WIDE_BREAKPOINT,
            logging::DEFAULT_DIRECTIVE,
        )
    }
}
