// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod demo;
mod validation;

pub use demo::demo_projects;
pub use validation::{CatalogError, CatalogResult, DATE_LAYOUT, parse_catalog_date};

use anyhow::{Context, Result, anyhow, bail};
use folio_app::Project;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const APP_NAME: &str = "folio";
pub const DEFAULT_BASE_PATH: &str = "/projects/";

/// A project record as written in a catalog file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: String,
    pub category: String,
    pub status: String,
    pub created_date: String,
    pub updated_date: String,
    #[serde(default)]
    pub duration: String,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub links: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct WrappedCatalog {
    projects: Vec<RawProject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|value| value.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => bail!(
                "catalog {} must end in .json or .toml",
                path.display()
            ),
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<Project>> {
    let format = CatalogFormat::from_path(path)?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read catalog file {}", path.display()))?;
    let projects = parse_catalog(&raw, format)
        .with_context(|| format!("load catalog {}", path.display()))?;
    info!(
        path = %path.display(),
        count = projects.len(),
        "catalog loaded"
    );
    Ok(projects)
}

/// JSON accepts a bare array or an object with a `projects` array; TOML
/// accepts `[[projects]]` tables.
pub fn parse_catalog(raw: &str, format: CatalogFormat) -> Result<Vec<Project>> {
    let records = match format {
        CatalogFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("parse JSON catalog")?;
            let list = match value {
                serde_json::Value::Array(_) => value,
                serde_json::Value::Object(mut map) => map.remove("projects").ok_or_else(|| {
                    anyhow!("JSON catalog object needs a top-level \"projects\" array")
                })?,
                _ => bail!("JSON catalog must be an array of projects or an object with \"projects\""),
            };
            serde_json::from_value::<Vec<RawProject>>(list).context("decode JSON projects")?
        }
        CatalogFormat::Toml => {
            toml::from_str::<WrappedCatalog>(raw)
                .context("parse TOML catalog; expected [[projects]] tables")?
                .projects
        }
    };
    Ok(validation::validate_projects(records)?)
}

pub fn default_catalog_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("FOLIO_CATALOG_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set FOLIO_CATALOG_PATH to a catalog file")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("projects.json"))
}

pub fn default_log_path() -> Result<PathBuf> {
    let data_root = dirs::data_local_dir()
        .ok_or_else(|| anyhow!("cannot resolve data directory; set [logging].file in the config"))?;
    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("folio.log"))
}

/// Rejects base paths that cannot prefix a slug.
pub fn validate_base_path(base_path: &str) -> Result<()> {
    if base_path.is_empty() {
        bail!("base path must not be empty; use \"/\" for the site root");
    }
    if base_path.chars().any(char::is_whitespace) {
        bail!("base path {base_path:?} must not contain whitespace");
    }
    if !base_path.ends_with('/') {
        bail!("base path {base_path:?} must end with '/' so slugs append cleanly");
    }
    Ok(())
}
