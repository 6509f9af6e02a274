// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use folio_app::Project;
use folio_tui::DatasetSource;
use std::path::PathBuf;

/// Where the browser gets its projects from, both at startup and on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Demo,
}

impl DatasetSource for CatalogSource {
    fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Demo => "built-in demo catalog".to_owned(),
        }
    }

    fn reload(&mut self) -> Result<Vec<Project>> {
        let projects = match self {
            Self::File(path) => folio_catalog::load_catalog(path)?,
            Self::Demo => folio_catalog::demo_projects(),
        };
        tracing::debug!(source = %self.describe(), count = projects.len(), "catalog read");
        Ok(projects)
    }
}
