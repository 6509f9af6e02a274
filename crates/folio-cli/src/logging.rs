// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_LOG";
pub const DEFAULT_DIRECTIVE: &str = "folio=info";

/// Env var wins over the configured directive when it is set and non-blank.
pub fn resolve_directive(env_value: Option<String>, configured: &str) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            if configured.trim().is_empty() {
                DEFAULT_DIRECTIVE.to_owned()
            } else {
                configured.to_owned()
            }
        }
    }
}

pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("parse log filter {directive:?}"))
}

/// Installs a global subscriber writing plain-text events to `path`. The
/// terminal belongs to the UI, so nothing goes to stdout or stderr.
pub fn init(path: &Path, directive: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(parse_filter(directive)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))
}
