// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use folio_app::{Dataset, ProjectTable};
use folio_tui::{DatasetSource, UiOptions};
use runtime::CatalogSource;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `folio --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let base_path = options
        .base_path
        .clone()
        .unwrap_or_else(|| config.base_path().to_owned());
    folio_catalog::validate_base_path(&base_path)
        .context("invalid --base-path; it must be non-empty and end with '/'")?;

    let directive = logging::resolve_directive(env::var(logging::LOG_ENV).ok(), config.log_level());
    let log_path = config.log_file()?;
    if !options.check_only {
        logging::init(&log_path, &directive)?;
    }

    let mut source = if options.demo {
        CatalogSource::Demo
    } else {
        match &options.catalog_path {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::File(config.catalog_path()?),
        }
    };
    let projects = source.reload().with_context(|| {
        format!(
            "load catalog {}; pass --catalog <path>, set [catalog].path, or try --demo",
            source.describe()
        )
    })?;

    if options.check_only {
        println!(
            "ok: {} project(s) from {}; pages under {}",
            projects.len(),
            source.describe(),
            base_path
        );
        return Ok(());
    }

    tracing::info!(
        source = %source.describe(),
        count = projects.len(),
        base_path = %base_path,
        "starting browser"
    );

    let mut table = ProjectTable::new(Arc::new(Dataset::new(projects)), base_path);
    folio_tui::run_app(
        &mut table,
        &mut source,
        UiOptions {
            wide_breakpoint: config.wide_breakpoint(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    catalog_path: Option<PathBuf>,
    base_path: Option<String>,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        catalog_path: None,
        base_path: None,
        print_config_path: false,
        print_example: false,
        demo: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--catalog" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--catalog requires a .json or .toml file path"))?;
                options.catalog_path = Some(PathBuf::from(value.as_ref()));
            }
            "--base-path" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--base-path requires a value such as /projects/"))?;
                options.base_path = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    if options.demo && options.catalog_path.is_some() {
        return Err(anyhow!("--demo and --catalog are mutually exclusive"));
    }

    Ok(options)
}

fn print_help() {
    println!("folio: browse a project catalog in the terminal");
    println!("  --config <path>          Use a specific config path");
    println!("  --catalog <path>         Read projects from a .json or .toml catalog");
    println!("  --base-path <prefix>     Page prefix for project links (default /projects/)");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Browse the built-in demo catalog");
    println!("  --check                  Validate config and catalog, then exit");
    println!("  --help                   Show this help");
}
