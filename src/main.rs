// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! polylex - tokenize C, Java and C++ source files
//!
//! This is the main entry point for the polylex CLI.
//!
//! ## Features
//!
//! - Language selection from the file suffix (`.c`, `.java`, `.cpp`)
//! - Async file reading with tokio
//! - Parallel tokenization of several files
//! - Grid, plain and JSON token tables

mod cli;
mod config;
mod error;
mod render;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use polylex_core::{Language, tokenize_many};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::Config;
use error::{PolylexError, Result};
use render::{FileReport, Renderer};

/// Main entry point - uses tokio runtime for async file reading.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.loglevel);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if config.color {
                eprintln!("{}: {}", "Error".red().bold(), e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    config.apply_cli(cli);
    Ok(config)
}

/// Initialize tracing; `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    if cli.show_config {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    // Every language is selected before any file is read or tokenized.
    let languages = cli
        .files
        .iter()
        .map(|path| select_language(path, config.language.as_deref()))
        .collect::<Result<Vec<_>>>()?;

    let mut sources = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PolylexError::Read {
                path: path.clone(),
                source,
            })?;
        debug!("Read {} ({} bytes)", path.display(), source.len());
        sources.push(source);
    }

    let inputs: Vec<(Language, &str)> = languages
        .iter()
        .copied()
        .zip(sources.iter().map(String::as_str))
        .collect();
    let results = tokenize_many(&inputs);

    let reports: Vec<FileReport> = cli
        .files
        .iter()
        .zip(languages)
        .zip(results)
        .map(|((path, language), tokens)| {
            info!("{}: {} tokens", path.display(), tokens.len());
            FileReport::new(path.display().to_string(), language, tokens)
        })
        .collect();

    let renderer = Renderer::new(config.format, config.color);
    print!("{}", renderer.render_files(&reports, !cli.quiet)?);

    Ok(())
}

/// Picks the language for `path`, honoring a forced extension.
///
/// A forced value may omit the leading dot (`cpp` or `.cpp`).
fn select_language(path: &Path, forced: Option<&str>) -> Result<Language> {
    let language = match forced {
        Some(ext) if ext.starts_with('.') => ext.parse::<Language>()?,
        Some(ext) => format!(".{}", ext).parse::<Language>()?,
        None => Language::from_path(path)?,
    };
    debug!("{} -> {}", path.display(), language);
    Ok(language)
}
