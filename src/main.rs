// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Journeyplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Journeyplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Journeyplot CLI entrypoint.
//!
//! Loads the sentiment series, phases and notes from a data directory (or the built-in demo
//! dataset) and runs the interactive chart.

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use journeyplot::config::ChartConfig;
use journeyplot::model::Dataset;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JOURNEYPLOT_LOG";
const LOG_LEVEL_ENV: &str = "JOURNEYPLOT_LOG_LEVEL";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--config <file>] [--log <file>]\n  {program} [--data <dir>] [--config <file>] [--log <file>]\n  {program} --demo [--config <file>] [--log <file>]\n\nThe data directory holds sentiment_data.json, phases.json and phaseNotes.json, plus an\noptional journeyplot.json chart config. If data-dir/--data is omitted, the current working\ndirectory is used. --demo uses a built-in dataset and cannot be combined with a data dir.\n\n--config replaces the data directory's journeyplot.json.\n--log (or {LOG_ENV}=<file>) writes diagnostics to a file; {LOG_LEVEL_ENV} sets the filter (default info)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    data_dir: Option<String>,
    config_path: Option<String>,
    log_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--data" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(args.next().ok_or(())?);
            }
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--log" => {
                if options.log_path.is_some() {
                    return Err(());
                }
                options.log_path = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    if options.demo && options.data_dir.is_some() {
        return Err(());
    }

    Ok(options)
}

/// Installs a file-backed subscriber; stdout belongs to the TUI.
fn init_logging(log_path: Option<String>) -> Result<(), Box<dyn Error>> {
    let Some(path) = log_path.or_else(|| std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty()))
    else {
        return Ok(());
    };

    let file = File::create(&path)?;
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| -> Box<dyn Error> { err })?;
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "journeyplot".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging(options.log_path.clone())?;

        let (dataset, dir_config) = if options.demo {
            tracing::info!("using built-in demo dataset");
            (Dataset::demo()?, None)
        } else {
            let dir = PathBuf::from(options.data_dir.unwrap_or_else(|| ".".to_owned()));
            let dataset = Dataset::load_dir(&dir)?;
            (dataset, Some(dir))
        };

        let config = match (options.config_path, dir_config) {
            (Some(path), _) => ChartConfig::load(path)?,
            (None, Some(dir)) => ChartConfig::load_from_dir(dir)?,
            (None, None) => ChartConfig::default(),
        };

        journeyplot::tui::run(dataset, config)
    })();

    if let Err(err) = result {
        tracing::error!(%err, "journeyplot exited with an error");
        eprintln!("journeyplot: {err}");
        std::process::exit(1);
    }
}
