use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use canonxml::batch::{ExtractionEvent, collect_inputs, run_extraction_with_sender};
use canonxml::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod ui;

use crate::cli::{Cli, LogFormatArg};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    let files = match collect_inputs(&cli.inputs, cli.recursive) {
        Ok(files) => files,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    if !cli.json {
        ui::render_header();
    }

    let (sender, receiver) = mpsc::channel();
    let output_dir = cli.output_dir.clone();
    let worker = thread::spawn(move || run_extraction_with_sender(files, &output_dir, sender));

    let mut reports = Vec::new();
    let mut failures: Vec<(PathBuf, String)> = Vec::new();
    for event in receiver.iter() {
        if !cli.json {
            ui::render_event(&event);
        }
        match event {
            ExtractionEvent::Success { report } => reports.push(report),
            ExtractionEvent::Failure { path, error } => failures.push((path, error)),
            _ => {}
        }
    }

    if worker.join().is_err() {
        eprintln!("error: el proceso de extracción terminó inesperadamente");
        std::process::exit(1);
    }

    if cli.json {
        let failures: Vec<_> = failures
            .iter()
            .map(|(path, error)| json!({ "input": path, "error": error }))
            .collect();
        let summary = json!({ "reports": reports, "failures": failures });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                eprintln!("error: {error}");
                std::process::exit(1);
            }
        }
    } else {
        for (path, error) in &failures {
            eprintln!("error: {}: {error}", path.display());
        }
    }

    std::process::exit(if failures.is_empty() { 0 } else { 1 });
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = if cli.quiet {
        LevelFilter::ERROR
    } else {
        match cli.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    LogConfig {
        level_filter,
        use_env_filter: !cli.quiet && cli.verbose == 0,
        with_ansi: io::stderr().is_terminal(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    }
}
