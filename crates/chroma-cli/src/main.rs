//! Chroma color tool CLI.

use clap::{ColorChoice, Parser};
use chroma_cli::logging::{LogConfig, LogFormat, init_logging};
use chroma_cli::summary::{
    browse_table, categories_table, color_table, contrast_table, harmony_table, info_table,
    simulation_table,
};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    emit, run_browse, run_categories, run_contrast, run_convert, run_harmony, run_info,
    run_simulate,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let format = cli.format;
    let outcome = match &cli.command {
        Command::Convert(args) => run_convert(args).and_then(|r| emit(format, &r, color_table)),
        Command::Harmony(args) => run_harmony(args).and_then(|r| emit(format, &r, harmony_table)),
        Command::Contrast(args) => {
            run_contrast(args).and_then(|r| emit(format, &r, contrast_table))
        }
        Command::Simulate(args) => {
            run_simulate(args).and_then(|r| emit(format, &r, simulation_table))
        }
        Command::Info(args) => run_info(args).and_then(|r| emit(format, &r, info_table)),
        Command::Categories => run_categories().and_then(|r| emit(format, &r, categories_table)),
        Command::Browse(args) => run_browse(args).and_then(|r| emit(format, &r, browse_table)),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_timestamps = cli.log_timestamps;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
