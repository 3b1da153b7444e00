//! CLI argument definitions for the chroma color tool.

use std::path::PathBuf;

use chroma_core::{CvdVariant, HarmonyKind, Rgb};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chroma",
    version,
    about = "Color conversion, harmony palettes, WCAG contrast and CVD simulation",
    long_about = "Inspect and transform colors.\n\n\
                  Converts between HEX, RGB, HSL and CMYK, builds harmony palettes,\n\
                  checks WCAG 2.x contrast and simulates color vision deficiencies.\n\
                  Colors are given as six-digit hex, with or without a leading '#'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Result output format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a color in every supported color space.
    Convert(ColorArgs),

    /// Build a harmony palette from a base color.
    Harmony(HarmonyArgs),

    /// Compute the WCAG contrast ratio of a text/background pair.
    Contrast(ContrastArgs),

    /// Show how a color appears under color vision deficiencies.
    Simulate(SimulateArgs),

    /// Show catalog metadata for a color.
    Info(ColorArgs),

    /// List catalog categories.
    Categories,

    /// List catalog colors in one category.
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct ColorArgs {
    /// Six-digit hex color, e.g. 3366FF or '#3366FF'.
    #[arg(value_name = "HEX")]
    pub hex: Rgb,
}

#[derive(Parser)]
pub struct HarmonyArgs {
    /// Base color. Ignored by the random kind.
    #[arg(value_name = "HEX")]
    pub base: Rgb,

    /// Harmony kind (complementary, analogous, triadic, split,
    /// monochromatic, tetradic, random).
    #[arg(long = "kind", short = 'k', default_value = "complementary")]
    pub kind: HarmonyKind,

    /// Seed for the random kind; the same seed yields the same palette.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Number of colors for the random kind.
    #[arg(long = "count", value_name = "N")]
    pub count: Option<usize>,
}

#[derive(Parser)]
pub struct ContrastArgs {
    /// Text color.
    #[arg(value_name = "FOREGROUND")]
    pub foreground: Rgb,

    /// Background color.
    #[arg(value_name = "BACKGROUND")]
    pub background: Rgb,
}

#[derive(Parser)]
pub struct SimulateArgs {
    #[arg(value_name = "HEX")]
    pub hex: Rgb,

    /// Only simulate this variant (normal, protanopia, deuteranopia,
    /// tritanopia, achromatopsia). Defaults to all of them.
    #[arg(long = "variant")]
    pub variant: Option<CvdVariant>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Category label, matched case-insensitively.
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Maximum number of colors to list.
    #[arg(long = "limit", default_value_t = 10)]
    pub limit: usize,
}

/// CLI result format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
