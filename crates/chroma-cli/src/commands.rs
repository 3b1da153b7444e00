use anyhow::{Result, bail};
use comfy_table::Table;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, info_span, warn};

use chroma_cli::types::{
    BrowseReport, CategoryReport, ColorReport, ContrastReport, HarmonyReport, InfoReport,
    SimulationReport,
};
use chroma_core::harmony::generate_with_rng;
use chroma_core::{HarmonyOptions, RandomPaletteConfig, catalog};

use crate::cli::{BrowseArgs, ColorArgs, ContrastArgs, HarmonyArgs, OutputFormatArg, SimulateArgs};

pub fn run_convert(args: &ColorArgs) -> Result<ColorReport> {
    let report = ColorReport::new(args.hex);
    info!(hex = %report.hex, name = report.name, "converted color");
    Ok(report)
}

pub fn run_harmony(args: &HarmonyArgs) -> Result<HarmonyReport> {
    let span = info_span!("harmony", kind = %args.kind, base = %args.base);
    let _guard = span.enter();

    let mut random = RandomPaletteConfig::default();
    if let Some(count) = args.count {
        if args.kind.is_deterministic() {
            warn!(count, "--count only applies to the random kind; ignoring");
        } else if count == 0 {
            bail!("--count must be at least 1");
        } else {
            random = random.with_count(count);
        }
    }
    if args.seed.is_some() && args.kind.is_deterministic() {
        warn!("--seed only applies to the random kind; ignoring");
    }
    let options = HarmonyOptions { random };

    let set = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_with_rng(args.base, args.kind, &options, &mut rng)
        }
        None => generate_with_rng(args.base, args.kind, &options, &mut rand::rng()),
    };
    info!(members = set.len(), "palette ready");
    Ok(HarmonyReport::new(args.base, &set))
}

pub fn run_contrast(args: &ContrastArgs) -> Result<ContrastReport> {
    let report = ContrastReport::new(args.foreground, args.background);
    info!(
        foreground = %report.foreground,
        background = %report.background,
        ratio = report.ratio,
        level = %report.level,
        "evaluated contrast"
    );
    Ok(report)
}

pub fn run_simulate(args: &SimulateArgs) -> Result<SimulationReport> {
    let report = SimulationReport::new(args.hex, args.variant);
    info!(hex = %report.hex, variants = report.variants.len(), "simulated color vision");
    Ok(report)
}

pub fn run_info(args: &ColorArgs) -> Result<InfoReport> {
    let report = InfoReport::new(args.hex);
    if report.metadata.is_custom() {
        info!(hex = %report.hex, "color not in catalog");
    }
    Ok(report)
}

pub fn run_categories() -> Result<CategoryReport> {
    Ok(CategoryReport::new())
}

pub fn run_browse(args: &BrowseArgs) -> Result<BrowseReport> {
    let known = catalog()
        .all_categories()
        .iter()
        .any(|category| category.eq_ignore_ascii_case(args.category.trim()));
    if !known {
        warn!(category = %args.category, "unknown category");
    }
    Ok(BrowseReport::new(&args.category, args.limit))
}

/// Print a report in the requested format.
pub fn emit<T: Serialize>(
    format: OutputFormatArg,
    report: &T,
    render: impl Fn(&T) -> Table,
) -> Result<()> {
    match format {
        OutputFormatArg::Table => println!("{}", render(report)),
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
