//! Table rendering for command reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chroma_core::contrast::readable_text_color;
use chroma_core::{Rgb, WcagLevel};

use crate::types::{
    BrowseReport, CategoryReport, ColorReport, ContrastReport, HarmonyReport, InfoReport,
    SimulationReport,
};

pub fn color_table(report: &ColorReport) -> Table {
    let mut table = key_value_table();
    table.add_row(vec![label_cell("Swatch"), swatch_cell(&report.hex)]);
    table.add_row(vec![label_cell("HEX"), Cell::new(format!("#{}", report.hex))]);
    table.add_row(vec![
        label_cell("RGB"),
        Cell::new(format!(
            "rgb({}, {}, {})",
            report.rgb.r, report.rgb.g, report.rgb.b
        )),
    ]);
    table.add_row(vec![label_cell("HSL"), Cell::new(&report.hsl)]);
    table.add_row(vec![label_cell("CMYK"), Cell::new(&report.cmyk)]);
    table.add_row(vec![label_cell("Name"), Cell::new(report.name)]);
    table.add_row(vec![label_cell("Category"), Cell::new(report.category)]);
    if let Some(nearest) = report.nearest {
        table.add_row(vec![
            label_cell("Nearest"),
            dim_cell(format!("{} (#{})", nearest.name, nearest.hex)),
        ]);
    }
    table
}

pub fn harmony_table(report: &HarmonyReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Swatch"),
        header_cell("HEX"),
        header_cell("HSL"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, swatch) in report.swatches.iter().enumerate() {
        let name = if swatch.name == "Custom" {
            dim_cell(swatch.name)
        } else {
            Cell::new(swatch.name)
        };
        table.add_row(vec![
            Cell::new(index + 1),
            swatch_cell(&swatch.hex),
            Cell::new(format!("#{}", swatch.hex)),
            Cell::new(&swatch.hsl),
            name,
        ]);
    }
    table
}

pub fn contrast_table(report: &ContrastReport) -> Table {
    let mut table = key_value_table();
    table.add_row(vec![label_cell("Foreground"), swatch_cell(&report.foreground)]);
    table.add_row(vec![label_cell("Background"), swatch_cell(&report.background)]);
    table.add_row(vec![
        label_cell("Ratio"),
        Cell::new(format!("{:.2}:1", report.ratio)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Level"), level_cell(report.level)]);
    table.add_row(vec![label_cell("AA normal text"), check_cell(report.aa_normal)]);
    table.add_row(vec![label_cell("AA large text"), check_cell(report.aa_large)]);
    table.add_row(vec![label_cell("AAA normal text"), check_cell(report.aaa_normal)]);
    table.add_row(vec![label_cell("AAA large text"), check_cell(report.aaa_large)]);
    table.add_row(vec![
        label_cell("Text on background"),
        Cell::new(format!("#{}", report.suggested_text)),
    ]);
    table
}

pub fn simulation_table(report: &SimulationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Vision"),
        header_cell("Swatch"),
        header_cell("HEX"),
        header_cell("Prevalence"),
    ]);
    apply_table_style(&mut table);
    for row in &report.variants {
        table.add_row(vec![
            Cell::new(row.label),
            swatch_cell(&row.hex),
            Cell::new(format!("#{}", row.hex)),
            dim_cell(row.prevalence),
        ]);
    }
    table
}

pub fn info_table(report: &InfoReport) -> Table {
    let mut table = key_value_table();
    table.add_row(vec![label_cell("Swatch"), swatch_cell(&report.hex)]);
    table.add_row(vec![
        label_cell("Name"),
        Cell::new(report.metadata.name).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Category"), Cell::new(report.metadata.category)]);
    table.add_row(vec![label_cell("Psychology"), Cell::new(report.metadata.psychology)]);
    table.add_row(vec![
        label_cell("Use cases"),
        Cell::new(report.metadata.use_cases.join("\n")),
    ]);
    table
}

pub fn categories_table(report: &CategoryReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Colors")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &report.categories {
        table.add_row(vec![Cell::new(summary.category), Cell::new(summary.colors)]);
    }
    table
}

pub fn browse_table(report: &BrowseReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Swatch"),
        header_cell("HEX"),
        header_cell("Name"),
        header_cell("Psychology"),
    ]);
    apply_table_style(&mut table);
    if report.colors.is_empty() {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell("-"),
            dim_cell(format!("no colors in category '{}'", report.category)),
            dim_cell("-"),
        ]);
    }
    for color in &report.colors {
        table.add_row(vec![
            swatch_cell(color.hex),
            Cell::new(format!("#{}", color.hex)),
            Cell::new(color.name),
            dim_cell(color.psychology),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Block filled with the color itself, labelled in whichever of black or
/// white stays readable on it.
fn swatch_cell(hex: &str) -> Cell {
    let Ok(rgb) = Rgb::from_hex(hex) else {
        return dim_cell(hex);
    };
    let text = readable_text_color(rgb);
    Cell::new(format!("  {hex}  "))
        .bg(Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        })
        .fg(Color::Rgb {
            r: text.r,
            g: text.g,
            b: text.b,
        })
}

fn level_cell(level: WcagLevel) -> Cell {
    let color = match level {
        WcagLevel::Aaa | WcagLevel::Aa => Color::Green,
        WcagLevel::AaLarge => Color::Yellow,
        WcagLevel::Fail => Color::Red,
    };
    Cell::new(level).fg(color).add_attribute(Attribute::Bold)
}

fn check_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("pass").fg(Color::Green)
    } else {
        Cell::new("fail").fg(Color::Red)
    }
}
