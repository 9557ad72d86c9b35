//! Row expansion and the tabular export backend.
//!
//! Each physical label unit becomes one row: a spec with quantity N expands
//! to N byte-identical rows, appended in label-list order.

use crate::layout::default_font_size;
use crate::model::{color_preset, font_preset, size_preset, LabelSpec, VarSlot};

/// Fixed column order of the export table.
pub const EXPORT_HEADER: [&str; 15] = [
    "Size", "Color", "VAR1", "VAR2", "VAR3", "VAR4", "VAR5", "VAR6", "VAR1 Size", "VAR2 Size",
    "VAR3 Size", "VAR4 Size", "VAR5 Size", "VAR6 Size", "Font",
];

/// Character widths for a downstream spreadsheet container, one per column.
pub const COLUMN_WIDTHS: [u16; 15] = [15, 12, 15, 15, 15, 15, 15, 15, 10, 10, 10, 10, 10, 10, 18];

/// One flattened export row; cells follow [`EXPORT_HEADER`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub cells: [String; 15],
}

/// Build the single row for one label spec, applying the same defaults the
/// renderer uses. The font-size cells stay empty for absent variables.
pub fn build_row(spec: &LabelSpec) -> ExportRow {
    let mut cells: [String; 15] = std::array::from_fn(|_| String::new());
    cells[0] = size_preset(spec.size.as_deref()).name.to_string();
    cells[1] = color_preset(spec.color.as_deref()).name.to_string();
    for slot in VarSlot::ALL {
        let text = spec.text(slot);
        cells[2 + slot.index()] = text.unwrap_or_default().to_string();
        cells[8 + slot.index()] = match text {
            Some(_) => fmt_size(spec.font_size(slot).unwrap_or_else(|| default_font_size(slot))),
            None => String::new(),
        };
    }
    cells[14] = font_preset(spec.font.as_deref()).name.to_string();
    ExportRow { cells }
}

/// Expand a label list into per-unit rows. The returned unit count always
/// equals the row count.
pub fn expand(labels: &[LabelSpec]) -> (Vec<ExportRow>, u32) {
    let mut rows = Vec::new();
    let mut total_units: u32 = 0;
    for spec in labels {
        let row = build_row(spec);
        let units = spec.units();
        for _ in 0..units {
            rows.push(row.clone());
        }
        total_units += units;
    }
    (rows, total_units)
}

/// Serialize the export as CSV: a leading single-cell reference row, the
/// header row, then the expanded rows. Every cell is quoted and embedded
/// quotes are doubled.
pub fn to_csv(ref_id: &str, rows: &[ExportRow]) -> String {
    let mut out = String::new();
    out.push_str(&csv_cell(&format!("Reference ID: {ref_id}")));
    out.push('\n');
    out.push_str(&join_row(EXPORT_HEADER.iter().copied()));
    out.push('\n');
    for row in rows {
        out.push_str(&join_row(row.cells.iter().map(|c| c.as_str())));
        out.push('\n');
    }
    out
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(csv_cell).collect::<Vec<_>>().join(",")
}

fn csv_cell(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Format a font size cell: whole numbers without a fraction, anything else
/// trimmed to three decimals.
fn fmt_size(v: f64) -> String {
    if (v - v.round()).abs() < 1e-6 {
        format!("{:.0}", v)
    } else {
        format!("{:.3}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
