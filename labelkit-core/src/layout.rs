//! Text layout rules: which variable slots print, at what size and anchor.

use crate::geometry::{Geometry, RENDER_SCALE};
use crate::model::{LabelSpec, VarSlot, SIZE_22MM, SIZE_30MM_SHORT};

/// Default font size for the stacked top lines (var1..var3).
pub const FONT_SIZE_TOP: f64 = 18.0;
/// Default font size for the cutout-adjacent lines (var4..var6).
pub const FONT_SIZE_DETAIL: f64 = 10.0;
/// Rendered size compensation for the font metric overshoot against the
/// physical design unit.
pub const FONT_SIZE_FACTOR: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One positioned piece of printable text. Coordinates and font size are
/// scaled; the text itself is raw and escaped by each output backend.
#[derive(Clone, Debug)]
pub struct TextRun {
    pub slot: VarSlot,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub anchor: TextAnchor,
}

/// Default (pre-scale) font size of a slot, also used for export row cells.
pub fn default_font_size(slot: VarSlot) -> f64 {
    match slot {
        VarSlot::Var1 | VarSlot::Var2 | VarSlot::Var3 => FONT_SIZE_TOP,
        VarSlot::Var4 | VarSlot::Var5 | VarSlot::Var6 => FONT_SIZE_DETAIL,
    }
}

/// Whether a slot is suppressed on the given size variant. The short stocks
/// have no room for the lower top lines.
pub fn suppressed(slot: VarSlot, size_id: &str) -> bool {
    match slot {
        VarSlot::Var2 => size_id == SIZE_30MM_SHORT,
        VarSlot::Var3 => size_id == SIZE_22MM || size_id == SIZE_30MM_SHORT,
        _ => false,
    }
}

fn anchor(slot: VarSlot) -> TextAnchor {
    match slot {
        // var5/var6 flank the cutout: the left one grows leftward, the
        // right one grows rightward.
        VarSlot::Var5 => TextAnchor::End,
        VarSlot::Var6 => TextAnchor::Start,
        _ => TextAnchor::Middle,
    }
}

/// Produce the text runs for one label, in slot order var1..var6.
pub fn layout(spec: &LabelSpec, geometry: &Geometry) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for slot in VarSlot::ALL {
        let Some(text) = spec.text(slot) else {
            continue;
        };
        if suppressed(slot, geometry.size.id) {
            continue;
        }
        let size = spec.font_size(slot).unwrap_or_else(|| default_font_size(slot));
        let pos = geometry.position(slot);
        runs.push(TextRun {
            slot,
            text: text.to_string(),
            x: pos.x,
            y: pos.y,
            font_size: size * RENDER_SCALE * FONT_SIZE_FACTOR,
            anchor: anchor(slot),
        });
    }
    runs
}
