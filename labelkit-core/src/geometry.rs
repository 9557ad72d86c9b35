//! Geometry resolver: turns a label spec into absolute, scaled coordinates.
//!
//! All layout math runs in unscaled design units first and is multiplied by
//! [`RENDER_SCALE`] at the end, so proportions hold at any pixel target.

use crate::model::{
    LabelSpec, Notch, Position, SizePreset, VarSlot, size_preset, Corners, SIZE_22MM,
};

/// Uniform scale applied to every linear dimension.
pub const RENDER_SCALE: f64 = 1.5;

/// Cutout circle radius in design units.
const CUTOUT_RADIUS: f64 = 36.0;
/// Smaller cutout for the 22mm stock.
const CUTOUT_RADIUS_22MM: f64 = 24.0;
/// Vertical center of the cutout as a fraction of label height.
const CUTOUT_CENTER_RATIO: f64 = 0.68;
/// Corner radius when the label is rounded.
const CORNER_RADIUS: f64 = 8.0;
/// Side length of an orientation notch square.
const NOTCH_SIZE: f64 = 10.0;

/// Default y positions of the three stacked top lines (var1..var3).
const TOP_LINE_Y: [f64; 3] = [20.0, 38.0, 54.0];
/// Vertical clearance between var4 and the top of the cutout.
const ABOVE_CUTOUT_GAP: f64 = 16.0;
/// Horizontal reach of the flanking pair (var5/var6) from center.
const FLANK_OFFSET: f64 = 50.0;
const FLANK_OFFSET_22MM: f64 = 28.0;
/// How far above the cutout center the flanking pair sits.
const FLANK_RISE: f64 = 28.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// An orientation notch square, stored by its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Fully resolved label geometry. All values are scaled absolute coordinates.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub size: &'static SizePreset,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub cutout: Circle,
    pub notches: Vec<Square>,
    positions: [Point; 6],
}

impl Geometry {
    /// Resolved (default or overridden) position of a variable slot.
    pub fn position(&self, slot: VarSlot) -> Point {
        self.positions[slot.index()]
    }
}

/// Compute the geometry for one label spec.
pub fn resolve(spec: &LabelSpec) -> Geometry {
    let size = size_preset(spec.size.as_deref());
    let w = size.width;
    let h = size.height;

    let cutout_radius = if size.id == SIZE_22MM {
        CUTOUT_RADIUS_22MM
    } else {
        CUTOUT_RADIUS
    };
    let cutout_cx = w / 2.0;
    let cutout_cy = h * CUTOUT_CENTER_RATIO;

    let corner_radius = match spec.corners.unwrap_or_default() {
        Corners::Rounded => CORNER_RADIUS,
        Corners::Squared => 0.0,
    };

    let flank = if size.id == SIZE_22MM {
        FLANK_OFFSET_22MM
    } else {
        FLANK_OFFSET
    };
    let defaults = [
        Point { x: w / 2.0, y: TOP_LINE_Y[0] },
        Point { x: w / 2.0, y: TOP_LINE_Y[1] },
        Point { x: w / 2.0, y: TOP_LINE_Y[2] },
        Point {
            x: w / 2.0,
            y: cutout_cy - cutout_radius - ABOVE_CUTOUT_GAP,
        },
        Point {
            x: w / 2.0 - flank,
            y: cutout_cy - FLANK_RISE,
        },
        Point {
            x: w / 2.0 + flank,
            y: cutout_cy - FLANK_RISE,
        },
    ];

    let mut positions = [Point { x: 0.0, y: 0.0 }; 6];
    for slot in VarSlot::ALL {
        // An override replaces the default pair wholesale.
        let p = match spec.position(slot) {
            Some(Position { x, y }) => Point { x, y },
            None => defaults[slot.index()],
        };
        positions[slot.index()] = scale_point(p);
    }

    let notches = notch_squares(spec.notch.unwrap_or_default(), cutout_cx, cutout_cy, cutout_radius)
        .into_iter()
        .map(|s| Square {
            x: s.x * RENDER_SCALE,
            y: s.y * RENDER_SCALE,
            size: s.size * RENDER_SCALE,
        })
        .collect();

    Geometry {
        size,
        width: w * RENDER_SCALE,
        height: h * RENDER_SCALE,
        corner_radius: corner_radius * RENDER_SCALE,
        cutout: Circle {
            cx: cutout_cx * RENDER_SCALE,
            cy: cutout_cy * RENDER_SCALE,
            radius: cutout_radius * RENDER_SCALE,
        },
        notches,
        positions,
    }
}

fn scale_point(p: Point) -> Point {
    Point {
        x: p.x * RENDER_SCALE,
        y: p.y * RENDER_SCALE,
    }
}

/// Notch squares centered on the cutout's tangent points, in design units.
/// Emitted in a stable top/bottom/left/right order.
fn notch_squares(notch: Notch, cx: f64, cy: f64, r: f64) -> Vec<Square> {
    let centered = |x: f64, y: f64| Square {
        x: x - NOTCH_SIZE / 2.0,
        y: y - NOTCH_SIZE / 2.0,
        size: NOTCH_SIZE,
    };
    let top = centered(cx, cy - r);
    let bottom = centered(cx, cy + r);
    let left = centered(cx - r, cy);
    let right = centered(cx + r, cy);
    match notch {
        Notch::None => Vec::new(),
        Notch::Top => vec![top],
        Notch::Bottom => vec![bottom],
        Notch::Left => vec![left],
        Notch::Right => vec![right],
        Notch::All => vec![top, bottom, left, right],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PositionOverrides;

    fn spec(size: &str) -> LabelSpec {
        LabelSpec {
            size: Some(size.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn small_stock_gets_small_cutout() {
        let g = resolve(&spec("22mm"));
        assert_eq!(g.cutout.radius, 24.0 * RENDER_SCALE);
        let g = resolve(&spec("30mm-standard"));
        assert_eq!(g.cutout.radius, 36.0 * RENDER_SCALE);
    }

    #[test]
    fn unknown_size_resolves_to_standard_box() {
        let g = resolve(&spec("99mm"));
        assert_eq!(g.width, 160.0 * RENDER_SCALE);
        assert_eq!(g.height, 182.0 * RENDER_SCALE);
        assert_eq!(g.size.id, "30mm-standard");
    }

    #[test]
    fn cutout_sits_at_68_percent_height() {
        let g = resolve(&spec("30mm-standard"));
        assert_eq!(g.cutout.cx, 80.0 * RENDER_SCALE);
        assert_eq!(g.cutout.cy, 182.0 * 0.68 * RENDER_SCALE);
    }

    #[test]
    fn corner_radius_only_when_rounded() {
        let mut s = spec("30mm-standard");
        assert_eq!(resolve(&s).corner_radius, 0.0);
        s.corners = Some(Corners::Rounded);
        assert_eq!(resolve(&s).corner_radius, 8.0 * RENDER_SCALE);
    }

    #[test]
    fn notch_all_emits_four_tangent_squares() {
        let mut s = spec("30mm-standard");
        s.notch = Some(Notch::All);
        let g = resolve(&s);
        assert_eq!(g.notches.len(), 4);
        // Top notch is centered on the top tangent point.
        let top = g.notches[0];
        assert_eq!(top.size, 10.0 * RENDER_SCALE);
        assert_eq!(top.x + top.size / 2.0, g.cutout.cx);
        let tangent_y = g.cutout.cy - g.cutout.radius;
        assert!((top.y + top.size / 2.0 - tangent_y).abs() < 1e-9);
    }

    #[test]
    fn single_notch_directions() {
        for (notch, count) in [(Notch::None, 0), (Notch::Left, 1), (Notch::All, 4)] {
            let mut s = spec("30mm-standard");
            s.notch = Some(notch);
            assert_eq!(resolve(&s).notches.len(), count);
        }
    }

    #[test]
    fn override_replaces_only_its_slot() {
        let mut s = spec("30mm-standard");
        s.positions = Some(PositionOverrides {
            var1: Some(Position { x: 10.0, y: 12.0 }),
            ..Default::default()
        });
        let g = resolve(&s);
        assert_eq!(g.position(VarSlot::Var1).x, 10.0 * RENDER_SCALE);
        assert_eq!(g.position(VarSlot::Var1).y, 12.0 * RENDER_SCALE);
        // var2..var6 keep their computed defaults.
        assert_eq!(g.position(VarSlot::Var2).x, 80.0 * RENDER_SCALE);
        assert_eq!(g.position(VarSlot::Var2).y, 38.0 * RENDER_SCALE);
        assert_eq!(g.position(VarSlot::Var5).y, (182.0 * 0.68 - 28.0) * RENDER_SCALE);
    }

    #[test]
    fn flanking_pair_mirrors_around_center() {
        let g = resolve(&spec("30mm-standard"));
        let left = g.position(VarSlot::Var5);
        let right = g.position(VarSlot::Var6);
        assert_eq!(left.y, right.y);
        assert_eq!(g.width - right.x, left.x);
        // Narrower reach on the 22mm stock.
        let g = resolve(&spec("22mm"));
        assert_eq!(g.position(VarSlot::Var5).x, (60.0 - 28.0) * RENDER_SCALE);
    }

    #[test]
    fn var4_clears_the_cutout() {
        let g = resolve(&spec("30mm-standard"));
        let p = g.position(VarSlot::Var4);
        let expected = g.cutout.cy - g.cutout.radius - 16.0 * RENDER_SCALE;
        assert!((p.y - expected).abs() < 1e-9);
    }
}
