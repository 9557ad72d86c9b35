//! Renderer-agnostic scene description for one label.
//!
//! A scene is an ordered list of draw primitives consumed by the markup and
//! print-document backends. The cutout is always an overlaid filled circle;
//! no mask-based variant exists, so no generated mask ids are needed.

use crate::geometry::Geometry;
use crate::layout::{TextAnchor, TextRun};
use crate::model::{ColorPreset, FontPreset, COLOR_WHITE_BLACK};

/// Fill tone of the cutout and notch punch-outs.
pub const PUNCH_FILL: &str = "#ffffff";

#[derive(Clone, Debug)]
pub enum Primitive {
    /// Label background, optionally rounded and optionally outlined.
    Frame {
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: String,
        stroke: Option<String>,
    },
    /// The circular punch-out near the bottom of the label.
    Cutout {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: String,
        stroke: String,
    },
    /// An orientation notch square on the cutout edge.
    Notch {
        x: f64,
        y: f64,
        size: f64,
        fill: String,
    },
    /// One printed variable text run.
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        family: String,
        anchor: TextAnchor,
        fill: String,
    },
}

/// Ordered primitives plus the scaled bounding box of one label.
/// Produced fresh per label and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

/// Assemble the scene for one label. Draw order is fixed: frame, cutout,
/// notches, then text runs in slot order.
pub fn render(
    geometry: &Geometry,
    runs: &[TextRun],
    color: &ColorPreset,
    font: &FontPreset,
) -> Scene {
    let high_contrast = color.id == COLOR_WHITE_BLACK;
    let mut primitives = Vec::with_capacity(2 + geometry.notches.len() + runs.len());

    primitives.push(Primitive::Frame {
        width: geometry.width,
        height: geometry.height,
        corner_radius: geometry.corner_radius,
        fill: color.background.to_string(),
        stroke: high_contrast.then(|| color.text.to_string()),
    });

    // Overlaid circle: stroked in the background color so the punch edge
    // stays visible, black on the white stock.
    let punch_stroke = if high_contrast { color.text } else { color.background };
    primitives.push(Primitive::Cutout {
        cx: geometry.cutout.cx,
        cy: geometry.cutout.cy,
        radius: geometry.cutout.radius,
        fill: PUNCH_FILL.to_string(),
        stroke: punch_stroke.to_string(),
    });
    for notch in &geometry.notches {
        primitives.push(Primitive::Notch {
            x: notch.x,
            y: notch.y,
            size: notch.size,
            fill: PUNCH_FILL.to_string(),
        });
    }

    for run in runs {
        primitives.push(Primitive::Text {
            x: run.x,
            y: run.y,
            content: run.text.clone(),
            font_size: run.font_size,
            family: font.family.to_string(),
            anchor: run.anchor,
            fill: color.text.to_string(),
        });
    }

    Scene {
        width: geometry.width,
        height: geometry.height,
        primitives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use crate::layout::layout;
    use crate::model::{color_preset, font_preset, LabelSpec, Notch};

    fn scene_for(spec: &LabelSpec) -> Scene {
        let geometry = resolve(spec);
        let runs = layout(spec, &geometry);
        render(
            &geometry,
            &runs,
            color_preset(spec.color.as_deref()),
            font_preset(spec.font.as_deref()),
        )
    }

    #[test]
    fn draw_order_is_frame_cutout_notches_text() {
        let spec = LabelSpec {
            notch: Some(Notch::All),
            var1: Some("A".into()),
            ..Default::default()
        };
        let scene = scene_for(&spec);
        assert!(matches!(scene.primitives[0], Primitive::Frame { .. }));
        assert!(matches!(scene.primitives[1], Primitive::Cutout { .. }));
        assert!(matches!(scene.primitives[2], Primitive::Notch { .. }));
        assert!(matches!(scene.primitives[5], Primitive::Notch { .. }));
        assert!(matches!(scene.primitives[6], Primitive::Text { .. }));
        assert_eq!(scene.primitives.len(), 7);
    }

    #[test]
    fn default_color_frame_has_no_outline() {
        let scene = scene_for(&LabelSpec::default());
        let Primitive::Frame { ref fill, ref stroke, .. } = scene.primitives[0] else {
            panic!("first primitive must be the frame");
        };
        assert_eq!(fill, "#2e7d32");
        assert!(stroke.is_none());
    }

    #[test]
    fn white_stock_is_outlined_and_punched_in_black() {
        let spec = LabelSpec {
            color: Some("white-black".into()),
            ..Default::default()
        };
        let scene = scene_for(&spec);
        let Primitive::Frame { ref stroke, .. } = scene.primitives[0] else {
            panic!("first primitive must be the frame");
        };
        assert_eq!(stroke.as_deref(), Some("#1b1b1b"));
        let Primitive::Cutout { ref stroke, .. } = scene.primitives[1] else {
            panic!("second primitive must be the cutout");
        };
        assert_eq!(stroke, "#1b1b1b");
    }

    #[test]
    fn scene_matches_scaled_box() {
        let scene = scene_for(&LabelSpec::default());
        assert_eq!(scene.width, 240.0);
        assert_eq!(scene.height, 273.0);
    }
}
