//! Human-readable per-label metadata and the delivery summary payload.

use serde::Serialize;

use crate::model::{color_preset, font_preset, size_preset, LabelSpec};

/// Per-label summary shown beside each scene and sent to the delivery
/// collaborator. Carries no position overrides.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSummary {
    pub size: String,
    pub dimensions: String,
    pub color: String,
    pub font: String,
    pub corners: String,
    pub notch: String,
    pub quantity: u32,
}

impl LabelSummary {
    pub fn from_spec(spec: &LabelSpec) -> Self {
        LabelSummary {
            size: size_preset(spec.size.as_deref()).name.to_string(),
            dimensions: size_preset(spec.size.as_deref()).dims.to_string(),
            color: color_preset(spec.color.as_deref()).name.to_string(),
            font: font_preset(spec.font.as_deref()).name.to_string(),
            corners: spec.corners.unwrap_or_default().as_str().to_string(),
            notch: spec.notch.unwrap_or_default().as_str().to_string(),
            quantity: spec.units(),
        }
    }

    /// Info panel lines rendered next to a scene in the print document.
    pub fn panel_lines(&self) -> Vec<String> {
        vec![
            self.size.clone(),
            self.dimensions.clone(),
            format!("Color: {}", self.color),
            format!("Font: {}", self.font),
            format!("Corners: {}", self.corners),
            format!("Notch: {}", self.notch),
            format!("Quantity: {}", self.quantity),
        ]
    }
}

/// File names of the generated artifacts, relative to the output directory.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactLinks {
    pub export: String,
    pub sheet: String,
    pub document: String,
}

/// Payload handed to the delivery collaborator after the engine has run.
/// Delivery failures never invalidate the artifacts this summarizes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySummary {
    pub ref_id: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub timestamp: String,
    pub submitted_on: String,
    pub total_units: u32,
    pub label_count: usize,
    pub labels: Vec<LabelSummary>,
    pub artifacts: ArtifactLinks,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Corners, Notch};

    #[test]
    fn summary_applies_display_defaults() {
        let s = LabelSummary::from_spec(&LabelSpec::default());
        assert_eq!(s.size, "30MM Standard");
        assert_eq!(s.color, "Green/White");
        assert_eq!(s.font, "Calibri (Default)");
        assert_eq!(s.corners, "squared");
        assert_eq!(s.notch, "none");
        assert_eq!(s.quantity, 1);
    }

    #[test]
    fn panel_lists_every_field() {
        let spec = LabelSpec {
            size: Some("22mm".into()),
            corners: Some(Corners::Rounded),
            notch: Some(Notch::Top),
            quantity: Some(3),
            ..Default::default()
        };
        let lines = LabelSummary::from_spec(&spec).panel_lines();
        assert_eq!(lines[0], "22MM");
        assert_eq!(lines[1], "22 x 26 mm");
        assert_eq!(lines[4], "Corners: rounded");
        assert_eq!(lines[5], "Notch: top");
        assert_eq!(lines[6], "Quantity: 3");
    }
}
