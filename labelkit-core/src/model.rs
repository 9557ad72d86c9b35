use serde::{Deserialize, Serialize};

/// One customer order as posted by the storefront.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub ref_id: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub labels: Option<Vec<LabelSpec>>,
}

/// One order line item. Every field except the variable texts is optional and
/// falls back to a documented default; an absent variable text means the slot
/// is never rendered or sized, even when an override for it was supplied.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelSpec {
    pub size: Option<String>,
    pub color: Option<String>,
    pub corners: Option<Corners>,
    pub notch: Option<Notch>,
    pub font: Option<String>,
    pub var1: Option<String>,
    pub var2: Option<String>,
    pub var3: Option<String>,
    pub var4: Option<String>,
    pub var5: Option<String>,
    pub var6: Option<String>,
    pub var1_size: Option<f64>,
    pub var2_size: Option<f64>,
    pub var3_size: Option<f64>,
    pub var4_size: Option<f64>,
    pub var5_size: Option<f64>,
    pub var6_size: Option<f64>,
    pub positions: Option<PositionOverrides>,
    pub quantity: Option<u32>,
}

/// Explicit per-slot position overrides, in unscaled design units. A supplied
/// pair replaces the computed default wholesale.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionOverrides {
    pub var1: Option<Position>,
    pub var2: Option<Position>,
    pub var3: Option<Position>,
    pub var4: Option<Position>,
    pub var5: Option<Position>,
    pub var6: Option<Position>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corners {
    #[default]
    Squared,
    Rounded,
}

impl Corners {
    pub fn as_str(self) -> &'static str {
        match self {
            Corners::Squared => "squared",
            Corners::Rounded => "rounded",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notch {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
    All,
}

impl Notch {
    pub fn as_str(self) -> &'static str {
        match self {
            Notch::None => "none",
            Notch::Top => "top",
            Notch::Bottom => "bottom",
            Notch::Left => "left",
            Notch::Right => "right",
            Notch::All => "all",
        }
    }
}

/// The six printable variable slots of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarSlot {
    Var1,
    Var2,
    Var3,
    Var4,
    Var5,
    Var6,
}

impl VarSlot {
    pub const ALL: [VarSlot; 6] = [
        VarSlot::Var1,
        VarSlot::Var2,
        VarSlot::Var3,
        VarSlot::Var4,
        VarSlot::Var5,
        VarSlot::Var6,
    ];

    /// Zero-based slot index (var1 -> 0).
    pub fn index(self) -> usize {
        match self {
            VarSlot::Var1 => 0,
            VarSlot::Var2 => 1,
            VarSlot::Var3 => 2,
            VarSlot::Var4 => 3,
            VarSlot::Var5 => 4,
            VarSlot::Var6 => 5,
        }
    }
}

impl LabelSpec {
    /// The printable text of a slot. Empty strings count as absent.
    pub fn text(&self, slot: VarSlot) -> Option<&str> {
        let v = match slot {
            VarSlot::Var1 => &self.var1,
            VarSlot::Var2 => &self.var2,
            VarSlot::Var3 => &self.var3,
            VarSlot::Var4 => &self.var4,
            VarSlot::Var5 => &self.var5,
            VarSlot::Var6 => &self.var6,
        };
        v.as_deref().filter(|s| !s.is_empty())
    }

    /// The explicit font size of a slot, if one was supplied.
    pub fn font_size(&self, slot: VarSlot) -> Option<f64> {
        match slot {
            VarSlot::Var1 => self.var1_size,
            VarSlot::Var2 => self.var2_size,
            VarSlot::Var3 => self.var3_size,
            VarSlot::Var4 => self.var4_size,
            VarSlot::Var5 => self.var5_size,
            VarSlot::Var6 => self.var6_size,
        }
    }

    /// The position override of a slot, if one was supplied.
    pub fn position(&self, slot: VarSlot) -> Option<Position> {
        let p = self.positions.as_ref()?;
        match slot {
            VarSlot::Var1 => p.var1,
            VarSlot::Var2 => p.var2,
            VarSlot::Var3 => p.var3,
            VarSlot::Var4 => p.var4,
            VarSlot::Var5 => p.var5,
            VarSlot::Var6 => p.var6,
        }
    }

    /// Physical unit count for this line item (minimum 1).
    pub fn units(&self) -> u32 {
        self.quantity.unwrap_or(1).max(1)
    }
}

/// Label stock size, in unscaled design pixels. Looked up by id, never mutated.
#[derive(Clone, Copy, Debug)]
pub struct SizePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub dims: &'static str,
    pub width: f64,
    pub height: f64,
}

pub const SIZE_22MM: &str = "22mm";
pub const SIZE_30MM_SHORT: &str = "30mm-short";
pub const SIZE_30MM_STANDARD: &str = "30mm-standard";

pub const SIZES: [SizePreset; 4] = [
    SizePreset {
        id: SIZE_22MM,
        name: "22MM",
        dims: "22 x 26 mm",
        width: 120.0,
        height: 140.0,
    },
    SizePreset {
        id: "25mm",
        name: "25MM",
        dims: "25 x 28 mm",
        width: 134.0,
        height: 150.0,
    },
    SizePreset {
        id: SIZE_30MM_SHORT,
        name: "30MM Short",
        dims: "30 x 30 mm",
        width: 160.0,
        height: 160.0,
    },
    SizePreset {
        id: SIZE_30MM_STANDARD,
        name: "30MM Standard",
        dims: "30 x 34 mm",
        width: 160.0,
        height: 182.0,
    },
];

/// Stock color pairing. Only `white-black` draws a visible outline stroke.
#[derive(Clone, Copy, Debug)]
pub struct ColorPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const COLOR_WHITE_BLACK: &str = "white-black";

pub const COLORS: [ColorPreset; 6] = [
    ColorPreset {
        id: "green-white",
        name: "Green/White",
        background: "#2e7d32",
        text: "#ffffff",
    },
    ColorPreset {
        id: "black-white",
        name: "Black/White",
        background: "#1b1b1b",
        text: "#ffffff",
    },
    ColorPreset {
        id: COLOR_WHITE_BLACK,
        name: "White/Black",
        background: "#ffffff",
        text: "#1b1b1b",
    },
    ColorPreset {
        id: "red-white",
        name: "Red/White",
        background: "#c62828",
        text: "#ffffff",
    },
    ColorPreset {
        id: "blue-white",
        name: "Blue/White",
        background: "#1565c0",
        text: "#ffffff",
    },
    ColorPreset {
        id: "yellow-black",
        name: "Yellow/Black",
        background: "#f9a825",
        text: "#1b1b1b",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct FontPreset {
    pub name: &'static str,
    pub family: &'static str,
}

pub const DEFAULT_FONT_NAME: &str = "Calibri (Default)";

pub const FONTS: [FontPreset; 5] = [
    FontPreset {
        name: DEFAULT_FONT_NAME,
        family: "Calibri, sans-serif",
    },
    FontPreset {
        name: "Arial",
        family: "Arial, sans-serif",
    },
    FontPreset {
        name: "Verdana",
        family: "Verdana, sans-serif",
    },
    FontPreset {
        name: "Georgia",
        family: "Georgia, serif",
    },
    FontPreset {
        name: "Courier New",
        family: "Courier New, monospace",
    },
];

/// Look up a size by id; unknown or absent ids fall back to the standard box.
pub fn size_preset(id: Option<&str>) -> &'static SizePreset {
    id.and_then(|id| SIZES.iter().find(|s| s.id.eq_ignore_ascii_case(id)))
        .unwrap_or(&SIZES[3])
}

/// Look up a color pairing by id; unknown or absent ids fall back to green/white.
pub fn color_preset(id: Option<&str>) -> &'static ColorPreset {
    id.and_then(|id| COLORS.iter().find(|c| c.id.eq_ignore_ascii_case(id)))
        .unwrap_or(&COLORS[0])
}

/// Look up a font by display name; unknown or absent names fall back to Calibri.
pub fn font_preset(name: Option<&str>) -> &'static FontPreset {
    name.and_then(|name| FONTS.iter().find(|f| f.name.eq_ignore_ascii_case(name)))
        .unwrap_or(&FONTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_size_falls_back_to_standard() {
        assert_eq!(size_preset(Some("44mm")).id, SIZE_30MM_STANDARD);
        assert_eq!(size_preset(None).width, 160.0);
        assert_eq!(size_preset(None).height, 182.0);
    }

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(size_preset(Some("22MM")).id, SIZE_22MM);
        assert_eq!(color_preset(Some("Green-White")).name, "Green/White");
        assert_eq!(font_preset(Some("arial")).name, "Arial");
    }

    #[test]
    fn absent_color_and_font_default() {
        assert_eq!(color_preset(None).id, "green-white");
        assert_eq!(font_preset(None).name, DEFAULT_FONT_NAME);
        assert_eq!(font_preset(Some("Wingdings")).family, "Calibri, sans-serif");
    }

    #[test]
    fn empty_var_counts_as_absent() {
        let spec = LabelSpec {
            var1: Some(String::new()),
            var2: Some("KEEP".to_string()),
            ..Default::default()
        };
        assert_eq!(spec.text(VarSlot::Var1), None);
        assert_eq!(spec.text(VarSlot::Var2), Some("KEEP"));
    }

    #[test]
    fn quantity_clamps_to_one() {
        assert_eq!(LabelSpec::default().units(), 1);
        let spec = LabelSpec {
            quantity: Some(0),
            ..Default::default()
        };
        assert_eq!(spec.units(), 1);
    }

    #[test]
    fn payload_fields_are_camel_case() {
        let spec: LabelSpec = serde_json::from_str(
            r#"{"size":"22mm","var1":"A","var1Size":14,"positions":{"var1":{"x":10,"y":12}},"quantity":2}"#,
        )
        .unwrap();
        assert_eq!(spec.font_size(VarSlot::Var1), Some(14.0));
        assert_eq!(spec.position(VarSlot::Var1).unwrap().x, 10.0);
        assert_eq!(spec.units(), 2);
    }
}
