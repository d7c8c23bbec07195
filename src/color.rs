use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Fixed palettes
// ---------------------------------------------------------------------------

/// Qualitative "Set2" (ColorBrewer), used for department bars.
pub const SET2: [Color32; 8] = [
    Color32::from_rgb(0x66, 0xc2, 0xa5),
    Color32::from_rgb(0xfc, 0x8d, 0x62),
    Color32::from_rgb(0x8d, 0xa0, 0xcb),
    Color32::from_rgb(0xe7, 0x8a, 0xc3),
    Color32::from_rgb(0xa6, 0xd8, 0x54),
    Color32::from_rgb(0xff, 0xd9, 0x2f),
    Color32::from_rgb(0xe5, 0xc4, 0x94),
    Color32::from_rgb(0xb3, 0xb3, 0xb3),
];

/// Qualitative "Pastel", used for the gender series of the scatter plot.
pub const PASTEL: [Color32; 11] = [
    Color32::from_rgb(102, 197, 204),
    Color32::from_rgb(246, 207, 113),
    Color32::from_rgb(248, 156, 116),
    Color32::from_rgb(220, 176, 242),
    Color32::from_rgb(135, 197, 95),
    Color32::from_rgb(158, 185, 243),
    Color32::from_rgb(254, 136, 177),
    Color32::from_rgb(201, 219, 116),
    Color32::from_rgb(139, 224, 164),
    Color32::from_rgb(180, 151, 231),
    Color32::from_rgb(179, 179, 179),
];

const BLUES_LOW: (u8, u8, u8) = (198, 219, 239);
const BLUES_HIGH: (u8, u8, u8) = (8, 48, 107);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

fn linear(rgb: (u8, u8, u8)) -> LinSrgb {
    Srgb::new(rgb.0, rgb.1, rgb.2).into_format::<f32>().into_linear()
}

/// Continuous "Blues" scale: `t = 0` is the lightest blue, `t = 1` the darkest.
pub fn blues(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) as f32 } else { 0.0 };
    let mixed = linear(BLUES_LOW).mix(linear(BLUES_HIGH), t);
    to_color32(Srgb::from_linear(mixed))
}

// ---------------------------------------------------------------------------
// Color mapping: category value → Color32
// ---------------------------------------------------------------------------

/// Maps the sorted distinct values of a category column to colours.
///
/// Values take palette entries in order; when the palette runs out the whole
/// mapping switches to evenly spaced hues so every value stays distinct.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(values: &BTreeSet<String>, palette: &[Color32]) -> Self {
        let colors = if values.len() <= palette.len() {
            palette.to_vec()
        } else {
            generate_palette(values.len())
        };
        let mapping = values.iter().cloned().zip(colors).collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a given value.
    pub fn color_for(&self, value: &str) -> Color32 {
        self.mapping.get(value).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn palette_entries_follow_sorted_values() {
        let cm = ColorMap::new(&set(&["Sales", "Engineering"]), &SET2);
        assert_eq!(cm.color_for("Engineering"), SET2[0]);
        assert_eq!(cm.color_for("Sales"), SET2[1]);
        assert_eq!(cm.color_for("Legal"), Color32::GRAY);
    }

    #[test]
    fn overflow_switches_to_generated_hues() {
        let values: BTreeSet<String> = (0..12).map(|i| format!("d{i:02}")).collect();
        let cm = ColorMap::new(&values, &SET2);
        let distinct: BTreeSet<[u8; 4]> = values
            .iter()
            .map(|v| cm.color_for(v).to_array())
            .collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn blues_scale_darkens() {
        let light = blues(0.0);
        let dark = blues(1.0);
        assert_eq!(light, Color32::from_rgb(198, 219, 239));
        assert_eq!(dark, Color32::from_rgb(8, 48, 107));
        assert!(blues(0.5).r() < light.r());
        assert_eq!(blues(f64::NAN), light);
    }
}
