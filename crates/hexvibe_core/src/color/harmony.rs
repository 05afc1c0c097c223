//! Harmony rules: related colors derived from one base via hue and lightness offsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::convert::{HexColor, Hsl, hsl_to_hex};
use crate::error::HexVibeError;

/// Most colors a harmony ever yields (base included).
pub const MAX_HARMONY_COLORS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    Analogous,
    Complementary,
    Triadic,
    Monochromatic,
}

impl HarmonyRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyRule::Analogous => "analogous",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Triadic => "triadic",
            HarmonyRule::Monochromatic => "monochromatic",
        }
    }

    pub fn all() -> &'static [HarmonyRule] {
        &[
            HarmonyRule::Analogous,
            HarmonyRule::Complementary,
            HarmonyRule::Triadic,
            HarmonyRule::Monochromatic,
        ]
    }
}

impl FromStr for HarmonyRule {
    type Err = HexVibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analogous" => Ok(HarmonyRule::Analogous),
            "complementary" | "complement" => Ok(HarmonyRule::Complementary),
            "triadic" | "triad" => Ok(HarmonyRule::Triadic),
            "monochromatic" | "monochrome" | "mono" => Ok(HarmonyRule::Monochromatic),
            _ => Err(HexVibeError::UnknownHarmony(s.to_string())),
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base color first, then the rule's four derived colors. Never longer than
/// [MAX_HARMONY_COLORS]; callers fill any extra slots themselves.
pub fn generate_harmony(base: &HexColor, rule: HarmonyRule) -> Vec<HexColor> {
    let Hsl { h, s, l } = base.to_hsl();
    let at = |hue_offset: f64, lightness: f64| {
        hsl_to_hex(Hsl::new(shift_hue(h, hue_offset), s, lightness))
    };

    let mut palette = vec![*base];
    match rule {
        HarmonyRule::Analogous => {
            palette.push(at(30.0, l));
            palette.push(at(60.0, l));
            palette.push(at(-30.0, l));
            palette.push(at(-60.0, l));
        }
        HarmonyRule::Complementary => {
            palette.push(at(180.0, l));
            palette.push(at(0.0, offset_lightness(l, 20.0)));
            palette.push(at(180.0, offset_lightness(l, 20.0)));
            palette.push(at(0.0, offset_lightness(l, -20.0)));
        }
        HarmonyRule::Triadic => {
            palette.push(at(120.0, l));
            palette.push(at(240.0, l));
            palette.push(at(120.0, offset_lightness(l, -20.0)));
            palette.push(at(240.0, offset_lightness(l, -20.0)));
        }
        HarmonyRule::Monochromatic => {
            for delta in [-30.0, -15.0, 15.0, 30.0] {
                palette.push(at(0.0, offset_lightness(l, delta)));
            }
        }
    }

    palette.truncate(MAX_HARMONY_COLORS);
    palette
}

/// Hue rotation wrapped into `[0, 360)` in both directions.
fn shift_hue(h: f64, degrees: f64) -> f64 {
    (h + degrees).rem_euclid(360.0)
}

/// Lightness offset clamped to `[0, 100]`, always from the base value.
fn offset_lightness(l: f64, delta: f64) -> f64 {
    (l + delta).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn first_color_is_base() {
        let base = hex("#3A7BD5");
        for rule in HarmonyRule::all() {
            let colors = generate_harmony(&base, *rule);
            assert_eq!(colors[0], base, "{rule}");
            assert_eq!(colors.len(), 5, "{rule}");
        }
    }

    #[test]
    fn complementary_of_red_is_cyan() {
        let colors = generate_harmony(&hex("#FF0000"), HarmonyRule::Complementary);
        assert_eq!(colors[0].to_string(), "#FF0000");
        assert_eq!(colors[1].to_string(), "#00FFFF");
        let hsl = colors[1].to_hsl();
        assert!((hsl.h - 180.0).abs() < 1.0);
        assert!((hsl.s - 100.0).abs() < 1.0);
        assert!((hsl.l - 50.0).abs() < 1.0);
    }

    #[test]
    fn complementary_lightness_steps() {
        let colors = generate_harmony(&hex("#FF0000"), HarmonyRule::Complementary);
        // l = 50 -> 70, 70, 30
        assert!((colors[2].to_hsl().l - 70.0).abs() < 1.0);
        assert!((colors[3].to_hsl().l - 70.0).abs() < 1.0);
        assert!((colors[4].to_hsl().l - 30.0).abs() < 1.0);
    }

    #[test]
    fn analogous_wraps_below_zero() {
        let base = hex("#FF2B00");
        let base_h = base.to_hsl().h;
        assert!(base_h > 5.0 && base_h < 15.0);

        let colors = generate_harmony(&base, HarmonyRule::Analogous);
        assert_eq!(colors.len(), 5);
        for c in &colors {
            let s = c.to_string();
            assert_eq!(s.len(), 7);
            assert!(s.starts_with('#'));
        }
        let minus_30 = colors[3].to_hsl().h;
        let minus_60 = colors[4].to_hsl().h;
        assert!(minus_30 > 300.0, "expected wrap, got {minus_30}");
        assert!(hue_distance(minus_30, base_h - 30.0) < 2.0);
        assert!(hue_distance(minus_60, base_h - 60.0) < 2.0);
        assert!(hue_distance(colors[1].to_hsl().h, base_h + 30.0) < 2.0);
        assert!(hue_distance(colors[2].to_hsl().h, base_h + 60.0) < 2.0);
    }

    #[test]
    fn triadic_hues_and_darker_pair() {
        let base = hex("#FF0000");
        let colors = generate_harmony(&base, HarmonyRule::Triadic);
        assert_eq!(colors[1].to_string(), "#00FF00");
        assert_eq!(colors[2].to_string(), "#0000FF");
        assert!(hue_distance(colors[3].to_hsl().h, 120.0) < 2.0);
        assert!((colors[3].to_hsl().l - 30.0).abs() < 1.0);
        assert!((colors[4].to_hsl().l - 30.0).abs() < 1.0);
    }

    #[test]
    fn monochromatic_clamps_each_color_independently() {
        // #FFCCCC: h = 0, s = 100, l = 90
        let base = hex("#FFCCCC");
        assert!((base.to_hsl().l - 90.0).abs() < 1e-6);

        let colors = generate_harmony(&base, HarmonyRule::Monochromatic);
        assert!((colors[1].to_hsl().l - 60.0).abs() < 1.0);
        assert!((colors[2].to_hsl().l - 75.0).abs() < 1.0);
        // +15 and +30 both clamp to 100 rather than 105 / 120
        assert_eq!(colors[3].to_string(), "#FFFFFF");
        assert_eq!(colors[4].to_string(), "#FFFFFF");
    }

    #[test]
    fn monochromatic_floor_at_black() {
        let colors = generate_harmony(&hex("#1A0000"), HarmonyRule::Monochromatic);
        assert_eq!(colors[1].to_string(), "#000000");
        assert_eq!(colors[2].to_string(), "#000000");
    }

    #[test]
    fn gray_base_stays_gray() {
        let colors = generate_harmony(&hex("#808080"), HarmonyRule::Analogous);
        for c in colors {
            let rgb = c.to_rgb();
            assert_eq!(rgb.r, rgb.g);
            assert_eq!(rgb.g, rgb.b);
        }
    }

    #[test]
    fn rule_parsing() {
        assert_eq!("ANALOGOUS".parse::<HarmonyRule>().unwrap(), HarmonyRule::Analogous);
        assert_eq!("mono".parse::<HarmonyRule>().unwrap(), HarmonyRule::Monochromatic);
        assert_eq!(" Triadic ".parse::<HarmonyRule>().unwrap(), HarmonyRule::Triadic);
        assert!("square".parse::<HarmonyRule>().is_err());
    }
}
