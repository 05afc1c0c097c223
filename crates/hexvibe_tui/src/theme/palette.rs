//! Chrome palette: semantic color roles for the frame around the swatches.
//!
//! Swatch colors come from the palette being edited; everything else
//! (background, borders, text, status dots) comes from here.

use hexvibe_constant::theme::{dark, light};
use hexvibe_core::{Appearance, Rgb};

/// One full chrome palette for an appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromePalette {
    // --- Surfaces
    /// App background.
    pub background: Rgb,
    /// Header, prompt box, history drawer.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_accent: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
}

impl ChromePalette {
    pub fn dark() -> Self {
        Self {
            background: dark::BACKGROUND.into(),
            surface_background: dark::SURFACE.into(),
            border: dark::BORDER.into(),
            border_focused: dark::PRIMARY.into(),
            text: dark::FOREGROUND.into(),
            text_muted: dark::MUTED_FG.into(),
            text_accent: dark::PRIMARY.into(),
            accent: dark::PRIMARY.into(),
            danger: dark::DANGER.into(),
            success: dark::SUCCESS.into(),
            warning: dark::WARNING.into(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: light::BACKGROUND.into(),
            surface_background: light::SURFACE.into(),
            border: light::BORDER.into(),
            border_focused: light::PRIMARY.into(),
            text: light::FOREGROUND.into(),
            text_muted: light::MUTED_FG.into(),
            text_accent: light::PRIMARY.into(),
            accent: light::PRIMARY.into(),
            danger: light::DANGER.into(),
            success: light::SUCCESS.into(),
            warning: light::WARNING.into(),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

impl Default for ChromePalette {
    fn default() -> Self {
        Self::for_appearance(Appearance::default())
    }
}
