//! HexVibe chrome theme for the TUI.
//!
//! Two palettes (light and dark) built from the constants in
//! `hexvibe_constant::theme`, selected by the persisted [Appearance].
//!
//! # Example
//!
//! ```ignore
//! use hexvibe_core::Appearance;
//! use hexvibe_tui::theme::ChromePalette;
//!
//! let palette = ChromePalette::for_appearance(Appearance::Dark);
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//! ```

mod palette;

pub use hexvibe_core::{Appearance, Rgb};
pub use palette::ChromePalette;
