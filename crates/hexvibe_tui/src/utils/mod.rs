//! Shared utilities for the HexVibe TUI.
//!
//! - **[constants]**: Spacing, padding, and sizing constants.
//! - **[layout]**: Rect padding, dynamic height, swatch columns, scroll clamp.
//! - **[format]**: Duration and string truncation for status and history rows.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{format_duration, truncate_ellipsis, truncate_with_suffix};
pub use layout::{
    dynamic_height,
    horizontal_padding,
    horizontal_padding_with,
    padding,
    right_aligned_row,
    scroll_with_buffer,
    swatch_columns,
    window_start,
};
