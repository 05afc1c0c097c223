//! Split the terminal area into header, swatch strip, detail line and footer.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: prompt block (border + content + border) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// One line under the swatches with hex / rgb / hsl of the selected slot.
pub const DETAIL_HEIGHT: u16 = 1;

/// Regions for the main screen.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// Swatch strip. May have zero height if the terminal is too small.
    pub swatches: Rect,
    /// Detail line for the selected swatch.
    pub detail: Rect,
    pub footer: Rect,
}

/// Split `area` top to bottom. Swatches take whatever height is left.
pub fn main_splits(area: Rect) -> MainSplits {
    let (header, rest) = vertical_split(area, HEADER_HEIGHT);
    let middle_h = rest.height.saturating_sub(FOOTER_HEIGHT);
    let (middle, footer) = vertical_split(rest, middle_h);
    let swatch_h = middle.height.saturating_sub(DETAIL_HEIGHT);
    let (swatches, detail) = vertical_split(middle, swatch_h);

    MainSplits {
        header,
        swatches: horizontal_padding(swatches),
        detail: horizontal_padding(detail),
        footer,
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let bottom_h = area.height.saturating_sub(top_h);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: bottom_h,
    };
    (top, bottom)
}

/// Bottom-anchored drawer of `height` rows inside `area`, used for history.
pub fn bottom_drawer(area: Rect, height: u16) -> Rect {
    let h = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y.saturating_add(area.height - h),
        width: area.width,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let area = Rect::new(0, 0, 80, 24);
        let s = main_splits(area);
        assert_eq!(s.header.height, HEADER_HEIGHT);
        assert_eq!(s.footer.height, FOOTER_HEIGHT);
        assert_eq!(s.footer.y, 20);
        assert_eq!(s.detail.height, DETAIL_HEIGHT);
        assert_eq!(s.detail.y, 19);
        assert_eq!(s.swatches.y, 2);
        assert_eq!(s.swatches.height, 17);
    }

    #[test]
    fn main_splits_tiny_terminal() {
        let s = main_splits(Rect::new(0, 0, 80, 3));
        assert_eq!(s.header.height, HEADER_HEIGHT);
        assert_eq!(s.swatches.height, 0);
        assert_eq!(s.detail.height, 0);
        assert_eq!(s.footer.height, 1);
    }

    #[test]
    fn vertical_split_larger_than_area() {
        let (top, bottom) = vertical_split(Rect::new(0, 0, 80, 5), 10);
        assert_eq!(top.height, 5);
        assert_eq!(bottom.height, 0);
    }

    #[test]
    fn drawer_sits_at_bottom() {
        let d = bottom_drawer(Rect::new(0, 2, 80, 20), 8);
        assert_eq!(d.y, 14);
        assert_eq!(d.height, 8);
        let clamped = bottom_drawer(Rect::new(0, 0, 80, 4), 8);
        assert_eq!(clamped.height, 4);
        assert_eq!(clamped.y, 0);
    }
}
