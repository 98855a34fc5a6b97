//! Shared rendering helpers and constants.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::core::{resolve, ColorSpec, Rgb};

/// Max width for control names in the list.
pub const CONTROL_NAME_WIDTH: usize = 32;

/// Padding around a swatch label, per side.
pub const SWATCH_PADDING: usize = 2;

/// Colors of the editor's own chrome.
///
/// Fixed dark palette so theme swatches stand out against it.
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub struct Chrome {
    // Base colors
    pub bg_dark: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
    pub bg_selected: Color,

    // Borders
    pub border_dim: Color,

    // Text
    pub text_faint: Color,
    pub text_muted: Color,
    pub text_normal: Color,
    pub text_bright: Color,

    // Accent
    pub accent: Color,

    // Status
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

/// The chrome palette.
pub const CHROME: Chrome = Chrome {
    bg_dark: Color::Rgb(18, 18, 22),
    bg_surface: Color::Rgb(26, 26, 32),
    bg_elevated: Color::Rgb(36, 36, 44),
    bg_selected: Color::Rgb(45, 45, 55),

    border_dim: Color::Rgb(50, 50, 60),

    text_faint: Color::Rgb(55, 55, 65),
    text_muted: Color::Rgb(110, 110, 125),
    text_normal: Color::Rgb(175, 175, 185),
    text_bright: Color::Rgb(230, 230, 235),

    accent: Color::Rgb(80, 200, 200),

    success: Color::Rgb(85, 185, 105),
    error: Color::Rgb(215, 85, 85),
    warning: Color::Rgb(215, 175, 80),
};

/// Terminal color for an RGB value.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Style for a swatch: resolved color behind legible text.
pub fn swatch_style(rgb: Rgb) -> Style {
    Style::default()
        .bg(to_color(rgb))
        .fg(to_color(rgb.contrasting_text().rgb()))
}

/// Style for a spec's swatch.
pub fn spec_swatch_style(spec: &ColorSpec) -> Style {
    swatch_style(resolve(spec))
}

/// Pad a swatch label so swatches line up.
pub fn pad_swatch_label(label: &str, min_width: usize) -> String {
    let pad = " ".repeat(SWATCH_PADDING);
    format!("{pad}{label:<min_width$}{pad}")
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

/// Center a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2)).max(1);
    let height = height.min(area.height.saturating_sub(2)).max(1);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate() {
        assert_eq!(truncate_str("ButtonFace", 20), "ButtonFace");
        assert_eq!(truncate_str("ButtonFace", 6), "Butto…");
        assert_eq!(truncate_str("ButtonFace", 0), "");
    }

    #[test]
    fn swatch_text_contrasts() {
        let dark = swatch_style(Rgb::new(0, 0, 0));
        assert_eq!(dark.fg, Some(Color::Rgb(255, 255, 255)));
        let light = swatch_style(Rgb::new(255, 255, 0));
        assert_eq!(light.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(light.bg, Some(Color::Rgb(255, 255, 0)));
    }

    #[test]
    fn centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        let tiny = Rect::new(0, 0, 10, 5);
        let r = centered_rect(40, 10, tiny);
        assert!(r.width <= 8 && r.height <= 3);
    }

    #[test]
    fn swatch_labels_line_up() {
        assert_eq!(pad_swatch_label("Red", 7), "  Red      ");
        assert_eq!(pad_swatch_label("#ff0000", 7), "  #ff0000  ");
    }
}
