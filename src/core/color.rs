//! Color resolution: named/RGB lookup, hex formatting, and label text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ColorSpec;

/// Color used for unknown names and malformed specs.
pub const FALLBACK_GRAY: Rgb = Rgb::new(128, 128, 128);

/// Concrete RGB color.
///
/// Serializes as `{"R": r, "G": g, "B": b}`, the shape theme files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    #[serde(rename = "R")]
    pub r: u8,
    /// Green channel.
    #[serde(rename = "G")]
    pub g: u8,
    /// Blue channel.
    #[serde(rename = "B")]
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a tuple.
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Weighted luma scaled by 1000 (`299r + 587g + 114b`).
    ///
    /// Kept scaled so the brightness threshold compares exactly.
    pub fn luma_milli(self) -> u32 {
        u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114
    }

    /// Text color that stays legible on top of this color.
    pub fn contrasting_text(self) -> TextColor {
        contrasting_text_color(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Label color picked for contrast against a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// Dark text for bright backgrounds.
    Black,
    /// Light text for dark backgrounds.
    White,
}

impl TextColor {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }

    /// The color as RGB.
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Black => Rgb::new(0, 0, 0),
            TextColor::White => Rgb::new(255, 255, 255),
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed named-color table, in display order.
static NAMED_COLORS: [(&str, Rgb); 12] = [
    ("DimGray", Rgb::new(105, 105, 105)),
    ("DarkGray", Rgb::new(169, 169, 169)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("LightGray", Rgb::new(211, 211, 211)),
    ("White", Rgb::new(255, 255, 255)),
    ("Black", Rgb::new(0, 0, 0)),
    ("Red", Rgb::new(255, 0, 0)),
    ("Green", Rgb::new(0, 128, 0)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Magenta", Rgb::new(255, 0, 255)),
];

/// All named colors, in display order.
pub fn named_colors() -> &'static [(&'static str, Rgb)] {
    &NAMED_COLORS
}

/// Look up a named color. Case-sensitive.
pub fn named_color(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
}

/// Resolve any spec to concrete RGB. Never fails.
pub fn resolve(spec: &ColorSpec) -> Rgb {
    match spec {
        ColorSpec::Named(named) => named_color(&named.name).unwrap_or(FALLBACK_GRAY),
        ColorSpec::Rgb(color) => color.rgb,
        ColorSpec::Malformed(_) => FALLBACK_GRAY,
    }
}

/// Hex string of the resolved color.
pub fn to_hex(spec: &ColorSpec) -> String {
    resolve(spec).to_hex()
}

/// Human-readable description of a spec.
pub fn display_label(spec: &ColorSpec) -> String {
    match spec {
        ColorSpec::Named(named) => format!("Named Color: {}", named.name),
        ColorSpec::Rgb(color) => color.rgb.to_string(),
        ColorSpec::Malformed(_) => "Invalid Color".to_string(),
    }
}

/// Text drawn on a swatch: the name for named colors, the hex otherwise.
pub fn swatch_label(spec: &ColorSpec) -> String {
    match spec {
        ColorSpec::Named(named) => named.name.clone(),
        _ => to_hex(spec),
    }
}

/// Black text when luma is above 128, white otherwise.
pub fn contrasting_text_color(r: u8, g: u8, b: u8) -> TextColor {
    if Rgb::new(r, g, b).luma_milli() > 128_000 {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Parse `#rrggbb` or `rrggbb`.
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;

    Some(Rgb::new(r, g, b))
}

/// Parse user color input: `#rrggbb`, `rrggbb`, `r,g,b`, or a table name.
pub fn parse_color_input(s: &str) -> Option<Rgb> {
    let s = s.trim();
    if let Some(rgb) = named_color(s) {
        return Some(rgb);
    }
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return None;
        };
        return Some(Rgb::new(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?));
    }
    parse_hex(s)
}
