use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGBA colour.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// HTML colour names accepted by [`Color::parse_html`].
const NAMED_COLORS: &[(&str, Color)] = &[
    ("red", Color::new(255, 0, 0, 255)),
    ("cyan", Color::new(0, 255, 255, 255)),
    ("blue", Color::new(0, 0, 255, 255)),
    ("darkblue", Color::new(0, 0, 160, 255)),
    ("lightblue", Color::new(173, 216, 230, 255)),
    ("purple", Color::new(128, 0, 128, 255)),
    ("yellow", Color::new(255, 255, 0, 255)),
    ("lime", Color::new(0, 255, 0, 255)),
    ("fuchsia", Color::new(255, 0, 255, 255)),
    ("white", Color::new(255, 255, 255, 255)),
    ("silver", Color::new(192, 192, 192, 255)),
    ("grey", Color::new(128, 128, 128, 255)),
    ("gray", Color::new(128, 128, 128, 255)),
    ("black", Color::new(0, 0, 0, 255)),
    ("orange", Color::new(255, 165, 0, 255)),
    ("brown", Color::new(165, 42, 42, 255)),
    ("maroon", Color::new(128, 0, 0, 255)),
    ("green", Color::new(0, 128, 0, 255)),
    ("olive", Color::new(128, 128, 0, 255)),
    ("navy", Color::new(0, 0, 128, 255)),
    ("teal", Color::new(0, 128, 128, 255)),
    ("aqua", Color::new(0, 255, 255, 255)),
    ("magenta", Color::new(255, 0, 255, 255)),
];

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as 0.0..=1.0 floats, RGBA order.
    pub fn to_normalized(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is required.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("hex colour '{s}' must start with '#'"))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("hex colour '{s}' contains non-hex characters"));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| e.to_string());
        let nibble = |i: usize| {
            u8::from_str_radix(&digits[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|e| e.to_string())
        };

        match digits.len() {
            3 => Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            n => Err(format!(
                "invalid hex colour length {n} in '{s}', expected 3, 4, 6 or 8 digits"
            )),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// HTML-style colour: a `#` hex literal or one of the named colours.
    pub fn parse_html(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        Self::from_name(s).ok_or_else(|| format!("unknown colour '{s}'"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
