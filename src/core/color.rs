// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::ConfigError;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").expect("static regex"));

/// Packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const RED: Rgb = Rgb(0xE57373);
    pub const GREEN: Rgb = Rgb(0x81C784);
    pub const BLUE: Rgb = Rgb(0x64B5F6);
    pub const YELLOW: Rgb = Rgb(0xFFD54F);

    pub const PALETTE: [(&'static str, Rgb); 4] = [
        ("red", Rgb::RED),
        ("green", Rgb::GREEN),
        ("blue", Rgb::BLUE),
        ("yellow", Rgb::YELLOW),
    ];

    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Accepts a palette name or a `#RRGGBB` literal.
    pub fn parse(s: &str) -> Result<Rgb, ConfigError> {
        let s = s.trim();
        if let Some(c) = Self::from_name(s) {
            return Ok(c);
        }

        HEX_COLOR
            .captures(s)
            .and_then(|caps| u32::from_str_radix(&caps[1], 16).ok())
            .map(Rgb)
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }

    pub fn from_name(name: &str) -> Option<Rgb> {
        let name = name.to_lowercase();
        Self::PALETTE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    /// Palette name for this color, if it is one of the palette entries.
    pub fn name(self) -> Option<&'static str> {
        Self::PALETTE.iter().find(|(_, c)| *c == self).map(|(n, _)| *n)
    }

    /// Channel-wise linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(from: Rgb, to: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1) = from.channels();
        let (r2, g2, b2) = to.channels();
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::from_channels(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }

    /// 24-bit ANSI foreground escape.
    pub fn ansi_fg(self) -> String {
        let (r, g, b) = self.channels();
        format!("\x1b[38;2;{r};{g};{b}m")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "#{:06X}", self.0),
        }
    }
}
