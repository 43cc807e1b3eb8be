//! Hex colors and luminance-based text contrast
//!
//! A `HexColor` is validated at construction, so everything downstream
//! (decoding, contrast, palette queries) can assume a well-formed value.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Luminance at or below this value gets light (white) text
pub const LIGHT_TEXT_THRESHOLD: f64 = 0.5;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("valid regex")
    })
}

/// A validated `#RRGGBB` or `#RGB` color
///
/// The spelling as entered is preserved for display; use [`HexColor::expanded`]
/// for the canonical six-digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub const WHITE: &'static str = "#FFFFFF";

    pub fn parse(s: &str) -> Result<Self> {
        if hex_pattern().is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidColor(s.to_string()))
        }
    }

    pub fn white() -> Self {
        Self(Self::WHITE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Color digits without the leading `#`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    pub fn is_shorthand(&self) -> bool {
        self.digits().len() == 3
    }

    /// Six-digit form; `#RGB` becomes `#RRGGBB`
    pub fn expanded(&self) -> String {
        if self.is_shorthand() {
            let doubled: String = self.digits().chars().flat_map(|c| [c, c]).collect();
            format!("#{}", doubled)
        } else {
            self.0.clone()
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let full = self.expanded();
        // Validated at construction: six ASCII hex digits follow the '#'
        let channel = |i: usize| u8::from_str_radix(&full[1 + i * 2..3 + i * 2], 16).unwrap_or(0);
        Rgb {
            r: channel(0),
            g: channel(1),
            b: channel(2),
        }
    }

    pub fn contrast(&self) -> ContrastDecision {
        ContrastDecision::from_rgb(self.to_rgb())
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Decoded color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Perceptual brightness in [0, 1] using BT.601 weights
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

/// Which foreground text color reads best on a background
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastDecision {
    pub rgb: Rgb,
    pub luminance: f64,
    pub use_light_text: bool,
}

impl ContrastDecision {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let luminance = rgb.luminance();
        Self {
            rgb,
            luminance,
            use_light_text: luminance <= LIGHT_TEXT_THRESHOLD,
        }
    }

    /// Foreground color name: "white" on dark backgrounds, "black" otherwise
    pub fn text_color(&self) -> &'static str {
        if self.use_light_text {
            "white"
        } else {
            "black"
        }
    }
}

/// Validate a hex string and decide its text contrast
pub fn classify(hex: &str) -> Result<ContrastDecision> {
    Ok(HexColor::parse(hex)?.contrast())
}

/// Uniformly random six-digit color, used when the color API is unreachable
pub fn random_color() -> HexColor {
    random_color_with(&mut rand::thread_rng())
}

pub fn random_color_with<R: Rng>(rng: &mut R) -> HexColor {
    let value: u32 = rng.gen_range(0..0xFF_FFFF);
    HexColor(format!("#{:06x}", value))
}
