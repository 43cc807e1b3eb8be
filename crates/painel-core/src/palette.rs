//! Analogic palette generation
//!
//! Builds the query for the scheme endpoint. The HTTP call itself lives in
//! `api::ColorClient`; this module stays pure.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Number of colors requested per palette
pub const PALETTE_SIZE: u8 = 5;

/// Scheme generation mode understood by the color API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeMode {
    Analogic,
}

impl SchemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analogic => "analogic",
        }
    }
}

/// Query parameters for the scheme endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeQuery {
    /// Base color without the leading `#`
    pub hex: String,
    pub mode: SchemeMode,
    pub count: u8,
}

impl SchemeQuery {
    /// Pairs ready for `reqwest::RequestBuilder::query`
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("hex", self.hex.clone()),
            ("mode", self.mode.as_str().to_string()),
            ("count", self.count.to_string()),
        ]
    }
}

/// Build the scheme query for an analogic five-color palette
pub fn build_scheme_query(base: &HexColor) -> SchemeQuery {
    SchemeQuery {
        hex: base.digits().to_string(),
        mode: SchemeMode::Analogic,
        count: PALETTE_SIZE,
    }
}

/// Ordered colors returned by the scheme endpoint for a base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub base: HexColor,
    pub colors: Vec<HexColor>,
}

impl Palette {
    pub fn new(base: HexColor, colors: Vec<HexColor>) -> Self {
        Self { base, colors }
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
