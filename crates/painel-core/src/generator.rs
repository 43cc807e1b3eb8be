//! Color generator state
//!
//! Holds the current color and its text contrast. Every change goes through
//! hex validation; a rejected edit leaves the state as it was.

use tracing::{debug, warn};

use crate::api::ColorApi;
use crate::color::{random_color, ContrastDecision, HexColor};
use crate::error::{Error, Result};
use crate::palette::{build_scheme_query, Palette};

/// Where a generated color came from
#[derive(Debug)]
pub enum Generated {
    /// Chosen by the color API
    Api(HexColor),
    /// The API failed; a local random color was used instead
    Fallback { color: HexColor, reason: Error },
}

impl Generated {
    pub fn color(&self) -> &HexColor {
        match self {
            Self::Api(color) | Self::Fallback { color, .. } => color,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Current color plus its derived contrast
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGenerator {
    current: HexColor,
    contrast: ContrastDecision,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorGenerator {
    /// Start at white
    pub fn new() -> Self {
        Self::with_color(HexColor::white())
    }

    pub fn with_color(color: HexColor) -> Self {
        let contrast = color.contrast();
        Self {
            current: color,
            contrast,
        }
    }

    pub fn current(&self) -> &HexColor {
        &self.current
    }

    pub fn contrast(&self) -> &ContrastDecision {
        &self.contrast
    }

    /// Replace the current color with a user-entered hex string
    pub fn set_color(&mut self, hex: &str) -> Result<&HexColor> {
        let color = HexColor::parse(hex.trim())?;
        self.apply(color);
        Ok(&self.current)
    }

    fn apply(&mut self, color: HexColor) {
        self.contrast = color.contrast();
        self.current = color;
        debug!(
            "Current color {} (luminance {:.3}, {} text)",
            self.current,
            self.contrast.luminance,
            self.contrast.text_color()
        );
    }

    /// Ask the API for a random color, falling back to a local one on failure
    pub async fn generate(&mut self, api: &dyn ColorApi) -> Generated {
        let generated = match api.random_color().await {
            Ok(color) => Generated::Api(color),
            Err(reason) => {
                warn!("Color API failed, using local random color: {}", reason);
                Generated::Fallback {
                    color: random_color(),
                    reason,
                }
            }
        };
        self.apply(generated.color().clone());
        generated
    }

    /// Fetch the analogic palette for the current color
    pub async fn palette(&self, api: &dyn ColorApi) -> Result<Palette> {
        let query = build_scheme_query(&self.current);
        let colors = api.scheme(&query).await?;
        Ok(Palette::new(self.current.clone(), colors))
    }
}
