//! Color palettes with background, shadow and tile roles
//!
//! The first three entries carry fixed roles: background, shadow, tile.
//! Weighted draws over the whole palette color lattice and blob tiles.

use rand::Rng;

use crate::io::configuration::{DEFAULT_PALETTE, DEFAULT_TILE_WEIGHTS, MIN_PALETTE_COLORS};
use crate::io::error::{Result, invalid_palette};
use crate::math::sampling::weighted_choice;
use crate::spatial::region::Color;

/// Ordered colors plus draw weights for tile coloring
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    weights: Vec<f64>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_default_weights(DEFAULT_PALETTE.to_vec())
    }
}

impl Palette {
    /// Create a palette from explicit colors and weights
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` when fewer than three colors are given, when
    /// the weight count differs from the color count or when a weight is
    /// negative or not finite.
    pub fn new(colors: Vec<Color>, weights: Vec<f64>) -> Result<Self> {
        if colors.len() < MIN_PALETTE_COLORS {
            return Err(invalid_palette(
                &colors.len(),
                &format!("need at least {MIN_PALETTE_COLORS} colors"),
            ));
        }
        if weights.len() != colors.len() {
            return Err(invalid_palette(
                &weights.len(),
                &"one weight per color is required",
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(invalid_palette(bad, &"weights must be finite and >= 0"));
        }
        Ok(Self { colors, weights })
    }

    fn with_default_weights(colors: Vec<Color>) -> Self {
        let weights = (0..colors.len())
            .map(|i| DEFAULT_TILE_WEIGHTS.get(i).copied().unwrap_or(1.0))
            .collect();
        Self { colors, weights }
    }

    /// Parse a comma-separated list of `#rrggbb` or `#rrggbbaa` colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` for malformed entries or fewer than three colors.
    pub fn parse(text: &str) -> Result<Self> {
        let colors = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_hex_color)
            .collect::<Result<Vec<_>>>()?;

        if colors.len() < MIN_PALETTE_COLORS {
            return Err(invalid_palette(
                &text,
                &format!("need at least {MIN_PALETTE_COLORS} colors"),
            ));
        }
        Ok(Self::with_default_weights(colors))
    }

    /// All colors in palette order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Canvas background
    pub fn background(&self) -> Color {
        self.role(0)
    }

    /// Underline and drop shadow color
    pub fn shadow(&self) -> Color {
        self.role(1)
    }

    /// Color of maze tiles
    pub fn tile(&self) -> Color {
        self.role(2)
    }

    /// Darkest palette color, used to outline blobs
    pub fn outline(&self) -> Color {
        self.colors
            .iter()
            .copied()
            .min_by_key(|c| luminance(*c))
            .unwrap_or_default()
    }

    /// Draw a color according to the palette weights
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.role(weighted_choice(&self.weights, rng))
    }

    fn role(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_default()
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional
///
/// # Errors
///
/// Returns `InvalidPalette` for any other length or non-hex digits.
pub fn parse_hex_color(text: &str) -> Result<Color> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid_palette(&text, &"expected #rrggbb or #rrggbbaa"));
    }

    let mut color = [0, 0, 0, u8::MAX];
    for (channel, slot) in color.iter_mut().enumerate().take(digits.len() / 2) {
        let pair = digits
            .get(channel * 2..channel * 2 + 2)
            .ok_or_else(|| invalid_palette(&text, &"truncated color"))?;
        *slot = u8::from_str_radix(pair, 16)
            .map_err(|e| invalid_palette(&text, &format!("bad hex digits '{pair}': {e}")))?;
    }
    Ok(color)
}

// Integer Rec. 601 luma
fn luminance([r, g, b, _]: Color) -> u32 {
    299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)
}
