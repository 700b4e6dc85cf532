//! Hex color parsing.
//!
//! Accepts exactly one format: six hex digits with an optional leading `#`,
//! case-insensitive. Shorthand (`#abc`), alpha (`#rrggbbaa`), and named or
//! functional notations are rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ContrastError, Result};

/// `#RRGGBB` with the `#` optional. Anchored at both ends so trailing
/// whitespace or newlines are rejected.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern is valid")
});

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color. The channel type enforces the 0–255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a `#RRGGBB` (or `RRGGBB`) string into an [`Rgb`].
///
/// # Errors
///
/// Returns [`ContrastError::InvalidColorFormat`] carrying `input` unchanged
/// when it is not exactly six hex digits after an optional `#`.
pub fn parse_color(input: &str) -> Result<Rgb> {
    let Some(caps) = HEX_COLOR.captures(input) else {
        tracing::debug!(input, "rejected color input");
        return Err(ContrastError::invalid_color(input));
    };

    let channel = |idx: usize| {
        u8::from_str_radix(&caps[idx], 16).map_err(|_| ContrastError::invalid_color(input))
    };

    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

// ─── Transfer Function ───────────────────────────────────────────────────────

/// sRGB gamma curve breakpoint as written in WCAG 2.x.
///
/// IEC 61966-2-1 uses 0.04045. No 8-bit channel lands between the two, so
/// either gives the same luminance for parsed colors; the WCAG value is kept.
pub const SRGB_LINEAR_BREAKPOINT: f64 = 0.039_28;

/// sRGB transfer function: gamma-encoded (0.0–1.0) → linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_BREAKPOINT {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
