//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Both are defined on gamma-decoded sRGB:
//!
//! - luminance: `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`
//! - contrast:  `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1.0, 21.0]

use crate::color::{Rgb, srgb_to_linear};

/// Rec. 709 luminance weights for red, green, and blue.
pub const LUMINANCE_WEIGHTS: (f64, f64, f64) = (0.2126, 0.7152, 0.0722);

/// Flare offset added to both luminances before dividing.
const FLARE: f64 = 0.05;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
// Unfused multiply-add keeps results identical to other WCAG calculators.
#[allow(clippy::suboptimal_flops)]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    let (wr, wg, wb) = LUMINANCE_WEIGHTS;
    wr * srgb_to_linear(r) + wg * srgb_to_linear(g) + wb * srgb_to_linear(b)
}

/// Compute the WCAG 2.1 contrast ratio between two luminances.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + FLARE) / (darker + FLARE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
