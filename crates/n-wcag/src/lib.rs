//! # n-wcag — WCAG 2.1 contrast engine
//!
//! Checks a foreground/background pair of hex colors against the WCAG AA
//! minimum contrast requirements.
//!
//! # Architecture
//!
//! ```text
//! "#3b82f6"           "#ffffff"
//!     │                   │
//!     ▼                   ▼
//! color.rs:      parse_color → Rgb            (fails: InvalidColorFormat)
//!     │                   │
//!     ▼                   ▼
//! contrast.rs:   relative_luminance → f64 in [0, 1]
//!     │                   │
//!     └─────────┬─────────┘
//!               ▼
//! contrast.rs:  contrast_ratio → f64 in [1, 21]
//!               │
//!               ▼
//! compliance.rs: classify_compliance → ComplianceResult
//! ```
//!
//! Every stage is a pure function. Only parsing can fail; the rest is total.
//!
//! ```
//! use n_wcag::{Verdict, check_contrast};
//!
//! let result = check_contrast("#3b82f6", "#ffffff").unwrap();
//! assert_eq!(result.ratio, 3.68);
//! assert_eq!(result.normal_text, Verdict::Fail);
//! assert_eq!(result.large_text, Verdict::Pass);
//! ```

pub mod color;
pub mod compliance;
pub mod contrast;
pub mod error;

pub use color::{Rgb, parse_color};
pub use compliance::{
    ComplianceResult, LARGE_TEXT_MIN, NORMAL_TEXT_MIN, UI_COMPONENT_MIN, Verdict,
    classify_compliance,
};
pub use contrast::{contrast_ratio, relative_luminance};
pub use error::{ContrastError, Result};

/// Parse both colors, compute their contrast ratio, and classify it.
///
/// The foreground is parsed first, so when both inputs are malformed the
/// error names the foreground.
///
/// # Errors
///
/// Returns [`ContrastError::InvalidColorFormat`] for the first input that is
/// not a six-digit hex color.
pub fn check_contrast(foreground: &str, background: &str) -> Result<ComplianceResult> {
    let fg = parse_color(foreground)?;
    let bg = parse_color(background)?;

    let ratio = contrast_ratio(relative_luminance(fg), relative_luminance(bg));
    tracing::debug!(%fg, %bg, ratio, "checked contrast");

    Ok(classify_compliance(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blue_on_white() {
        let r = check_contrast("#3b82f6", "#ffffff").unwrap();
        assert_eq!(
            r,
            ComplianceResult {
                ratio: 3.68,
                normal_text: Verdict::Fail,
                large_text: Verdict::Pass,
                ui_components: Verdict::Pass,
            }
        );
    }

    #[test]
    fn black_on_white() {
        let r = check_contrast("#000000", "#ffffff").unwrap();
        assert_eq!(r.ratio, 21.0);
        assert!(r.passes_all());
    }

    #[test]
    fn near_grays_fail_everything() {
        let r = check_contrast("#777777", "#808080").unwrap();
        assert!(r.ratio < 1.5, "ratio: {}", r.ratio);
        assert_eq!(r.normal_text, Verdict::Fail);
        assert_eq!(r.large_text, Verdict::Fail);
        assert_eq!(r.ui_components, Verdict::Fail);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(
            check_contrast("#ffffff", "#3b82f6"),
            check_contrast("#3b82f6", "#ffffff")
        );
    }

    #[test]
    fn mixed_case_and_missing_hash() {
        assert_eq!(
            check_contrast("3B82F6", "FFFFFF"),
            check_contrast("#3b82f6", "#ffffff")
        );
    }

    #[test]
    fn same_color_is_one() {
        let r = check_contrast("#3b82f6", "#3b82f6").unwrap();
        assert_eq!(r.ratio, 1.0);
        assert_eq!(r.large_text, Verdict::Fail);
    }

    #[test]
    fn gray_on_white_passes_normal_text() {
        let r = check_contrast("#767676", "#ffffff").unwrap();
        assert_eq!(r.ratio, 4.54);
        assert!(r.passes_all());
    }

    #[test]
    fn invalid_foreground_is_reported() {
        assert_eq!(
            check_contrast("notacolor", "#ffffff"),
            Err(ContrastError::InvalidColorFormat {
                input: "notacolor".into()
            })
        );
    }

    #[test]
    fn invalid_background_is_reported() {
        assert_eq!(
            check_contrast("#ffffff", "#fff"),
            Err(ContrastError::InvalidColorFormat {
                input: "#fff".into()
            })
        );
    }

    #[test]
    fn foreground_error_wins() {
        let err = check_contrast("bad-fg", "bad-bg").unwrap_err();
        assert_eq!(err.to_string(), "invalid hex color: bad-fg");
    }

    #[test]
    fn repeated_checks_are_bit_identical() {
        let first = check_contrast("#a1a1aa", "#09090b").unwrap();
        for _ in 0..100 {
            let again = check_contrast("#a1a1aa", "#09090b").unwrap();
            assert_eq!(again.ratio.to_bits(), first.ratio.to_bits());
            assert_eq!(again, first);
        }
    }
}
