//! WCAG AA classification of a contrast ratio.
//!
//! | Category                         | Minimum |
//! |----------------------------------|---------|
//! | Normal text                      | 4.5:1   |
//! | Large text (>= 18pt, 14pt bold)  | 3:1     |
//! | UI components, graphical objects | 3:1     |
//!
//! Verdicts compare the raw ratio. The two-decimal ratio stored in
//! [`ComplianceResult`] is for display only, so 2.995 reports as `3` yet
//! still fails the 3:1 rules.

use std::fmt;

use serde::Serialize;

/// Minimum ratio for body text.
pub const NORMAL_TEXT_MIN: f64 = 4.5;

/// Minimum ratio for large text (>= 18pt, or >= 14pt bold).
pub const LARGE_TEXT_MIN: f64 = 3.0;

/// Minimum ratio for UI components and graphical objects.
pub const UI_COMPONENT_MIN: f64 = 3.0;

// ─── Verdict ─────────────────────────────────────────────────────────────────

/// Pass/fail outcome for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// `Pass` when `ratio >= threshold`.
    #[inline]
    #[must_use]
    pub fn at_least(ratio: f64, threshold: f64) -> Self {
        if ratio >= threshold { Self::Pass } else { Self::Fail }
    }

    #[inline]
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        })
    }
}

// ─── ComplianceResult ────────────────────────────────────────────────────────

/// The outcome of a contrast check.
///
/// Serializes as
/// `{"ratio": 3.68, "normalText": "fail", "largeText": "pass", "uiComponents": "pass"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    /// Contrast ratio rounded to two decimals.
    pub ratio: f64,
    pub normal_text: Verdict,
    pub large_text: Verdict,
    pub ui_components: Verdict,
}

impl ComplianceResult {
    /// Whether every category passes.
    #[must_use]
    pub const fn passes_all(&self) -> bool {
        self.normal_text.is_pass() && self.large_text.is_pass() && self.ui_components.is_pass()
    }

    /// The normal-text minimum, if the pair falls short of it.
    #[must_use]
    pub const fn shortfall(&self) -> Option<f64> {
        match self.normal_text {
            Verdict::Pass => None,
            Verdict::Fail => Some(NORMAL_TEXT_MIN),
        }
    }
}

/// Round a ratio to two decimals, half away from zero.
#[must_use]
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Classify a contrast ratio against the WCAG AA thresholds.
#[must_use]
pub fn classify_compliance(ratio: f64) -> ComplianceResult {
    ComplianceResult {
        ratio: round_ratio(ratio),
        normal_text: Verdict::at_least(ratio, NORMAL_TEXT_MIN),
        large_text: Verdict::at_least(ratio, LARGE_TEXT_MIN),
        ui_components: Verdict::at_least(ratio, UI_COMPONENT_MIN),
    }
}
