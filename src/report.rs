// SPDX-License-Identifier: MIT
//
// Report rendering for a single contrast check.
//
// The same Report value renders two ways: `Display` produces the boxed
// human-readable summary, `Serialize` produces the JSON object
//
//   { "foreground", "background", "ratio", "normalText", "largeText", "uiComponents" }
//
// Colors are echoed exactly as the user typed them.

use std::fmt;

use n_wcag::{ComplianceResult, LARGE_TEXT_MIN, NORMAL_TEXT_MIN, UI_COMPONENT_MIN, Verdict};
use serde::Serialize;

/// Width of the rule under the report title.
const RULE_WIDTH: usize = 50;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// A finished check, ready to print.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub foreground: &'a str,
    pub background: &'a str,
    #[serde(flatten)]
    pub result: ComplianceResult,
}

impl<'a> Report<'a> {
    pub const fn new(foreground: &'a str, background: &'a str, result: ComplianceResult) -> Self {
        Self {
            foreground,
            background,
            result,
        }
    }

    /// Render in the requested format. Both formats end with a newline.
    pub fn render(&self, format: Format) -> serde_json::Result<String> {
        match format {
            Format::Text => Ok(self.to_string()),
            Format::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

const fn badge(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "✅ Pass",
        Verdict::Fail => "❌ Fail",
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;

        writeln!(f)?;
        writeln!(f, "Contrast Check: {} on {}", self.foreground, self.background)?;
        writeln!(f, "{}", "═".repeat(RULE_WIDTH))?;
        writeln!(f)?;
        writeln!(f, "Contrast Ratio: {}:1", r.ratio)?;
        writeln!(f)?;
        writeln!(f, "WCAG AA Compliance:")?;
        writeln!(f, "  Normal text ({NORMAL_TEXT_MIN}:1): {}", badge(r.normal_text))?;
        writeln!(f, "  Large text  ({LARGE_TEXT_MIN}:1):   {}", badge(r.large_text))?;
        writeln!(f, "  UI elements ({UI_COMPONENT_MIN}:1):   {}", badge(r.ui_components))?;
        writeln!(f)?;

        if let Some(needed) = r.shortfall() {
            writeln!(f, "⚠️  Need {needed}:1 for normal text, have {}:1", r.ratio)?;
            writeln!(
                f,
                "   Consider darkening the foreground or lightening the background."
            )?;
        }

        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use n_wcag::check_contrast;
    use pretty_assertions::assert_eq;

    fn report<'a>(fg: &'a str, bg: &'a str) -> Report<'a> {
        Report::new(fg, bg, check_contrast(fg, bg).unwrap())
    }

    // ── Text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_failing_normal_text_includes_advice() {
        let text = report("#3b82f6", "#ffffff").to_string();
        let expected = format!(
            "\n\
             Contrast Check: #3b82f6 on #ffffff\n\
             {}\n\
             \n\
             Contrast Ratio: 3.68:1\n\
             \n\
             WCAG AA Compliance:\n\
             \x20 Normal text (4.5:1): ❌ Fail\n\
             \x20 Large text  (3:1):   ✅ Pass\n\
             \x20 UI elements (3:1):   ✅ Pass\n\
             \n\
             ⚠️  Need 4.5:1 for normal text, have 3.68:1\n\
             \x20  Consider darkening the foreground or lightening the background.\n",
            "═".repeat(50)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn text_passing_pair_has_no_advice() {
        let text = report("#000000", "#ffffff").to_string();
        assert!(text.contains("Contrast Ratio: 21:1"), "{text}");
        assert!(text.contains("Normal text (4.5:1): ✅ Pass"), "{text}");
        assert!(!text.contains("Need"), "{text}");
    }

    #[test]
    fn text_echoes_input_as_typed() {
        let text = report("FFFFFF", "#000000").to_string();
        assert!(text.contains("Contrast Check: FFFFFF on #000000"), "{text}");
    }

    // ── JSON ──────────────────────────────────────────────────────────────

    #[test]
    fn json_flattens_result() {
        let json = report("#777777", "#808080").render(Format::Json).unwrap();
        assert!(json.ends_with("}\n"), "{json}");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "foreground": "#777777",
                "background": "#808080",
                "ratio": 1.13,
                "normalText": "fail",
                "largeText": "fail",
                "uiComponents": "fail",
            })
        );
    }

    #[test]
    fn render_text_matches_display() {
        let r = report("#767676", "#ffffff");
        assert_eq!(r.render(Format::Text).unwrap(), r.to_string());
    }
}
