//! Error type for the contrast pipeline.
//!
//! Only the color parser can fail. Luminance, ratio, and classification are
//! total over well-formed inputs.

use thiserror::Error;

/// Errors produced by [`crate::parse_color`] and [`crate::check_contrast`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContrastError {
    /// The input is not `#RRGGBB` / `RRGGBB` (six hex digits, any case).
    #[error("invalid hex color: {input}")]
    InvalidColorFormat {
        /// The raw string as the caller passed it.
        input: String,
    },
}

impl ContrastError {
    pub(crate) fn invalid_color(input: &str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
        }
    }
}

/// Result alias used throughout `n-wcag`.
pub type Result<T> = std::result::Result<T, ContrastError>;
