//! Input validation for the classification engine.

use crate::error::ClassifyError;

/// Minimum trimmed length accepted, in characters.
pub const MIN_LENGTH: usize = 10;

/// Maximum trimmed length accepted, in characters.
pub const MAX_LENGTH: usize = 5000;

/// Only this many leading characters feed the scorers; longer text is
/// truncated for analysis, never rejected.
pub const ANALYSIS_WINDOW_CHARS: usize = 512;

/// A validated, trimmed text string. Constructed per request, immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationInput {
    text: String,
}

impl ClassificationInput {
    /// Validate raw caller text. Lengths are counted in characters, not
    /// bytes — input is arbitrary UTF-8.
    pub fn new(raw: &str) -> Result<Self, ClassifyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClassifyError::Empty);
        }
        let length = trimmed.chars().count();
        if length < MIN_LENGTH {
            return Err(ClassifyError::TooShort { min: MIN_LENGTH });
        }
        if length > MAX_LENGTH {
            return Err(ClassifyError::TooLong { max: MAX_LENGTH });
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// The full validated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The leading slice used for scoring.
    pub fn analysis_window(&self) -> String {
        self.text.chars().take(ANALYSIS_WINDOW_CHARS).collect()
    }
}
