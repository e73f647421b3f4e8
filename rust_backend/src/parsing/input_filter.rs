//! Keystroke filtering for the input boxes.
//!
//! Degrees boxes only take digits. Radians boxes take digits, `/` and `π`.
//! Both truncate at a per-mode maximum length counted in characters.

use super::answer_parser::PI_SYMBOL;
use crate::models::AngleMode;

/// In degrees mode no answer is longer than three characters.
pub const DEFAULT_DEGREES_MAX_LENGTH: usize = 3;
/// In radians mode the longest answer is `11π/6`.
pub const DEFAULT_RADIANS_MAX_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFilter {
    mode: AngleMode,
    max_length: usize,
}

impl InputFilter {
    pub fn new(mode: AngleMode, max_length: usize) -> Self {
        Self { mode, max_length }
    }

    /// Filter with the default maximum length for `mode`.
    pub fn for_mode(mode: AngleMode) -> Self {
        let max_length = match mode {
            AngleMode::Degrees => DEFAULT_DEGREES_MAX_LENGTH,
            AngleMode::Radians => DEFAULT_RADIANS_MAX_LENGTH,
        };
        Self::new(mode, max_length)
    }

    pub fn mode(&self) -> AngleMode {
        self.mode
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn accepts(&self, ch: char) -> bool {
        match self.mode {
            AngleMode::Degrees => ch.is_ascii_digit(),
            AngleMode::Radians => ch.is_ascii_digit() || ch == '/' || ch == PI_SYMBOL,
        }
    }

    /// Append the accepted characters of `typed` to `current`, stopping at
    /// the maximum length.
    pub fn apply(&self, current: &str, typed: &str) -> String {
        let mut result: String = current.chars().take(self.max_length).collect();
        let room = self.max_length - result.chars().count();
        result.extend(typed.chars().filter(|&c| self.accepts(c)).take(room));
        result
    }
}
