//! Per-learner quiz state.
//!
//! A [`QuizSession`] holds what the widget keeps between keystrokes: the
//! text of each of the sixteen input boxes, which box has focus, which boxes
//! were already answered correctly (and are therefore locked), and the
//! current angle mode. Switching the mode discards everything else.

use log::{debug, info};
use std::collections::BTreeSet;

use super::grading::grade_by_id;
use crate::config::QuizConfig;
use crate::core::error::{UnitCircleError, UnitCircleResult};
use crate::core::table::CANONICAL_COUNT;
use crate::models::AngleMode;
use crate::parsing::InputFilter;

#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    currently_focused_input: Option<usize>,
    user_input_values: [String; CANONICAL_COUNT],
    correct_input_ids: BTreeSet<usize>,
    current_angle_mode: AngleMode,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl QuizSession {
    pub fn new(config: QuizConfig) -> Self {
        let current_angle_mode = config.quiz.default_mode;
        Self {
            config,
            currently_focused_input: None,
            user_input_values: Default::default(),
            correct_input_ids: BTreeSet::new(),
            current_angle_mode,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn current_angle_mode(&self) -> AngleMode {
        self.current_angle_mode
    }

    pub fn currently_focused_input(&self) -> Option<usize> {
        self.currently_focused_input
    }

    pub fn correct_input_ids(&self) -> &BTreeSet<usize> {
        &self.correct_input_ids
    }

    pub fn is_degrees_enabled(&self) -> bool {
        self.current_angle_mode == AngleMode::Degrees
    }

    pub fn is_radians_enabled(&self) -> bool {
        self.current_angle_mode == AngleMode::Radians
    }

    pub fn max_length_for_input_box(&self) -> usize {
        self.config.max_length(self.current_angle_mode)
    }

    fn input_filter(&self) -> InputFilter {
        self.config.input_filter(self.current_angle_mode)
    }

    fn check_id(id: usize) -> UnitCircleResult<usize> {
        if id < CANONICAL_COUNT {
            Ok(id)
        } else {
            Err(UnitCircleError::InvalidInputId(id))
        }
    }

    pub fn focus_input(&mut self, id: usize) -> UnitCircleResult<()> {
        self.currently_focused_input = Some(Self::check_id(id)?);
        Ok(())
    }

    pub fn input_value(&self, id: usize) -> UnitCircleResult<&str> {
        Ok(&self.user_input_values[Self::check_id(id)?])
    }

    /// A box is locked once it holds a correct answer.
    pub fn is_locked(&self, id: usize) -> bool {
        self.correct_input_ids.contains(&id)
    }

    /// Type `text` at the end of a box. Rejected characters are dropped and
    /// the value is cut at the mode's maximum length. Locked boxes ignore
    /// typing. Returns the resulting value.
    pub fn type_into(&mut self, id: usize, text: &str) -> UnitCircleResult<&str> {
        let id = Self::check_id(id)?;
        if !self.is_locked(id) {
            let value = self.input_filter().apply(&self.user_input_values[id], text);
            self.user_input_values[id] = value;
        }
        Ok(&self.user_input_values[id])
    }

    /// Replace the contents of a box, subject to the same filtering as typing.
    pub fn set_input(&mut self, id: usize, text: &str) -> UnitCircleResult<&str> {
        let id = Self::check_id(id)?;
        if !self.is_locked(id) {
            self.user_input_values[id] = self.input_filter().apply("", text);
        }
        Ok(&self.user_input_values[id])
    }

    /// Grade every filled, unlocked box. Returns the ids that became correct.
    pub fn check_answers(&mut self) -> Vec<usize> {
        let mode = self.current_angle_mode;
        let tolerance = self.config.quiz.radians_tolerance;
        let mut newly_correct = Vec::new();

        for (id, value) in self.user_input_values.iter().enumerate() {
            if value.is_empty() || self.correct_input_ids.contains(&id) {
                continue;
            }
            // ids come from the table-sized array, so grading cannot miss
            if let Ok(true) = grade_by_id(mode, id, value, tolerance) {
                newly_correct.push(id);
            } else {
                debug!("Input box {} has incorrect answer '{}'", id, value);
            }
        }

        self.correct_input_ids.extend(newly_correct.iter().copied());
        info!(
            "Checked answers in {} mode: {} new, {}/{} correct",
            mode,
            newly_correct.len(),
            self.correct_input_ids.len(),
            CANONICAL_COUNT
        );
        newly_correct
    }

    /// Reset the session and switch to the other angle mode.
    pub fn switch_angle_mode(&mut self) {
        let angle_mode_to_switch_to = self.current_angle_mode.opposite();
        self.reset();
        self.current_angle_mode = angle_mode_to_switch_to;
        info!("Switched angle mode to {}", angle_mode_to_switch_to);
    }

    /// Clear all answers and focus, keeping the current mode.
    pub fn reset(&mut self) {
        self.currently_focused_input = None;
        self.user_input_values = Default::default();
        self.correct_input_ids.clear();
    }

    pub fn score(&self) -> (usize, usize) {
        (self.correct_input_ids.len(), CANONICAL_COUNT)
    }

    pub fn is_complete(&self) -> bool {
        self.correct_input_ids.len() == CANONICAL_COUNT
    }
}
