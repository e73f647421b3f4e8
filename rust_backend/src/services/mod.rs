//! Grading and session state for the quiz.
//!
//! Services sit between the angle model and the front ends (terminal binary
//! and Python bindings).

pub mod grading;
pub mod quiz;

pub use grading::{grade, grade_by_id, DEFAULT_RADIANS_TOLERANCE};
pub use quiz::QuizSession;
