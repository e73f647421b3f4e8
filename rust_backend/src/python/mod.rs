//! Python bindings for the unit circle widget.
//!
//! This module exposes the angle lookup, answer grading and the quiz session
//! to Python via PyO3 so the web front end can grade answers in-process.
//!
//! # Modules
//!
//! - [`angles`]: Lookup, canonical coordinates and single-answer checks
//! - [`session`]: The `QuizSession` class

pub mod angles;
pub mod session;

pub use angles::*;
pub use session::*;
