//! Parsers for answers typed by the learner.
//!
//! # Parsers
//!
//! - [`answer_parser`]: Turn a degrees or radians answer into a number
//! - [`input_filter`]: Restrict the characters a box accepts in each mode
//!
//! # Example
//!
//! ```
//! use unit_circle::models::AngleMode;
//! use unit_circle::parsing::{parse_answer, InputFilter};
//!
//! let filter = InputFilter::for_mode(AngleMode::Radians);
//! let typed = filter.apply("", "π/2 radians");
//! assert_eq!(typed, "π/2");
//! assert!((parse_answer(AngleMode::Radians, &typed).unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

pub mod answer_parser;
pub mod input_filter;

#[cfg(test)]
mod answer_parser_tests;

pub use answer_parser::{parse_answer, parse_degrees, parse_radians, PI_SYMBOL};
pub use input_filter::InputFilter;
