//! Unit circle angle model.
//!
//! Builds the sixteen canonical points of the unit circle learning widget,
//! maps each to its expected angle in degrees and radians, and grades the
//! answers a learner types into the input boxes.

pub mod config;
pub mod core;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Unit circle Python module
#[cfg(feature = "python")]
#[pymodule]
fn unit_circle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register angle functions
    m.add_function(wrap_pyfunction!(python::lookup, m)?)?;
    m.add_function(wrap_pyfunction!(python::input_box_coordinates, m)?)?;
    m.add_function(wrap_pyfunction!(python::check_answer, m)?)?;

    // Register session class
    m.add_class::<python::PyQuizSession>()?;

    Ok(())
}
