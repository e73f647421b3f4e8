use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::error::UnitCircleError;
use crate::core::{coordinates_for_input_boxes, lookup as core_lookup};
use crate::models::{AngleMode, OrderedPair};
use crate::services::grading::{grade, DEFAULT_RADIANS_TOLERANCE};

pub(crate) fn to_py_err(err: UnitCircleError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn parse_mode(mode: &str) -> PyResult<AngleMode> {
    mode.parse::<AngleMode>().map_err(PyValueError::new_err)
}

/// Expected angle at a canonical point, in "degrees" or "radians".
#[pyfunction]
pub fn lookup(mode: &str, x: f64, y: f64) -> PyResult<f64> {
    core_lookup(parse_mode(mode)?, OrderedPair::new(x, y)).map_err(to_py_err)
}

/// The sixteen canonical points as `(x, y)` tuples, in input-box order.
#[pyfunction]
pub fn input_box_coordinates() -> Vec<(f64, f64)> {
    coordinates_for_input_boxes()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Whether `answer` is the correct angle for the point `(x, y)`.
#[pyfunction]
#[pyo3(signature = (mode, x, y, answer, tolerance = DEFAULT_RADIANS_TOLERANCE))]
pub fn check_answer(mode: &str, x: f64, y: f64, answer: &str, tolerance: f64) -> PyResult<bool> {
    grade(parse_mode(mode)?, OrderedPair::new(x, y), answer, tolerance).map_err(to_py_err)
}
