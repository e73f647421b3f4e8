//! Grading of a single answer against the expected angle.

use log::debug;

use crate::core::error::{UnitCircleError, UnitCircleResult};
use crate::core::lookup::{lookup, lookup_by_id};
use crate::models::{AngleMode, OrderedPair};
use crate::parsing::parse_answer;

/// Absolute tolerance used for radians answers unless configured otherwise.
pub const DEFAULT_RADIANS_TOLERANCE: f64 = 1e-9;

/// Check an answer typed at a canonical point.
///
/// Degrees must match exactly; radians within `tolerance`. An answer that
/// does not parse is simply wrong.
///
/// # Errors
/// * `NotFound` if `pair` is not one of the canonical points
pub fn grade(
    mode: AngleMode,
    pair: OrderedPair,
    answer: &str,
    tolerance: f64,
) -> UnitCircleResult<bool> {
    let expected = lookup(mode, pair)?;
    Ok(answer_matches(mode, expected, answer, tolerance))
}

/// Check an answer typed into the input box with the given id.
pub fn grade_by_id(
    mode: AngleMode,
    id: usize,
    answer: &str,
    tolerance: f64,
) -> UnitCircleResult<bool> {
    let expected = lookup_by_id(mode, id).map_err(|_| UnitCircleError::InvalidInputId(id))?;
    Ok(answer_matches(mode, expected, answer, tolerance))
}

fn answer_matches(mode: AngleMode, expected: f64, answer: &str, tolerance: f64) -> bool {
    let given = match parse_answer(mode, answer) {
        Ok(value) => value,
        Err(e) => {
            debug!("Treating unparsable answer as incorrect: {}", e);
            return false;
        }
    };
    match mode {
        AngleMode::Degrees => given == expected,
        AngleMode::Radians => (given - expected).abs() <= tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{Y_AXIS_POSITIVE_PAIR, X_AXIS_NEGATIVE_PAIR};

    #[test]
    fn test_degrees_grading() {
        let t = DEFAULT_RADIANS_TOLERANCE;
        assert!(grade(AngleMode::Degrees, Y_AXIS_POSITIVE_PAIR, "90", t).unwrap());
        assert!(!grade(AngleMode::Degrees, Y_AXIS_POSITIVE_PAIR, "123", t).unwrap());
        assert!(!grade(AngleMode::Degrees, Y_AXIS_POSITIVE_PAIR, "", t).unwrap());
    }

    #[test]
    fn test_radians_grading() {
        let t = DEFAULT_RADIANS_TOLERANCE;
        assert!(grade(AngleMode::Radians, Y_AXIS_POSITIVE_PAIR, "π/2", t).unwrap());
        assert!(!grade(AngleMode::Radians, Y_AXIS_POSITIVE_PAIR, "1/1", t).unwrap());
        assert!(grade(AngleMode::Radians, X_AXIS_NEGATIVE_PAIR, "π", t).unwrap());
    }

    #[test]
    fn test_non_canonical_pair() {
        let err = grade(AngleMode::Degrees, OrderedPair::new(0.6, 0.8), "53", 0.0).unwrap_err();
        assert!(matches!(err, UnitCircleError::NotFound(_)));
    }

    #[test]
    fn test_grade_by_id() {
        assert!(grade_by_id(AngleMode::Degrees, 13, "120", 0.0).unwrap());
        assert_eq!(
            grade_by_id(AngleMode::Degrees, 16, "0", 0.0),
            Err(UnitCircleError::InvalidInputId(16))
        );
    }
}
