//! Expected angle for each canonical point.
//!
//! The table is built once on first use: every canonical point is turned into
//! its radians angle and immediately converted to degrees, so the rounding
//! happens a single time. Lookups scan the sixteen entries linearly and match
//! pairs by exact equality.

use log::debug;
use once_cell::sync::Lazy;

use super::error::{UnitCircleError, UnitCircleResult};
use super::table::{coordinates_for_input_boxes, CANONICAL_COUNT};
use crate::models::{Angle, AngleMode, OrderedPair};

static ANGLE_TABLE: Lazy<AngleTable> = Lazy::new(AngleTable::build);

/// Degrees-mode angles of the canonical points, in table order.
#[derive(Debug, Clone)]
pub struct AngleTable {
    angles: [Angle; CANONICAL_COUNT],
}

impl AngleTable {
    fn build() -> Self {
        let angles =
            coordinates_for_input_boxes().map(|pair| Angle::radians_of_point(pair).to_degrees());
        debug!("Built angle table with {} canonical points", angles.len());
        Self { angles }
    }

    /// Shared table of canonical angles.
    pub fn global() -> &'static AngleTable {
        &ANGLE_TABLE
    }

    pub fn angles(&self) -> &[Angle] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Angle> {
        self.angles.iter()
    }

    /// Index of the entry whose pair equals `pair` exactly.
    pub fn position(&self, pair: OrderedPair) -> Option<usize> {
        self.angles.iter().position(|angle| angle.pair() == pair)
    }

    pub fn find(&self, pair: OrderedPair) -> Option<&Angle> {
        self.position(pair).map(|i| &self.angles[i])
    }

    pub fn get(&self, id: usize) -> Option<&Angle> {
        self.angles.get(id)
    }
}

/// Expected value at a canonical point, expressed in `mode`.
///
/// # Errors
/// * `NotFound` if `pair` is not exactly one of the canonical points
///
/// # Examples
///
/// ```
/// use unit_circle::core::lookup;
/// use unit_circle::models::{AngleMode, OrderedPair};
///
/// assert_eq!(lookup(AngleMode::Degrees, OrderedPair::new(-1.0, 0.0)).unwrap(), 180.0);
/// assert!(lookup(AngleMode::Degrees, OrderedPair::new(0.6, 0.8)).is_err());
/// ```
pub fn lookup(mode: AngleMode, pair: OrderedPair) -> UnitCircleResult<f64> {
    AngleTable::global()
        .find(pair)
        .map(|angle| angle.convert_to(mode).value())
        .ok_or_else(|| UnitCircleError::NotFound(format!("No canonical angle at {}", pair)))
}

/// Expected value for the input box with the given id.
pub fn lookup_by_id(mode: AngleMode, id: usize) -> UnitCircleResult<f64> {
    AngleTable::global()
        .get(id)
        .map(|angle| angle.convert_to(mode).value())
        .ok_or_else(|| UnitCircleError::NotFound(format!("No input box with id {}", id)))
}
