//! Angle model of the unit circle.
//!
//! This module builds the table of canonical points, maps each of them to
//! its expected angle and answers lookups by point or input-box id.

pub mod error;
pub mod lookup;
pub mod table;

pub use error::{UnitCircleError, UnitCircleResult};
pub use lookup::{lookup, lookup_by_id, AngleTable};
pub use table::{coordinates_for_input_boxes, CANONICAL_COUNT};
