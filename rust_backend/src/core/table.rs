//! The fixed set of points where input boxes are anchored.
//!
//! The table holds the four axis points followed by every sign variant of the
//! 30°, 45° and 60° first-quadrant points. The index of a point in the table
//! is the id of its input box.

use crate::models::OrderedPair;

/// Number of canonical points (and input boxes).
pub const CANONICAL_COUNT: usize = 16;

pub const X_AXIS_POSITIVE_PAIR: OrderedPair = OrderedPair::new(1.0, 0.0);
pub const X_AXIS_NEGATIVE_PAIR: OrderedPair = OrderedPair::new(-1.0, 0.0);
pub const Y_AXIS_POSITIVE_PAIR: OrderedPair = OrderedPair::new(0.0, 1.0);
pub const Y_AXIS_NEGATIVE_PAIR: OrderedPair = OrderedPair::new(0.0, -1.0);

pub fn thirty_degrees_pair() -> OrderedPair {
    OrderedPair::new(3f64.sqrt() / 2.0, 1.0 / 2.0)
}

pub fn forty_five_degrees_pair() -> OrderedPair {
    OrderedPair::new(
        std::f64::consts::SQRT_2 / 2.0,
        std::f64::consts::SQRT_2 / 2.0,
    )
}

pub fn sixty_degrees_pair() -> OrderedPair {
    OrderedPair::new(1.0 / 2.0, 3f64.sqrt() / 2.0)
}

/// Every sign variation of a pair, the pair itself first.
///
/// in: `(1, 1)`
/// out: `[(1, 1), (-1, 1), (1, -1), (-1, -1)]`
pub fn all_sign_variants(pair: OrderedPair) -> [OrderedPair; 4] {
    [pair, pair.neg_x(), pair.neg_y(), pair.neg_y().neg_x()]
}

/// Coordinates for the points where input boxes will be put.
pub fn coordinates_for_input_boxes() -> [OrderedPair; CANONICAL_COUNT] {
    let mut points = [X_AXIS_POSITIVE_PAIR; CANONICAL_COUNT];
    points[1] = X_AXIS_NEGATIVE_PAIR;
    points[2] = Y_AXIS_POSITIVE_PAIR;
    points[3] = Y_AXIS_NEGATIVE_PAIR;

    let quadrant_points = [
        thirty_degrees_pair(),
        forty_five_degrees_pair(),
        sixty_degrees_pair(),
    ];
    for (i, base) in quadrant_points.into_iter().enumerate() {
        let start = 4 + i * 4;
        points[start..start + 4].copy_from_slice(&all_sign_variants(base));
    }

    points
}
