//! Line segments used to draw the axes and the angle spokes of the circle.

use serde::{Deserialize, Serialize};

use super::pair::OrderedPair;

/// Start and end points of a line, enough to describe its slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesOfLine {
    pub start_point: OrderedPair,
    pub end_point: OrderedPair,
}

/// The spoke through an angle and the spoke through its supplement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesOfAngle {
    pub initial_angle: CoordinatesOfLine,
    pub supplementary_angle: CoordinatesOfLine,
}

/// Coordinates to draw the x-axis.
pub const X_AXIS: CoordinatesOfLine = CoordinatesOfLine {
    start_point: OrderedPair::new(-1.0, 0.0),
    end_point: OrderedPair::new(1.0, 0.0),
};

/// Coordinates to draw the y-axis.
pub const Y_AXIS: CoordinatesOfLine = CoordinatesOfLine {
    start_point: OrderedPair::new(0.0, -1.0),
    end_point: OrderedPair::new(0.0, 1.0),
};

/// Orders the coordinates of an angle so both of its spokes can be drawn.
///
/// `positive_point` is the first-quadrant representative. The initial spoke
/// runs from it through the origin to its mirror image; the supplementary
/// spoke runs from the y-axis mirror to the x-axis mirror.
pub fn build_coordinates_of_angle(positive_point: OrderedPair) -> CoordinatesOfAngle {
    CoordinatesOfAngle {
        initial_angle: CoordinatesOfLine {
            start_point: positive_point,
            end_point: positive_point.neg(),
        },
        supplementary_angle: CoordinatesOfLine {
            start_point: positive_point.neg_x(),
            end_point: positive_point.neg_y(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spokes_are_mirrored_through_origin() {
        let p = OrderedPair::new(2f64.sqrt() / 2.0, 2f64.sqrt() / 2.0);
        let coords = build_coordinates_of_angle(p);

        let initial = coords.initial_angle;
        assert_eq!(initial.start_point, p);
        assert_eq!(initial.end_point.x, -initial.start_point.x);
        assert_eq!(initial.end_point.y, -initial.start_point.y);

        let supplementary = coords.supplementary_angle;
        assert_eq!(supplementary.start_point, OrderedPair::new(-p.x, p.y));
        assert_eq!(supplementary.end_point, OrderedPair::new(p.x, -p.y));
    }

    #[test]
    fn test_axes() {
        assert_eq!(X_AXIS.start_point.neg(), X_AXIS.end_point);
        assert_eq!(Y_AXIS.end_point, OrderedPair::new(0.0, 1.0));
    }
}
