//! Points on the unit circle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair that represents a point on the unit circle or a 2D plane.
///
/// Equality is exact floating point equality on both coordinates. The
/// canonical points are all derived from the same constant expressions, so
/// two pairs describing the same canonical point compare equal bit for bit.
///
/// # Examples
///
/// ```
/// use unit_circle::models::OrderedPair;
///
/// let p = OrderedPair::new(0.5, 3f64.sqrt() / 2.0);
/// assert_eq!(p.neg_x(), OrderedPair::new(-0.5, 3f64.sqrt() / 2.0));
/// assert!((p.radius_squared() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderedPair {
    pub x: f64,
    pub y: f64,
}

impl OrderedPair {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Mirror through the y-axis.
    pub fn neg_x(self) -> Self {
        Self::new(self.x * -1.0, self.y)
    }

    /// Mirror through the x-axis.
    pub fn neg_y(self) -> Self {
        Self::new(self.x, self.y * -1.0)
    }

    /// Mirror through the origin.
    pub fn neg(self) -> Self {
        self.neg_x().neg_y()
    }

    pub fn radius_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl fmt::Display for OrderedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for OrderedPair {
    fn from((x, y): (f64, f64)) -> Self {
        OrderedPair::new(x, y)
    }
}

impl From<OrderedPair> for (f64, f64) {
    fn from(pair: OrderedPair) -> Self {
        (pair.x, pair.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrors() {
        let p = OrderedPair::new(0.25, 0.75);
        assert_eq!(p.neg_x(), OrderedPair::new(-0.25, 0.75));
        assert_eq!(p.neg_y(), OrderedPair::new(0.25, -0.75));
        assert_eq!(p.neg(), OrderedPair::new(-0.25, -0.75));
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderedPair::new(1.0, -0.5).to_string(), "(1, -0.5)");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&OrderedPair::new(0.0, 1.0)).unwrap();
        assert_eq!(json, r#"{"x":0.0,"y":1.0}"#);
    }
}
