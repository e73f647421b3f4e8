//! Angle values tagged with the unit they are expressed in.
//!
//! An [`Angle`] remembers the point on the unit circle it was derived from, so
//! a converted angle can still be matched back to its input box. Conversions
//! never mutate; they return a new value. Degrees are always whole numbers
//! (rounded half away from zero), radians are never rounded.

use qtty::{Degree, Degrees, Radian, Radians};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use super::pair::OrderedPair;
use crate::core::error::{UnitCircleError, UnitCircleResult};

/// Unit an angle is expressed (and entered) in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleMode::Degrees => "degrees",
            AngleMode::Radians => "radians",
        }
    }

    /// The other mode.
    pub fn opposite(&self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrees" | "degree" | "deg" => Ok(AngleMode::Degrees),
            "radians" | "radian" | "rad" => Ok(AngleMode::Radians),
            _ => Err(format!(
                "Invalid angle mode: {}. Must be 'degrees' or 'radians'",
                s
            )),
        }
    }
}

/// An angle on the unit circle together with the point it describes.
///
/// # Examples
///
/// ```
/// use unit_circle::models::{Angle, AngleMode, OrderedPair};
///
/// let angle = Angle::from_point(OrderedPair::new(0.0, -1.0)).unwrap();
/// assert_eq!(angle.mode(), AngleMode::Radians);
/// assert_eq!(angle.to_degrees().value(), 270.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angle {
    value: f64,
    mode: AngleMode,
    pair: OrderedPair,
}

impl Angle {
    /// Angle of a point on the unit circle, in radians within `[0, 2π)`.
    ///
    /// `acos(x)` covers the upper half; points with a negative `y` are
    /// reflected to `2π - acos(x)`.
    ///
    /// # Errors
    /// * `DomainError` if `x` is outside `[-1, 1]` or either coordinate is NaN
    pub fn from_point(pair: OrderedPair) -> UnitCircleResult<Self> {
        if !(-1.0..=1.0).contains(&pair.x) || pair.y.is_nan() {
            return Err(UnitCircleError::DomainError(format!(
                "{} is not a point on the unit circle",
                pair
            )));
        }
        Ok(Self::radians_of_point(pair))
    }

    /// Unchecked form of [`Angle::from_point`] for pairs known to be in range.
    pub(crate) fn radians_of_point(pair: OrderedPair) -> Self {
        let upper = pair.x.acos();
        let value = if pair.y < 0.0 { TAU - upper } else { upper };
        Self {
            value,
            mode: AngleMode::Radians,
            pair,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn mode(&self) -> AngleMode {
        self.mode
    }

    /// Point on the unit circle this angle was derived from.
    pub fn pair(&self) -> OrderedPair {
        self.pair
    }

    pub fn to_degrees(&self) -> Self {
        match self.mode {
            AngleMode::Degrees => *self,
            AngleMode::Radians => Self {
                value: Radians::new(self.value).to::<Degree>().value().round(),
                mode: AngleMode::Degrees,
                pair: self.pair,
            },
        }
    }

    pub fn to_radians(&self) -> Self {
        match self.mode {
            AngleMode::Radians => *self,
            AngleMode::Degrees => Self {
                value: Degrees::new(self.value).to::<Radian>().value(),
                mode: AngleMode::Radians,
                pair: self.pair,
            },
        }
    }

    pub fn convert_to(&self, mode: AngleMode) -> Self {
        match mode {
            AngleMode::Degrees => self.to_degrees(),
            AngleMode::Radians => self.to_radians(),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            AngleMode::Degrees => write!(f, "{}°", self.value),
            AngleMode::Radians => write!(f, "{} rad", self.value),
        }
    }
}
