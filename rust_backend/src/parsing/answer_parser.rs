use std::f64::consts::PI;

use crate::core::error::{UnitCircleError, UnitCircleResult};
use crate::models::AngleMode;

/// The π character as typed into radians boxes.
pub const PI_SYMBOL: char = 'π';

/// Parse an answer typed in the given mode into its numeric value.
pub fn parse_answer(mode: AngleMode, text: &str) -> UnitCircleResult<f64> {
    match mode {
        AngleMode::Degrees => parse_degrees(text),
        AngleMode::Radians => parse_radians(text),
    }
}

/// Parse a degrees answer: a non-empty run of digits.
pub fn parse_degrees(text: &str) -> UnitCircleResult<f64> {
    parse_digits(text.trim(), "degrees")
}

/// Parse a radians answer of the form `[coefficient][π][/denominator]`.
///
/// The coefficient defaults to 1 when `π` is present (`π/2`), and a value
/// without `π` is read as a plain fraction (`1/1` is one radian). `pi` is
/// accepted as an ASCII spelling of `π`.
///
/// # Examples
///
/// ```
/// use unit_circle::parsing::parse_radians;
///
/// let value = parse_radians("11π/6").unwrap();
/// assert!((value - 11.0 * std::f64::consts::PI / 6.0).abs() < 1e-12);
/// assert!(parse_radians("π/0").is_err());
/// ```
pub fn parse_radians(text: &str) -> UnitCircleResult<f64> {
    let normalized = text.trim().to_lowercase().replace("pi", "π");
    if normalized.is_empty() {
        return Err(UnitCircleError::InvalidAnswer(
            "Empty radians answer".to_string(),
        ));
    }

    let (numerator, denominator) = match normalized.split_once('/') {
        Some((numerator, denominator)) => (numerator, Some(denominator)),
        None => (normalized.as_str(), None),
    };

    let (coefficient, has_pi) = match numerator.strip_suffix(PI_SYMBOL) {
        Some(coefficient) => (coefficient, true),
        None => (numerator, false),
    };

    let coefficient = match (coefficient.is_empty(), has_pi) {
        (true, true) => 1.0,
        (true, false) => {
            return Err(UnitCircleError::InvalidAnswer(format!(
                "Missing numerator in '{}'",
                text
            )))
        }
        (false, _) => parse_digits(coefficient, "radians")?,
    };

    let mut value = if has_pi { coefficient * PI } else { coefficient };

    if let Some(denominator) = denominator {
        let denominator = parse_digits(denominator, "radians")?;
        if denominator == 0.0 {
            return Err(UnitCircleError::InvalidAnswer(format!(
                "Zero denominator in '{}'",
                text
            )));
        }
        value /= denominator;
    }

    Ok(value)
}

fn parse_digits(text: &str, mode: &str) -> UnitCircleResult<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(UnitCircleError::InvalidAnswer(format!(
            "'{}' is not a valid {} value",
            text, mode
        )));
    }
    text.parse::<u32>()
        .map(f64::from)
        .map_err(|e| UnitCircleError::InvalidAnswer(format!("'{}': {}", text, e)))
}
