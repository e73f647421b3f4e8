#[cfg(test)]
mod tests {
    use crate::core::error::UnitCircleError;
    use crate::models::AngleMode;
    use crate::parsing::answer_parser::{parse_answer, parse_degrees, parse_radians};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Degrees answers are plain integers
    #[test]
    fn test_parse_degrees() {
        assert_eq!(parse_degrees("90").unwrap(), 90.0);
        assert_eq!(parse_degrees("0").unwrap(), 0.0);
        assert_eq!(parse_degrees(" 330 ").unwrap(), 330.0);
    }

    #[test]
    fn test_parse_degrees_rejects_non_digits() {
        assert!(matches!(
            parse_degrees(""),
            Err(UnitCircleError::InvalidAnswer(_))
        ));
        assert!(parse_degrees("9O").is_err());
        assert!(parse_degrees("-90").is_err());
        assert!(parse_degrees("π").is_err());
    }

    /// Every canonical radians answer parses to the right multiple of π
    #[test]
    fn test_parse_canonical_radians() {
        let cases = [
            ("0", 0.0),
            ("π/6", PI / 6.0),
            ("π/4", PI / 4.0),
            ("π/3", PI / 3.0),
            ("π/2", FRAC_PI_2),
            ("2π/3", 2.0 * PI / 3.0),
            ("3π/4", 3.0 * PI / 4.0),
            ("5π/6", 5.0 * PI / 6.0),
            ("π", PI),
            ("7π/6", 7.0 * PI / 6.0),
            ("5π/4", 5.0 * PI / 4.0),
            ("4π/3", 4.0 * PI / 3.0),
            ("3π/2", 3.0 * FRAC_PI_2),
            ("5π/3", 5.0 * PI / 3.0),
            ("7π/4", 7.0 * PI / 4.0),
            ("11π/6", 11.0 * PI / 6.0),
        ];
        for (text, expected) in cases {
            let value = parse_radians(text).unwrap();
            assert_relative_eq!(value, expected, epsilon = 1e-12);
        }
    }

    /// A fraction without π is a plain number of radians
    #[test]
    fn test_parse_plain_fraction() {
        assert_eq!(parse_radians("1/1").unwrap(), 1.0);
        assert_eq!(parse_radians("3/2").unwrap(), 1.5);
    }

    #[test]
    fn test_parse_ascii_pi() {
        assert_relative_eq!(parse_radians("pi/2").unwrap(), FRAC_PI_2);
        assert_relative_eq!(parse_radians("3PI/2").unwrap(), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn test_parse_radians_errors() {
        for text in ["", "/", "/2", "π/", "π/0", "2/π", "π2", "ππ", "1/2/3", "π/x"] {
            assert!(
                matches!(parse_radians(text), Err(UnitCircleError::InvalidAnswer(_))),
                "'{}' should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_answer_dispatch() {
        assert_eq!(parse_answer(AngleMode::Degrees, "45").unwrap(), 45.0);
        assert_relative_eq!(
            parse_answer(AngleMode::Radians, "π/4").unwrap(),
            PI / 4.0
        );
        assert!(parse_answer(AngleMode::Degrees, "π/4").is_err());
    }
}
