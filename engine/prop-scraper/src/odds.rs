//! American moneyline odds to implied probability
//!
//! Probabilities keep the bookmaker margin: the over and under of one line
//! will generally sum to more than 1.

use crate::error::OddsError;

/// Implied probability of a moneyline such as "+150" or "-110"
///
/// * `+N` -> `100 / (N + 100)`
/// * `-N` -> `N / (N + 100)`
/// * `+100` -> exactly `0.5`
pub fn implied_probability(moneyline: &str) -> Result<f64, OddsError> {
    let ml = moneyline.trim();
    if ml == "+100" {
        return Ok(0.5);
    }

    let invalid = || OddsError::Invalid { moneyline: moneyline.to_string() };

    let (positive, digits) = if let Some(digits) = ml.strip_prefix('+') {
        (true, digits)
    } else if let Some(digits) = ml.strip_prefix('-') {
        (false, digits)
    } else {
        return Err(invalid());
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let odds: f64 = digits.parse().map_err(|_| invalid())?;

    if positive {
        Ok(100.0 / (odds + 100.0))
    } else {
        Ok(odds / (odds + 100.0))
    }
}

/// Probability-weighted value: `implied_probability(moneyline) * value`
pub fn expected_value(value: f64, moneyline: &str) -> Result<f64, OddsError> {
    Ok(implied_probability(moneyline)? * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_even_odds_is_exactly_half() {
        assert_eq!(implied_probability("+100").unwrap(), 0.5);
        assert!((implied_probability("-100").unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_positive_moneyline() {
        for n in [105u32, 150, 200, 340, 1000] {
            let expected = 100.0 / (n as f64 + 100.0);
            let p = implied_probability(&format!("+{n}")).unwrap();
            assert!((p - expected).abs() < EPS, "+{n}: {p} != {expected}");
        }
    }

    #[test]
    fn test_negative_moneyline() {
        for n in [105u32, 110, 150, 250, 1000] {
            let expected = n as f64 / (n as f64 + 100.0);
            let p = implied_probability(&format!("-{n}")).unwrap();
            assert!((p - expected).abs() < EPS, "-{n}: {p} != {expected}");
        }
    }

    #[test]
    fn test_sides_are_not_devigged() {
        let over = implied_probability("-110").unwrap();
        let under = implied_probability("-110").unwrap();
        assert!(over + under > 1.0);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!((implied_probability(" -110 ").unwrap() - 110.0 / 210.0).abs() < EPS);
    }

    #[test]
    fn test_invalid_moneylines() {
        for ml in ["", "110", "+", "-", "even", "+1o0", "--110"] {
            assert_eq!(
                implied_probability(ml),
                Err(OddsError::Invalid { moneyline: ml.to_string() }),
                "{ml:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_expected_value() {
        for (value, ml) in [(4.5, "-110"), (2.25, "+120"), (0.0, "-200"), (-1.0, "+100")] {
            let ev = expected_value(value, ml).unwrap();
            assert!((ev - implied_probability(ml).unwrap() * value).abs() < EPS);
        }
        assert!(expected_value(1.0, "n/a").is_err());
    }
}
