// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};

// Absorbs representation error such as 7.000000000000001 before a ceiling.
const CEIL_EPSILON: f64 = 1e-9;

/// How a fractional statistic is brought to a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Half away from zero.
    #[default]
    Nearest,
    /// Ceiling.
    Up,
}

impl RoundingPolicy {
    pub fn apply(&self, value: f64, places: u32) -> f64 {
        match self {
            RoundingPolicy::Nearest => MathUtils::round_to_places(value, places),
            RoundingPolicy::Up => MathUtils::ceil_to_places(value, places),
        }
    }
}

pub struct MathUtils;

impl MathUtils {
    /// Integer mean rounded half-up; 0 for an empty set.
    pub fn rounded_mean(total: u64, count: u64) -> u64 {
        if count == 0 {
            return 0;
        }
        (total * 2 + count) / (count * 2)
    }

    pub fn percentage(part: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (part * 100) as f64 / total as f64
    }

    pub fn round_to_places(value: f64, places: u32) -> f64 {
        let factor = 10f64.powi(places as i32);
        (value * factor).round() / factor
    }

    pub fn ceil_to_places(value: f64, places: u32) -> f64 {
        let factor = 10f64.powi(places as i32);
        ((value * factor) - CEIL_EPSILON).ceil() / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_mean() {
        assert_eq!(MathUtils::rounded_mean(0, 0), 0);
        assert_eq!(MathUtils::rounded_mean(60, 1), 60);
        assert_eq!(MathUtils::rounded_mean(185, 3), 62);
        // 2.5 rounds up
        assert_eq!(MathUtils::rounded_mean(5, 2), 3);
        assert_eq!(MathUtils::rounded_mean(7, 3), 2);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(MathUtils::percentage(0, 0), 0.0);
        assert_eq!(MathUtils::percentage(7, 100), 7.0);
        assert!((MathUtils::percentage(7, 13) - 53.846153).abs() < 1e-5);
    }

    #[test]
    fn test_policies_agree_on_clean_values() {
        for value in [0.0, 7.0, 50.0, 100.0, 12.5] {
            assert_eq!(RoundingPolicy::Nearest.apply(value, 2), value);
            assert_eq!(RoundingPolicy::Up.apply(value, 2), value);
        }
    }

    #[test]
    fn test_policies_diverge() {
        let third = MathUtils::percentage(1, 3);
        assert_eq!(RoundingPolicy::Nearest.apply(third, 2), 33.33);
        assert_eq!(RoundingPolicy::Up.apply(third, 2), 33.34);

        let thirteenths = MathUtils::percentage(7, 13);
        assert_eq!(RoundingPolicy::Nearest.apply(thirteenths, 2), 53.85);
        assert_eq!(RoundingPolicy::Up.apply(thirteenths, 2), 53.85);
    }
}
