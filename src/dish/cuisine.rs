// Tue Jan 13 2026 - Alex

use crate::dish::DishError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cuisine {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    Other,
}

impl Cuisine {
    /// Report order.
    pub const ALL: [Cuisine; 7] = [
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Chinese,
        Cuisine::Indian,
        Cuisine::American,
        Cuisine::French,
        Cuisine::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Cuisine::Italian => "ITALIAN",
            Cuisine::Mexican => "MEXICAN",
            Cuisine::Chinese => "CHINESE",
            Cuisine::Indian => "INDIAN",
            Cuisine::American => "AMERICAN",
            Cuisine::French => "FRENCH",
            Cuisine::Other => "OTHER",
        }
    }

    /// Exact, case-sensitive lookup. `"other"` is not `OTHER`.
    pub fn parse_label(label: &str) -> Option<Cuisine> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cuisine {
    type Err = DishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| DishError::UnknownCuisine(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for cuisine in Cuisine::ALL {
            assert_eq!(cuisine.label().parse::<Cuisine>(), Ok(cuisine));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Cuisine::parse_label("other"), None);
        assert_eq!(Cuisine::parse_label(" OTHER"), None);
        assert_eq!(
            "DESSERT".parse::<Cuisine>(),
            Err(DishError::UnknownCuisine("DESSERT".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Cuisine::American).unwrap();
        assert_eq!(json, "\"AMERICAN\"");
        let back: Cuisine = serde_json::from_str("\"FRENCH\"").unwrap();
        assert_eq!(back, Cuisine::French);
        assert!(serde_json::from_str::<Cuisine>("\"french\"").is_err());
    }
}
