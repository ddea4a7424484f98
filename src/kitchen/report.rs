// Tue Jan 13 2026 - Alex

use crate::dish::Cuisine;
use crate::kitchen::Kitchen;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Snapshot of a kitchen's per-cuisine tallies and statistics.
///
/// `Display` renders the console layout:
///
/// ```text
/// ITALIAN: 2
/// ...
/// OTHER: 2
///
/// AVERAGE PREP TIME: 62
/// ELABORATE DISHES: 53.85%
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KitchenReport {
    pub cuisine_counts: IndexMap<Cuisine, usize>,
    pub average_prep_time: u64,
    pub elaborate_percentage: f64,
}

impl KitchenReport {
    pub fn from_kitchen(kitchen: &Kitchen) -> Self {
        let mut cuisine_counts: IndexMap<Cuisine, usize> =
            Cuisine::ALL.iter().map(|c| (*c, 0)).collect();
        for dish in kitchen.dishes() {
            if let Some(count) = cuisine_counts.get_mut(&dish.cuisine()) {
                *count += 1;
            }
        }

        Self {
            cuisine_counts,
            average_prep_time: kitchen.average_prep_time(),
            elaborate_percentage: kitchen.elaborate_percentage(),
        }
    }

    pub fn count(&self, cuisine: Cuisine) -> usize {
        self.cuisine_counts.get(&cuisine).copied().unwrap_or(0)
    }

    pub fn total_dishes(&self) -> usize {
        self.cuisine_counts.values().sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for KitchenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cuisine, count) in &self.cuisine_counts {
            writeln!(f, "{}: {}", cuisine, count)?;
        }
        writeln!(f)?;
        writeln!(f, "AVERAGE PREP TIME: {}", self.average_prep_time)?;
        writeln!(f, "ELABORATE DISHES: {:.2}%", self.elaborate_percentage)
    }
}
