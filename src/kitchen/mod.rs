// Tue Jan 13 2026 - Alex

pub mod report;
pub mod shared;

pub use report::KitchenReport;
pub use shared::SharedKitchen;

use crate::bag::Bag;
use crate::config::KitchenConfig;
use crate::dish::{Cuisine, Dish, ElaborateRule};
use crate::utils::math::{MathUtils, RoundingPolicy};
use std::io::{self, Write};

/// Dishes currently in the kitchen plus running totals over them.
///
/// `total_prep_time` and `elaborate_count` are adjusted on every insert and
/// removal and always describe exactly the dishes held in `dishes`. Reads
/// never rescan the collection for them.
#[derive(Debug, Clone)]
pub struct Kitchen {
    dishes: Bag<Dish>,
    elaborate_rule: ElaborateRule,
    rounding: RoundingPolicy,
    total_prep_time: u64,
    elaborate_count: usize,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::with_config(&KitchenConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(&KitchenConfig::default().with_capacity(Some(capacity)))
    }

    pub fn with_config(config: &KitchenConfig) -> Self {
        let dishes = match config.capacity {
            Some(capacity) => Bag::with_capacity(capacity),
            None => Bag::unbounded(),
        };
        Self {
            dishes,
            elaborate_rule: config.elaborate,
            rounding: config.percentage_rounding,
            total_prep_time: 0,
            elaborate_count: 0,
        }
    }

    /// Builds a kitchen from `dishes`, returning it with the number of dishes
    /// that were turned away.
    pub fn from_dishes<I>(config: &KitchenConfig, dishes: I) -> (Self, usize)
    where
        I: IntoIterator<Item = Dish>,
    {
        let mut kitchen = Self::with_config(config);
        let rejected = dishes
            .into_iter()
            .map(|dish| kitchen.add_dish(dish))
            .filter(|added| !added)
            .count();
        (kitchen, rejected)
    }

    pub fn add_dish(&mut self, dish: Dish) -> bool {
        let prep_time = dish.prep_time();
        let elaborate = self.elaborate_rule.matches(&dish);
        let name = dish.name().to_string();

        if let Err(e) = self.dishes.add(dish) {
            log::warn!("Rejected {}: {}", name, e);
            return false;
        }

        self.total_prep_time += u64::from(prep_time);
        if elaborate {
            self.elaborate_count += 1;
        }
        log::debug!("Added {} ({} dishes)", name, self.dishes.len());
        true
    }

    pub fn remove_dish(&mut self, dish: &Dish) -> bool {
        match self.dishes.remove(dish) {
            Some(removed) => {
                self.release(&removed);
                log::debug!("Removed {} ({} dishes)", removed.name(), self.dishes.len());
                true
            }
            None => false,
        }
    }

    pub fn total_prep_time(&self) -> u64 {
        self.total_prep_time
    }

    /// Mean prep time rounded half-up to whole minutes, 0 when empty.
    pub fn average_prep_time(&self) -> u64 {
        MathUtils::rounded_mean(self.total_prep_time, self.dishes.len() as u64)
    }

    pub fn elaborate_count(&self) -> usize {
        self.elaborate_count
    }

    /// Share of elaborate dishes in percent, two decimals, 0.0 when empty.
    /// Decimals are settled by the configured [`RoundingPolicy`].
    pub fn elaborate_percentage(&self) -> f64 {
        let raw = MathUtils::percentage(self.elaborate_count as u64, self.dishes.len() as u64);
        self.rounding.apply(raw, 2)
    }

    /// Counts dishes whose cuisine label is exactly `label`. Unknown labels
    /// count nothing.
    pub fn count_by_category(&self, label: &str) -> usize {
        Cuisine::parse_label(label).map_or(0, |cuisine| self.count_cuisine(cuisine))
    }

    pub fn count_cuisine(&self, cuisine: Cuisine) -> usize {
        self.dishes.iter().filter(|d| d.cuisine() == cuisine).count()
    }

    /// Drops every dish that takes strictly less than `threshold` minutes.
    pub fn remove_below_prep_time(&mut self, threshold: u32) -> usize {
        let removed = self.remove_matching(|d| d.prep_time() < threshold);
        log::info!("Removed {} dishes under {} minutes", removed, threshold);
        removed
    }

    pub fn remove_by_category(&mut self, label: &str) -> usize {
        match Cuisine::parse_label(label) {
            Some(cuisine) => self.remove_cuisine(cuisine),
            None => {
                log::debug!("Ignoring removal for unknown cuisine {:?}", label);
                0
            }
        }
    }

    pub fn remove_cuisine(&mut self, cuisine: Cuisine) -> usize {
        let removed = self.remove_matching(|d| d.cuisine() == cuisine);
        log::info!("Removed {} {} dishes", removed, cuisine);
        removed
    }

    pub fn contains(&self, dish: &Dish) -> bool {
        self.dishes.contains(dish)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.dishes.capacity()
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    pub fn clear(&mut self) {
        self.dishes.clear();
        self.total_prep_time = 0;
        self.elaborate_count = 0;
    }

    pub fn report(&self) -> KitchenReport {
        KitchenReport::from_kitchen(self)
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }

    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_report(&mut handle)
    }

    fn remove_matching<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&Dish) -> bool,
    {
        let removed = self.dishes.remove_where(pred);
        for dish in &removed {
            self.release(dish);
        }
        removed.len()
    }

    fn release(&mut self, dish: &Dish) {
        self.total_prep_time -= u64::from(dish.prep_time());
        if self.elaborate_rule.matches(dish) {
            self.elaborate_count -= 1;
        }
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}
