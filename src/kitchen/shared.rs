// Tue Jan 13 2026 - Alex

use crate::dish::Dish;
use crate::kitchen::{Kitchen, KitchenReport};
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`Kitchen`] behind one lock, for hosts that touch it from several threads.
///
/// Every call holds the lock for its whole duration, so bulk removals never
/// expose half-updated totals.
#[derive(Clone)]
pub struct SharedKitchen {
    inner: Arc<Mutex<Kitchen>>,
}

impl SharedKitchen {
    pub fn new(kitchen: Kitchen) -> Self {
        Self {
            inner: Arc::new(Mutex::new(kitchen)),
        }
    }

    pub fn add_dish(&self, dish: Dish) -> bool {
        self.inner.lock().add_dish(dish)
    }

    pub fn remove_dish(&self, dish: &Dish) -> bool {
        self.inner.lock().remove_dish(dish)
    }

    pub fn remove_below_prep_time(&self, threshold: u32) -> usize {
        self.inner.lock().remove_below_prep_time(threshold)
    }

    pub fn remove_by_category(&self, label: &str) -> usize {
        self.inner.lock().remove_by_category(label)
    }

    pub fn count_by_category(&self, label: &str) -> usize {
        self.inner.lock().count_by_category(label)
    }

    pub fn total_prep_time(&self) -> u64 {
        self.inner.lock().total_prep_time()
    }

    pub fn average_prep_time(&self) -> u64 {
        self.inner.lock().average_prep_time()
    }

    pub fn elaborate_count(&self) -> usize {
        self.inner.lock().elaborate_count()
    }

    pub fn elaborate_percentage(&self) -> f64 {
        self.inner.lock().elaborate_percentage()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn report(&self) -> KitchenReport {
        self.inner.lock().report()
    }

    /// Runs `f` with exclusive access, for sequences that must not interleave
    /// with other callers.
    pub fn with_lock<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Kitchen) -> R,
    {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KitchenConfig;
    use crate::dish::Cuisine;
    use std::thread;

    #[test]
    fn test_concurrent_adds_keep_totals() {
        let config = KitchenConfig::default().with_capacity(None);
        let shared = SharedKitchen::new(Kitchen::with_config(&config));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let dish = Dish::builder(&format!("Dish {}-{}", t, i))
                            .ingredients(["a", "b", "c", "d", "e"])
                            .prep_time(if i % 2 == 0 { 60 } else { 20 })
                            .cuisine(Cuisine::Chinese)
                            .build()
                            .unwrap();
                        assert!(shared.add_dish(dish));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 100);
        assert_eq!(shared.total_prep_time(), 4 * (13 * 60 + 12 * 20));
        assert_eq!(shared.elaborate_count(), 52);

        assert_eq!(shared.remove_below_prep_time(60), 48);
        assert_eq!(shared.elaborate_percentage(), 100.0);
        assert_eq!(shared.count_by_category("CHINESE"), 52);
    }

    #[test]
    fn test_with_lock() {
        let shared = SharedKitchen::new(Kitchen::new());
        let added = shared.with_lock(|kitchen| {
            let dal = Dish::builder("Dal").prep_time(40).cuisine(Cuisine::Indian).build().unwrap();
            kitchen.add_dish(dal)
        });
        assert!(added);
        assert_eq!(shared.report().count(Cuisine::Indian), 1);
        assert_eq!(shared.remove_by_category("INDIAN"), 1);
        assert!(shared.is_empty());
    }
}
