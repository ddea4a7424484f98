// Tue Jan 13 2026 - Alex

pub mod error;

pub use error::BagError;

use std::fmt;

/// Capacity of a bag built with [`Bag::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Unordered collection of distinct items with an optional size limit.
///
/// Items are compared by value. Removal shifts the remaining items down so
/// the backing buffer never has gaps; survivors keep their relative order,
/// although callers should not rely on any ordering.
#[derive(Clone)]
pub struct Bag<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T: PartialEq> Bag<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is a limit; only up to [`DEFAULT_CAPACITY`] slots are
    /// reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity: Some(capacity),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    pub fn add(&mut self, item: T) -> Result<(), BagError> {
        if let Some(capacity) = self.capacity {
            if self.items.len() >= capacity {
                return Err(BagError::Full { capacity });
            }
        }
        if self.contains(&item) {
            return Err(BagError::Duplicate);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.items.iter().position(|i| i == item)?;
        Some(self.items.remove(index))
    }

    /// Removes every item matching `pred` and hands them back in their
    /// original order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let (removed, kept): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.items).into_iter().partition(|i| pred(i));
        self.items = kept;
        removed
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn frequency_of(&self, item: &T) -> usize {
        self.items.iter().filter(|i| *i == item).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.items.len() >= capacity,
            None => false,
        }
    }

    /// `None` means the bag grows without limit.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq + Clone> Bag<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: PartialEq> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bag")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
