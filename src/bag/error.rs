// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagError {
    #[error("Bag is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("Item already present in bag")]
    Duplicate,
}
