// Tue Jan 13 2026 - Alex

pub mod bag;
pub mod config;
pub mod dish;
pub mod kitchen;
pub mod utils;

pub use bag::{Bag, BagError};
pub use config::{ConfigError, KitchenConfig};
pub use dish::{Cuisine, Dish, DishBuilder, DishError, ElaborateRule};
pub use kitchen::{Kitchen, KitchenReport, SharedKitchen};
pub use utils::math::RoundingPolicy;
