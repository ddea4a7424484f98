// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DishError {
    #[error("Unknown cuisine type: {0}")]
    UnknownCuisine(String),
    #[error("Dish name must not be empty")]
    EmptyName,
    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },
}
