// Tue Jan 13 2026 - Alex

pub mod cuisine;
pub mod error;

pub use cuisine::Cuisine;
pub use error::DishError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A menu item. Two dishes are the same dish when every field matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DishRecord")]
pub struct Dish {
    name: String,
    ingredients: Vec<String>,
    prep_time: u32,
    price: f64,
    #[serde(rename = "cuisine_type")]
    cuisine: Cuisine,
}

// Wire shape of a dish; converted through `Dish::new` so files get the same checks.
#[derive(Deserialize)]
struct DishRecord {
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    prep_time: u32,
    #[serde(default)]
    price: f64,
    cuisine_type: Cuisine,
}

impl TryFrom<DishRecord> for Dish {
    type Error = DishError;

    fn try_from(record: DishRecord) -> Result<Self, Self::Error> {
        Dish::new(
            &record.name,
            record.ingredients,
            record.prep_time,
            record.price,
            record.cuisine_type,
        )
    }
}

impl Dish {
    /// Rejects an empty name and a negative or non-finite price; a NaN price
    /// would make the dish unequal to itself.
    pub fn new(
        name: &str,
        ingredients: Vec<String>,
        prep_time: u32,
        price: f64,
        cuisine: Cuisine,
    ) -> Result<Self, DishError> {
        if name.trim().is_empty() {
            return Err(DishError::EmptyName);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DishError::InvalidPrice {
                name: name.to_string(),
                price,
            });
        }
        Ok(Self {
            name: name.to_string(),
            ingredients,
            prep_time,
            price,
            cuisine,
        })
    }

    pub fn builder(name: &str) -> DishBuilder {
        DishBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Minutes.
    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cuisine(&self) -> Cuisine {
        self.cuisine
    }

    pub fn is_elaborate_with(&self, rule: &ElaborateRule) -> bool {
        rule.matches(self)
    }

    pub fn is_elaborate(&self) -> bool {
        self.is_elaborate_with(&ElaborateRule::default())
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} min, {} ingredients)",
            self.name,
            self.cuisine,
            self.prep_time,
            self.ingredients.len()
        )
    }
}

/// Thresholds a dish must reach on both counts to be considered elaborate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElaborateRule {
    pub min_ingredients: usize,
    pub min_prep_time: u32,
}

impl ElaborateRule {
    pub fn new(min_ingredients: usize, min_prep_time: u32) -> Self {
        Self { min_ingredients, min_prep_time }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        dish.ingredient_count() >= self.min_ingredients && dish.prep_time() >= self.min_prep_time
    }
}

impl Default for ElaborateRule {
    fn default() -> Self {
        Self {
            min_ingredients: 5,
            min_prep_time: 60,
        }
    }
}

pub struct DishBuilder {
    name: String,
    ingredients: Vec<String>,
    prep_time: u32,
    price: f64,
    cuisine: Cuisine,
}

impl DishBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: Vec::new(),
            prep_time: 0,
            price: 0.0,
            cuisine: Cuisine::Other,
        }
    }

    pub fn ingredient(mut self, ingredient: &str) -> Self {
        self.ingredients.push(ingredient.to_string());
        self
    }

    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients.extend(ingredients.into_iter().map(Into::into));
        self
    }

    pub fn prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = cuisine;
        self
    }

    pub fn build(self) -> Result<Dish, DishError> {
        Dish::new(&self.name, self.ingredients, self.prep_time, self.price, self.cuisine)
    }
}
