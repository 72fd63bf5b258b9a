//! Product filter criteria
//!
//! Every present criterion must hold for a product to match. Numeric bounds
//! are inclusive. A bound that failed to coerce is `NaN`; no value compares
//! true against `NaN`, so such a bound matches nothing.

use super::Product;
use crate::shared::types::coerce_number;

/// Inclusive numeric interval; a missing end is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Build a range from raw query values. Empty strings count as absent.
    pub fn from_raw(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: coerce_bound(min),
            max: coerce_bound(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// True when a supplied bound is not a number.
    pub fn has_invalid_bound(&self) -> bool {
        self.min.is_some_and(f64::is_nan) || self.max.is_some_and(f64::is_nan)
    }
}

fn coerce_bound(raw: Option<&str>) -> Option<f64> {
    raw.filter(|s| !s.is_empty()).map(coerce_number)
}

/// Criteria for narrowing the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-sensitive exact match
    pub category: Option<String>,
    pub price: NumericRange,
    pub length: NumericRange,
    pub width: NumericRange,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category() != category {
                return false;
            }
        }

        self.price.contains(product.price())
            && self.length.contains(product.length())
            && self.width.contains(product.width())
    }

    /// Names of the criteria whose bounds did not coerce to a number.
    pub fn invalid_bounds(&self) -> Vec<&'static str> {
        [
            ("price", &self.price),
            ("length", &self.length),
            ("width", &self.width),
        ]
        .into_iter()
        .filter(|(_, range)| range.has_invalid_bound())
        .map(|(name, _)| name)
        .collect()
    }

    /// Keep the matching products, preserving their order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        if self.is_empty() {
            return products;
        }
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}
