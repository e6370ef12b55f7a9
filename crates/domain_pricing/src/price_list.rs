//! Price list
//!
//! The currently active unit price per visitor category. Staff maintain the
//! list through the administration API; the pricing engine only reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Currency, Money};

use crate::category::Category;
use crate::error::PricingError;

/// Unit prices per category, all in one currency
///
/// At most one active price per category. Categories without a configured
/// price resolve to zero: a missing price degrades the computation
/// gracefully instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceList {
    currency: Currency,
    prices: BTreeMap<Category, Money>,
}

impl PriceList {
    /// Creates an empty price list in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            prices: BTreeMap::new(),
        }
    }

    /// Adds or replaces a price, builder style
    pub fn with_price(mut self, category: Category, amount: Money) -> Result<Self, PricingError> {
        self.set_price(category, amount)?;
        Ok(self)
    }

    /// Adds or replaces the price for a category
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or in a different
    /// currency than the list.
    pub fn set_price(&mut self, category: Category, amount: Money) -> Result<(), PricingError> {
        if amount.currency() != self.currency {
            return Err(PricingError::CurrencyMismatch {
                expected: self.currency.to_string(),
                actual: amount.currency().to_string(),
            });
        }
        if amount.is_negative() {
            return Err(PricingError::NegativePrice(category.to_string()));
        }
        self.prices.insert(category, amount);
        Ok(())
    }

    /// Removes the price for a category, returning the previous value
    pub fn remove_price(&mut self, category: Category) -> Option<Money> {
        self.prices.remove(&category)
    }

    /// Returns the unit price for a category, zero when not configured
    pub fn unit_price(&self, category: Category) -> Money {
        self.prices
            .get(&category)
            .copied()
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Returns true if the category has a configured price
    pub fn has_price(&self, category: Category) -> bool {
        self.prices.contains_key(&category)
    }

    /// Returns the list currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Iterates over configured prices in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.prices.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of configured prices
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no price is configured
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn idr(amount: i64) -> Money {
        Money::from_minor(amount, Currency::IDR)
    }

    #[test]
    fn test_unit_price_defaults_to_zero() {
        let list = PriceList::new(Currency::IDR);
        let price = list.unit_price(Category::Foreign);
        assert!(price.is_zero());
        assert_eq!(price.currency(), Currency::IDR);
    }

    #[test]
    fn test_set_and_lookup() {
        let list = PriceList::new(Currency::IDR)
            .with_price(Category::Student, idr(3000))
            .unwrap()
            .with_price(Category::Public, idr(5000))
            .unwrap();

        assert_eq!(list.unit_price(Category::Student).amount(), dec!(3000));
        assert_eq!(list.unit_price(Category::Public).amount(), dec!(5000));
        assert!(list.has_price(Category::Student));
        assert!(!list.has_price(Category::Custom));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_replaces_existing_price() {
        let mut list = PriceList::new(Currency::IDR);
        list.set_price(Category::Student, idr(3000)).unwrap();
        list.set_price(Category::Student, idr(4000)).unwrap();

        assert_eq!(list.unit_price(Category::Student).amount(), dec!(4000));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_rejects_currency_mismatch() {
        let mut list = PriceList::new(Currency::IDR);
        let result = list.set_price(Category::Public, Money::from_minor(500, Currency::USD));
        assert!(matches!(result, Err(PricingError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut list = PriceList::new(Currency::IDR);
        let result = list.set_price(Category::Public, Money::new(dec!(-100), Currency::IDR));
        assert!(matches!(result, Err(PricingError::NegativePrice(_))));
    }

    #[test]
    fn test_remove_price() {
        let mut list = PriceList::new(Currency::IDR);
        list.set_price(Category::Custom, idr(10000)).unwrap();
        assert_eq!(list.remove_price(Category::Custom), Some(idr(10000)));
        assert!(list.unit_price(Category::Custom).is_zero());
    }
}
