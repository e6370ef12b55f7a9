//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants (unique categories per breakdown, non-negative
//! prices, single-currency lists).

use proptest::prelude::*;

use core_kernel::{Currency, Money};
use domain_pricing::{Category, PriceList, VisitBreakdown};

/// Strategy for generating a category
pub fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Student),
        Just(Category::Public),
        Just(Category::Foreign),
        Just(Category::Custom),
    ]
}

/// Strategy for generating realistic ticket counts
pub fn ticket_count_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

/// Strategy for generating non-negative rupiah amounts
pub fn idr_amount_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000i64
}

/// Strategy for generating non-negative IDR Money values
pub fn idr_money_strategy() -> impl Strategy<Value = Money> {
    idr_amount_strategy().prop_map(|amount| Money::from_minor(amount, Currency::IDR))
}

/// Strategy for generating a breakdown with unique categories
///
/// Draws a count for every category and keeps a random subset, so the
/// uniqueness invariant holds by construction.
pub fn breakdown_strategy() -> impl Strategy<Value = VisitBreakdown> {
    (
        proptest::collection::vec(ticket_count_strategy(), 4),
        proptest::collection::vec(any::<bool>(), 4),
    )
        .prop_map(|(counts, keep)| {
            let pairs = Category::ALL
                .iter()
                .zip(counts)
                .zip(keep)
                .filter(|(_, keep)| *keep)
                .map(|((category, count), _)| (*category, count))
                .collect::<Vec<_>>();
            VisitBreakdown::from_counts(pairs).expect("unique categories by construction")
        })
}

/// Strategy for generating a price list covering a random subset of
/// categories
pub fn price_list_strategy() -> impl Strategy<Value = PriceList> {
    (
        proptest::collection::vec(idr_amount_strategy(), 4),
        proptest::collection::vec(any::<bool>(), 4),
    )
        .prop_map(|(amounts, keep)| {
            let mut list = PriceList::new(Currency::IDR);
            for ((category, amount), keep) in Category::ALL.iter().zip(amounts).zip(keep) {
                if keep {
                    list.set_price(*category, Money::from_minor(amount, Currency::IDR))
                        .expect("non-negative IDR price");
                }
            }
            list
        })
}
