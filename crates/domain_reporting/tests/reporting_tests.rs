//! Comprehensive tests for domain_reporting
//!
//! The load-bearing property here is order independence: period summaries
//! must not depend on the order storage returns records in.

use proptest::prelude::*;

use core_kernel::{Currency, Money};
use domain_pricing::{Category, PaymentComputation, PriceList, PricingEngine, VisitBreakdown};
use domain_reporting::ReportTotals;

fn idr(amount: i64) -> Money {
    Money::from_minor(amount, Currency::IDR)
}

fn standard_prices() -> PriceList {
    PriceList::new(Currency::IDR)
        .with_price(Category::Student, idr(3000))
        .unwrap()
        .with_price(Category::Public, idr(5000))
        .unwrap()
        .with_price(Category::Foreign, idr(25000))
        .unwrap()
}

fn computation(student: u32, public: u32, foreign: u32) -> PaymentComputation {
    let breakdown = VisitBreakdown::from_counts([
        (Category::Student, student),
        (Category::Public, public),
        (Category::Foreign, foreign),
    ])
    .unwrap();
    PricingEngine::compute_breakdown(&breakdown, &standard_prices())
}

mod order_independence {
    use super::*;

    /// Strategy producing a small batch of computations
    fn computations_strategy() -> impl Strategy<Value = Vec<PaymentComputation>> {
        proptest::collection::vec((0u32..5000, 0u32..5000, 0u32..5000), 0..12)
            .prop_map(|triples| {
                triples
                    .into_iter()
                    .map(|(s, p, f)| computation(s, p, f))
                    .collect()
            })
    }

    proptest! {
        // any permutation of the records yields the same grand totals
        #[test]
        fn aggregation_is_permutation_invariant(
            computations in computations_strategy(),
            seed in any::<u64>(),
        ) {
            let forward =
                ReportTotals::from_computations(Currency::IDR, computations.iter());

            // deterministic shuffle driven by the seed
            let mut shuffled = computations.clone();
            let mut state = seed;
            for i in (1..shuffled.len()).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state % (i as u64 + 1)) as usize;
                shuffled.swap(i, j);
            }
            let permuted =
                ReportTotals::from_computations(Currency::IDR, shuffled.iter());

            prop_assert_eq!(forward.total_revenue(), permuted.total_revenue());
            prop_assert_eq!(forward.total_visitors(), permuted.total_visitors());
            for category in Category::ALL {
                prop_assert_eq!(
                    forward.for_category(category),
                    permuted.for_category(category)
                );
            }
        }

        // folding one at a time equals folding all at once
        #[test]
        fn aggregation_is_associative(computations in computations_strategy()) {
            let all_at_once =
                ReportTotals::from_computations(Currency::IDR, computations.iter());

            let mut incremental = ReportTotals::new(Currency::IDR);
            for c in &computations {
                incremental.add(c);
            }

            prop_assert_eq!(all_at_once, incremental);
        }
    }

    #[test]
    fn test_reversal_concrete_case() {
        let records = vec![
            computation(369, 223, 19),
            computation(100, 0, 0),
            computation(0, 50, 2),
        ];
        let forward = ReportTotals::from_computations(Currency::IDR, records.iter());
        let reversed = ReportTotals::from_computations(Currency::IDR, records.iter().rev());

        assert_eq!(forward, reversed);
        assert_eq!(forward.total_visitors(), 763);
    }
}

mod grand_totals {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_day_plus_reservation() {
        // a recorded day of walk-ins and one school reservation
        let day = computation(369, 223, 19);
        let school = computation(40, 0, 0);

        let totals = ReportTotals::from_computations(Currency::IDR, [&day, &school]);

        assert_eq!(totals.total_visitors(), 651);
        assert_eq!(totals.total_revenue().amount(), dec!(2817000));
        assert_eq!(totals.for_category(Category::Student).ticket_count, 409);
        assert_eq!(
            totals.for_category(Category::Student).revenue.amount(),
            dec!(1227000)
        );
    }

    #[test]
    fn test_totals_round_trip_through_json() {
        let totals = ReportTotals::from_computations(
            Currency::IDR,
            [&computation(10, 20, 30)],
        );
        let json = serde_json::to_string(&totals).unwrap();
        let back: ReportTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(totals, back);
    }
}
