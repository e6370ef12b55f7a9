//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, currency handling,
//! and the comparison helper used by the payment status computation.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(3000), Currency::IDR);
        assert_eq!(m.amount(), dec!(3000));
        assert_eq!(m.currency(), Currency::IDR);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_idr_no_decimals() {
        let m = Money::from_minor(25000, Currency::IDR);
        assert_eq!(m.amount(), dec!(25000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::IDR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::IDR);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_false_for_positive_amount() {
        let m = Money::new(dec!(1), Currency::IDR);
        assert!(!m.is_zero());
        assert!(m.is_positive());
    }

    #[test]
    fn test_is_negative_for_negative_amount() {
        let m = Money::new(dec!(-500), Currency::IDR);
        assert!(m.is_negative());
        assert!(!m.is_positive());
    }

    #[test]
    fn test_covers_at_boundary() {
        let total = Money::new(dec!(2697000), Currency::IDR);
        assert!(total.covers(&total));
        assert!((total + Money::new(dec!(1), Currency::IDR)).covers(&total));
        assert!(!(total - Money::new(dec!(1), Currency::IDR)).covers(&total));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition_same_currency() {
        let a = Money::new(dec!(1107000), Currency::IDR);
        let b = Money::new(dec!(1115000), Currency::IDR);
        assert_eq!((a + b).amount(), dec!(2222000));
    }

    #[test]
    fn test_subtraction_same_currency() {
        let a = Money::new(dec!(5000), Currency::IDR);
        let b = Money::new(dec!(3000), Currency::IDR);
        assert_eq!((a - b).amount(), dec!(2000));
    }

    #[test]
    fn test_multiply_by_ticket_count() {
        let price = Money::new(dec!(25000), Currency::IDR);
        assert_eq!(price.multiply(Decimal::from(19u32)).amount(), dec!(475000));
    }

    #[test]
    fn test_multiply_by_zero_count() {
        let price = Money::new(dec!(25000), Currency::IDR);
        assert!(price.multiply(Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let idr = Money::new(dec!(1000), Currency::IDR);
        let eur = Money::new(dec!(1000), Currency::EUR);
        assert!(matches!(
            idr.checked_add(&eur),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_checked_sub_currency_mismatch() {
        let idr = Money::new(dec!(1000), Currency::IDR);
        let usd = Money::new(dec!(1000), Currency::USD);
        assert!(matches!(
            idr.checked_sub(&usd),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_idr_display() {
        let m = Money::new(dec!(2697000), Currency::IDR);
        assert_eq!(m.to_string(), "Rp 2697000");
    }

    #[test]
    fn test_usd_display_two_decimals() {
        let m = Money::new(dec!(100.5), Currency::USD);
        assert_eq!(m.to_string(), "$ 100.50");
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(Currency::IDR.to_string(), "IDR");
        assert_eq!(Currency::IDR.decimal_places(), 0);
        assert_eq!(Currency::USD.decimal_places(), 2);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_round_trips_through_json() {
        let m = Money::new(dec!(25000), Currency::IDR);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
