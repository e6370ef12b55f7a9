//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use core_kernel::{IssuedCode, Money, CODE_ALPHABET, CODE_SUFFIX_LEN};
use domain_pricing::Settlement;

/// Asserts that two Money values are equal, reporting both sides
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a settlement is fully paid with the expected change
pub fn assert_paid_with_change(settlement: &Settlement, expected_change: &Money) {
    assert!(
        settlement.is_paid(),
        "Expected Paid settlement, got {:?}",
        settlement.status
    );
    assert_money_eq(&settlement.change_amount, expected_change);
}

/// Asserts that a settlement is unpaid, which always clamps change to zero
pub fn assert_unpaid(settlement: &Settlement) {
    assert!(
        !settlement.is_paid(),
        "Expected Unpaid settlement, got {:?}",
        settlement.status
    );
    assert!(
        settlement.change_amount.is_zero(),
        "Unpaid settlement must have zero change, got {}",
        settlement.change_amount
    );
}

/// Asserts that an issued code has the contractual shape:
/// the prefix followed by six characters from the code alphabet
pub fn assert_code_format(code: &IssuedCode, prefix: &str) {
    let suffix = code
        .as_str()
        .strip_prefix(prefix)
        .unwrap_or_else(|| panic!("Code {} does not start with '{}'", code, prefix));
    assert_eq!(
        suffix.len(),
        CODE_SUFFIX_LEN,
        "Code suffix must be {} characters, got {} in {}",
        CODE_SUFFIX_LEN,
        suffix.len(),
        code
    );
    assert!(
        suffix.bytes().all(|b| CODE_ALPHABET.contains(&b)),
        "Code suffix contains characters outside the alphabet: {}",
        code
    );
}
