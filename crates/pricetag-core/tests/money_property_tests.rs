//! Property-based tests for Money, Discount and Product

use pricetag_core::{Discount, Money, Product};
use proptest::prelude::*;

/// Cent amounts well inside the i64 range so sums cannot overflow.
fn cents_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

fn money_strategy() -> impl Strategy<Value = Money> {
    cents_strategy().prop_map(Money::from_cents)
}

/// Scalars with |k| ≥ 1, where one rounding cannot be amplified.
fn scalar_strategy() -> impl Strategy<Value = f64> {
    (1.0f64..1000.0, any::<bool>()).prop_map(|(k, negative)| if negative { -k } else { k })
}

/// What a literal should print as: no leading zeros, always two decimals.
fn normalize(literal: &str) -> String {
    let (whole, fraction) = literal.split_once('.').unwrap_or((literal, "00"));
    let whole = whole.trim_start_matches('0');
    format!("{}.{}", if whole.is_empty() { "0" } else { whole }, fraction)
}

/// Property: every valid literal prints back in normalized form.
#[test]
fn prop_literal_round_trip() {
    proptest!(|(literal in "[0-9]{1,12}(\\.[0-9]{2})?")| {
        let money = Money::parse(&literal).unwrap();
        prop_assert_eq!(money.to_string(), normalize(&literal));
    });
}

/// Property: display output always parses back to the same value.
#[test]
fn prop_display_parses_back() {
    proptest!(|(money in money_strategy())| {
        prop_assert_eq!(Money::parse(&money.to_string()).unwrap(), money);
    });
}

/// Property: more than two fractional digits never parse.
#[test]
fn prop_extra_precision_rejected() {
    proptest!(|(literal in "[0-9]{1,6}\\.[0-9]{3,6}")| {
        prop_assert!(Money::parse(&literal).is_err());
    });
}

/// Property: (a + b) - b == a exactly.
#[test]
fn prop_add_subtract_exact() {
    proptest!(|(a in money_strategy(), b in money_strategy())| {
        prop_assert_eq!((a + b) - b, a);
    });
}

/// Property: (m × k) / k is within one cent of m for |k| ≥ 1.
#[test]
fn prop_multiply_divide_within_one_cent() {
    proptest!(|(m in money_strategy(), k in scalar_strategy())| {
        let back = m.multiply(k).unwrap().divide(k).unwrap();
        prop_assert!(
            (back.cents() - m.cents()).abs() <= 1,
            "{} × {} / {} = {}", m, k, k, back
        );
    });
}

/// Property: 0 % leaves the price alone, 100 % zeroes it.
#[test]
fn prop_discount_bounds() {
    proptest!(|(m in money_strategy())| {
        prop_assert_eq!(Discount::new(0.0).apply(m), m);
        prop_assert_eq!(Discount::new(100.0).apply(m), Money::parse("0.00").unwrap());
    });
}

/// Property: a discount never increases the magnitude of a price.
#[test]
fn prop_discount_never_increases_price() {
    proptest!(|(m in money_strategy(), p in 0.0f64..=100.0)| {
        let reduced = Discount::new(p).apply(m);
        prop_assert!(reduced.cents().abs() <= m.cents().abs());
    });
}

/// Property: every product can be reduced exactly once.
#[test]
fn prop_reduce_exactly_once() {
    proptest!(|(name in "[A-Za-z ]{0,20}", m in money_strategy(), p in 0.0f64..=100.0)| {
        let discount = Discount::new(p);
        let product = Product::new(name.clone(), m);
        prop_assume!(!product.is_reduced());

        let reduced = product.try_reduced(&discount).unwrap();
        prop_assert_eq!(reduced.name(), format!("{} (reduced)", name));
        prop_assert!(reduced.try_reduced(&discount).is_err());
    });
}
