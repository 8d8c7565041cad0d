//! Smoke test to verify basic functionality

use tierprice::{Decimal, PricingService, Tier};

#[test]
fn smoke_test_both_paths() {
    let service = PricingService::default();
    let price = Decimal::from(100);

    // Lookup path multiplies
    assert_eq!(service.price_by_lookup(1, price), Decimal::from(100));
    assert_eq!(service.price_by_lookup(5, price), Decimal::from(60));
    assert_eq!(service.price_by_lookup(7, price), Decimal::from(100));

    // Dispatch path returns the multiplier and prints to stdout;
    // the printed lines are checked through the binary in cli_test.rs
    assert_eq!(service.price_by_dispatch(1, price), Decimal::ONE);
    assert_eq!(service.price_by_dispatch(5, price), Decimal::new(6, 1));
    assert_eq!(service.price_by_dispatch(7, price), Tier::Lv1.discount());
}
