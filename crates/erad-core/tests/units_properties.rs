//! Property tests for unit conversion.

use erad_core::units::{Dimension, Quantity, Unit};
use proptest::prelude::*;

const SPEEDS: [Unit; 5] = [
    Unit::MeterPerSecond,
    Unit::CentimeterPerSecond,
    Unit::KilometerPerHour,
    Unit::MilePerHour,
    Unit::FootPerSecond,
];

const LENGTHS: [Unit; 5] = [Unit::Meter, Unit::Centimeter, Unit::Kilometer, Unit::Foot, Unit::Mile];

fn arb_speed_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(SPEEDS.to_vec())
}

fn arb_length_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(LENGTHS.to_vec())
}

proptest! {
    #[test]
    fn conversion_preserves_order(a in 0.0f64..500.0, b in 0.0f64..500.0, from in arb_speed_unit(), to in arb_speed_unit()) {
        let qa = Quantity::new(a, from).magnitude_in(to).unwrap();
        let qb = Quantity::new(b, from).magnitude_in(to).unwrap();
        if a < b {
            prop_assert!(qa <= qb);
        }
    }

    #[test]
    fn converted_quantity_compares_equal_in_magnitude(v in 0.0f64..1e4, from in arb_length_unit(), to in arb_length_unit()) {
        let q = Quantity::new(v, from);
        let converted = q.to(to).unwrap();
        let back = converted.magnitude_in(from).unwrap();
        prop_assert!((back - v).abs() <= 1e-9 * v.max(1.0));
        prop_assert_eq!(converted.dimension(), Dimension::Length);
    }

    #[test]
    fn cross_dimension_conversion_fails(v in -1e3f64..1e3, speed in arb_speed_unit(), length in arb_length_unit()) {
        prop_assert!(Quantity::new(v, speed).magnitude_in(length).is_err());
        prop_assert!(Quantity::new(v, speed) != Quantity::new(v, length));
    }
}
