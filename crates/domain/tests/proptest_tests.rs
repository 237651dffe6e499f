//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::emission_catalog::STANDARD_RATES;
use domain::{Coordinates, EmissionCatalog, EmissionRate, TripResult, round_to_tenth};
use proptest::prelude::*;

// ============================================================================
// Coordinates Property Tests
// ============================================================================

mod coordinates_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lon in -180.0f64..=180.0f64,
            lat in -90.0f64..=90.0f64
        ) {
            let coords = Coordinates::new(lon, lat);
            prop_assert!(coords.is_ok());

            let coords = coords.unwrap();
            prop_assert_eq!(coords.to_lon_lat(), [lon, lat]);
        }

        #[test]
        fn invalid_longitude_rejected(
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ],
            lat in -90.0f64..=90.0f64
        ) {
            prop_assert!(Coordinates::new(lon, lat).is_err());
        }

        #[test]
        fn invalid_latitude_rejected(
            lon in -180.0f64..=180.0f64,
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(Coordinates::new(lon, lat).is_err());
        }
    }
}

// ============================================================================
// Emission Catalog Property Tests
// ============================================================================

mod catalog_tests {
    use super::*;

    proptest! {
        #[test]
        fn unknown_ids_are_never_valid(id in "[A-Za-z_ -]{0,30}") {
            let catalog = EmissionCatalog::standard();
            let known = STANDARD_RATES.iter().any(|(m, _)| *m == id);
            prop_assert_eq!(catalog.is_valid(&id), known);
            prop_assert_eq!(catalog.rate(&id).is_some(), known);
        }

        #[test]
        fn positive_rates_always_accepted(grams in 1u32..=u32::MAX) {
            let rate = EmissionRate::new(grams);
            prop_assert!(rate.is_ok());
            prop_assert_eq!(rate.unwrap().grams_per_km(), grams);
        }
    }
}

// ============================================================================
// Trip Result Property Tests
// ============================================================================

mod trip_result_tests {
    use super::*;

    fn any_standard_rate() -> impl Strategy<Value = EmissionRate> {
        prop::sample::select(STANDARD_RATES.to_vec())
            .prop_map(|(_, grams)| EmissionRate::new(grams).unwrap())
    }

    proptest! {
        #[test]
        fn emissions_monotonic_in_distance(
            rate in any_standard_rate(),
            shorter in 0.0f64..50_000.0f64,
            extra in 0.0f64..50_000.0f64
        ) {
            let longer = shorter + extra;
            let a = TripResult::new(shorter, rate).unwrap();
            let b = TripResult::new(longer, rate).unwrap();
            prop_assert!(a.co2_kg() <= b.co2_kg());
        }

        #[test]
        fn emissions_are_deterministic(
            rate in any_standard_rate(),
            distance in 0.0f64..50_000.0f64
        ) {
            let a = TripResult::new(distance, rate).unwrap();
            let b = TripResult::new(distance, rate).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn emissions_match_formula(
            rate in any_standard_rate(),
            distance in 0.0f64..50_000.0f64
        ) {
            let result = TripResult::new(distance, rate).unwrap();
            let expected = round_to_tenth(distance * f64::from(rate.grams_per_km()) / 1000.0);
            prop_assert!((result.co2_kg() - expected).abs() < f64::EPSILON);
            prop_assert!(result.co2_kg() >= 0.0);
        }

        #[test]
        fn rounding_stays_within_half_a_tenth(value in 0.0f64..100_000.0f64) {
            let rounded = round_to_tenth(value);
            prop_assert!((rounded - value).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn negative_distances_rejected(
            rate in any_standard_rate(),
            distance in -50_000.0f64..-0.001f64
        ) {
            prop_assert!(TripResult::new(distance, rate).is_err());
        }
    }
}
