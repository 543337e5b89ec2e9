//! Property tests for trip validation and income aggregation.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use taxi_income::application::services::TaxiService;
use taxi_income::domain::entities::Trip;

const CARS: [&str; 4] = ["AB12345", "CD23456", "EF34567", "ab12345"];

fn positive_cost() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000, 0u32..6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn non_positive_cost() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=0, 0u32..6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn trips() -> impl Strategy<Value = Vec<Trip>> {
    prop::collection::vec((0..CARS.len(), positive_cost()), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(car, cost)| Trip::new(CARS[car], cost).unwrap())
            .collect()
    })
}

fn totals(service: &TaxiService) -> BTreeMap<String, Decimal> {
    service
        .calculate_total_income_by_car()
        .into_iter()
        .map(|income| (income.car_number().to_string(), income.total()))
        .collect()
}

proptest! {
    #[test]
    fn valid_trip_preserves_fields(
        car in "[A-Za-z0-9 ]{7}".prop_filter("non-blank", |s| !s.trim().is_empty()),
        cost in positive_cost(),
    ) {
        let trip = Trip::new(car.clone(), cost).unwrap();
        prop_assert_eq!(trip.car_number().as_str(), car.as_str());
        prop_assert_eq!(trip.trip_cost(), cost);
    }

    #[test]
    fn wrong_length_is_invalid_argument(
        car in "[A-Z0-9]{0,6}|[A-Z0-9]{8,12}",
        cost in positive_cost(),
    ) {
        prop_assert!(Trip::new(car, cost).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn blank_is_invalid_argument(car in "[ \t\n]{0,10}", cost in positive_cost()) {
        prop_assert!(Trip::new(car, cost).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn non_positive_cost_is_out_of_range(cost in non_positive_cost()) {
        prop_assert!(Trip::new("AB12345", cost).unwrap_err().is_out_of_range());
    }

    #[test]
    fn aggregation_ignores_insertion_order(
        (original, shuffled) in trips().prop_flat_map(|ledger| {
            (Just(ledger.clone()), Just(ledger).prop_shuffle())
        }),
    ) {
        let a: TaxiService = original.into_iter().collect();
        let b: TaxiService = shuffled.into_iter().collect();
        prop_assert_eq!(totals(&a), totals(&b));
    }

    #[test]
    fn group_total_is_exact_sum(ledger in trips()) {
        let service: TaxiService = ledger.iter().cloned().collect();
        let incomes = service.calculate_total_income_by_car();

        for income in &incomes {
            let expected: Decimal = ledger
                .iter()
                .filter(|trip| trip.car_number() == income.car_number())
                .map(Trip::trip_cost)
                .sum();
            prop_assert_eq!(income.total(), expected);
        }

        let distinct: std::collections::HashSet<_> =
            ledger.iter().map(|trip| trip.car_number().clone()).collect();
        prop_assert_eq!(incomes.len(), distinct.len());
    }

    #[test]
    fn groups_follow_first_appearance(ledger in trips()) {
        let service: TaxiService = ledger.iter().cloned().collect();
        let mut seen = Vec::new();
        for trip in &ledger {
            if !seen.contains(trip.car_number()) {
                seen.push(trip.car_number().clone());
            }
        }
        let order: Vec<_> = service
            .calculate_total_income_by_car()
            .into_iter()
            .map(|income| income.car_number().clone())
            .collect();
        prop_assert_eq!(order, seen);
    }
}
