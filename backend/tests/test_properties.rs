//! Property-based tests for plane invariants

use boarding_simulator_core_rs::{PassengerId, Plane, PolicyConfig, Seat};
use proptest::prelude::*;
use std::collections::HashSet;

fn policy_strategy() -> impl Strategy<Value = PolicyConfig> {
    prop_oneof![Just(PolicyConfig::Steffen), Just(PolicyConfig::BackToFront)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn registry_is_a_bijection(length in 0usize..120) {
        let plane = Plane::new(length).unwrap();
        let registry = plane.registry();

        prop_assert_eq!(registry.len(), 6 * length);
        for (passenger, seat) in registry.iter() {
            prop_assert_eq!(registry.passenger_at(seat), Some(passenger));
        }
    }

    #[test]
    fn boarding_order_is_a_permutation(length in 0usize..80, policy in policy_strategy()) {
        let plane = Plane::with_policy(length, policy).unwrap();
        let order = plane.boarding_order();

        let unique: HashSet<&Seat> = order.iter().collect();
        prop_assert_eq!(order.len(), 6 * length);
        prop_assert_eq!(unique.len(), order.len());
        for seat in order {
            prop_assert!(plane.registry().passenger_at(seat).is_some());
        }
    }

    #[test]
    fn stop_condition_never_exceeds_full_run(
        length in 1usize..15,
        pick in any::<prop::sample::Index>(),
        policy in policy_strategy(),
    ) {
        let plane = Plane::with_policy(length, policy).unwrap();
        let passenger = PassengerId(pick.index(plane.registry().len()));

        let full = plane.run_boarding(None).unwrap();
        let partial = plane.run_boarding(Some(passenger)).unwrap();
        prop_assert!(partial <= full);
        prop_assert!(partial > 0);
    }

    #[test]
    fn every_run_terminates_with_everyone_seated(length in 0usize..25, policy in policy_strategy()) {
        let plane = Plane::with_policy(length, policy).unwrap();
        let outcome = plane.simulate(None).unwrap();

        prop_assert_eq!(outcome.num_seated(), 6 * length);
        if length == 0 {
            prop_assert_eq!(outcome.ticks, 0);
        } else {
            // Nobody sits before walking the corridor and the cabin
            prop_assert!(outcome.ticks > 10 + length);
        }
    }

    #[test]
    fn arrival_query_matches_stop_condition(length in 1usize..8, pick in any::<prop::sample::Index>()) {
        let plane = Plane::new(length).unwrap();
        let passenger = PassengerId(pick.index(plane.registry().len()));

        let outcome = plane.simulate(None).unwrap();
        prop_assert_eq!(
            outcome.arrival_tick(passenger),
            Some(plane.run_boarding(Some(passenger)).unwrap())
        );
    }

    #[test]
    fn boarding_rank_inverts_order(length in 1usize..40, pick in any::<prop::sample::Index>()) {
        let plane = Plane::new(length).unwrap();
        let rank = pick.index(plane.boarding_order().len());
        let seat = &plane.boarding_order()[rank];
        let passenger = plane.registry().passenger_at(seat).unwrap();

        prop_assert_eq!(plane.passenger_boarding_rank(passenger), Ok(rank));
    }
}
