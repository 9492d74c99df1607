//! Boarding simulation tests
//!
//! Tick counts below are reference values for the Steffen order.

use boarding_simulator_core_rs::orchestrator::monotonicity_violations;
use boarding_simulator_core_rs::{
    boarding_time_by_size, BoardingPhase, BoardingStatus, BoardingStepper, Event, PassengerId,
    Plane, PolicyConfig, SimulationError,
};

// ============================================================================
// Full boarding
// ============================================================================

#[test]
fn test_empty_plane_boards_in_zero_ticks() {
    let plane = Plane::new(0).unwrap();
    assert_eq!(plane.run_boarding(None), Ok(0));
}

#[test]
fn test_reference_boarding_times() {
    let cases = [
        (1, 22),
        (2, 29),
        (3, 30),
        (4, 36),
        (5, 43),
        (10, 75),
        (26, 179),
        (30, 205),
        (59, 394),
    ];
    for (length, expected) in cases {
        let plane = Plane::new(length).unwrap();
        assert_eq!(plane.run_boarding(None), Ok(expected), "length {}", length);
    }
}

#[test]
fn test_back_to_front_reference_times() {
    let cases = [(1, 22), (2, 29), (3, 35), (10, 77)];
    for (length, expected) in cases {
        let plane = Plane::with_policy(length, PolicyConfig::BackToFront).unwrap();
        assert_eq!(plane.run_boarding(None), Ok(expected), "length {}", length);
    }
}

#[test]
fn test_repeated_runs_on_same_plane_agree() {
    let plane = Plane::new(9).unwrap();
    let first = plane.run_boarding(None).unwrap();
    let second = plane.run_boarding(None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_everyone_is_seated_at_the_end() {
    let plane = Plane::new(12).unwrap();
    let outcome = plane.simulate(None).unwrap();

    assert_eq!(outcome.phase, BoardingPhase::Done);
    assert_eq!(outcome.stopped_on, None);
    assert_eq!(outcome.num_seated(), 72);

    // The last passenger sits down on the final pass
    let last = outcome.arrivals.iter().flatten().max().copied();
    assert_eq!(last, Some(outcome.ticks));
}

#[test]
fn test_boarding_time_is_non_decreasing_with_size() {
    let table = boarding_time_by_size(1..=60, PolicyConfig::Steffen).unwrap();
    assert_eq!(table.len(), 60);
    assert_eq!(monotonicity_violations(&table), Vec::<usize>::new());
}

// ============================================================================
// Stop condition
// ============================================================================

#[test]
fn test_stop_on_named_passenger() {
    let plane = Plane::new(5).unwrap();
    let cases = [(0, 36), (2, 16), (29, 17), (17, 18)];
    for (passenger, expected) in cases {
        assert_eq!(
            plane.run_boarding(Some(PassengerId(passenger))),
            Ok(expected),
            "name_{}",
            passenger
        );
    }
}

#[test]
fn test_stop_never_exceeds_full_boarding() {
    let plane = Plane::new(8).unwrap();
    let full = plane.run_boarding(None).unwrap();
    for (passenger, _) in plane.registry().iter() {
        let partial = plane.run_boarding(Some(passenger)).unwrap();
        assert!(partial <= full, "{} took {} > {}", passenger, partial, full);
    }
}

#[test]
fn test_stop_on_unknown_passenger_is_an_error() {
    let plane = Plane::new(5).unwrap();
    assert_eq!(
        plane.run_boarding(Some(PassengerId(30))),
        Err(SimulationError::PassengerNotFound("name_30".to_string()))
    );
}

#[test]
fn test_stopped_outcome() {
    let plane = Plane::new(5).unwrap();
    let outcome = plane.simulate(Some(PassengerId(2))).unwrap();

    assert_eq!(outcome.ticks, 16);
    assert_eq!(outcome.phase, BoardingPhase::Loading);
    assert_eq!(outcome.stopped_on, Some(PassengerId(2)));
    assert_eq!(outcome.arrival_tick(PassengerId(2)), Some(16));

    let last = outcome.event_log.events().last().unwrap();
    assert_eq!(
        last,
        &Event::StopConditionReached {
            tick: 16,
            passenger: PassengerId(2)
        }
    );
}

// ============================================================================
// Per-passenger arrivals
// ============================================================================

#[test]
fn test_arrival_ticks_for_five_rows() {
    let plane = Plane::new(5).unwrap();
    let outcome = plane.simulate(None).unwrap();

    assert_eq!(outcome.arrival_tick(PassengerId(26)), Some(14)); // first seated
    assert_eq!(outcome.arrival_tick(PassengerId(14)), Some(15));
    assert_eq!(outcome.arrival_tick(PassengerId(9)), Some(43)); // last seated
    assert_eq!(outcome.arrival_tick(PassengerId(30)), None);
}

#[test]
fn test_arrival_query_matches_stop_condition() {
    let plane = Plane::new(5).unwrap();
    let outcome = plane.simulate(None).unwrap();
    for (passenger, _) in plane.registry().iter() {
        assert_eq!(
            outcome.arrival_tick(passenger),
            Some(plane.run_boarding(Some(passenger)).unwrap())
        );
    }
}

// ============================================================================
// Event log
// ============================================================================

#[test]
fn test_event_log_records_each_passenger_once_per_stage() {
    let plane = Plane::new(4).unwrap();
    let outcome = plane.simulate(None).unwrap();
    let log = &outcome.event_log;

    assert_eq!(log.events_of_type("Admitted").len(), 24);
    assert_eq!(log.events_of_type("StartedStowing").len(), 24);
    assert_eq!(log.events_of_type("Seated").len(), 24);
    assert_eq!(log.events_of_type("QueueExhausted").len(), 1);
    assert_eq!(log.events_of_type("BoardingComplete").len(), 1);

    let stages: Vec<&str> = log
        .events_for_passenger(PassengerId(0))
        .iter()
        .map(|e| e.event_type())
        .collect();
    assert_eq!(stages, vec!["Admitted", "StartedStowing", "Seated"]);
}

#[test]
fn test_admissions_follow_boarding_order() {
    let plane = Plane::new(6).unwrap();
    let outcome = plane.simulate(None).unwrap();

    let admitted: Vec<_> = outcome
        .event_log
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::Admitted { seat, .. } => Some(seat.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(admitted.as_slice(), plane.boarding_order());
}

#[test]
fn test_completion_tick_is_last_pass() {
    let plane = Plane::new(3).unwrap();
    let outcome = plane.simulate(None).unwrap();
    let done = outcome.event_log.events_of_type("BoardingComplete");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].tick() + 1, outcome.ticks);
}

// ============================================================================
// Step-by-step driving
// ============================================================================

#[test]
fn test_manual_stepping_matches_run() {
    let plane = Plane::new(7).unwrap();
    let mut stepper = BoardingStepper::new(&plane, None).unwrap();

    let mut passes = 0;
    while stepper.phase() != BoardingPhase::Done {
        let result = stepper.tick();
        assert_eq!(result.tick, passes);
        passes += 1;
    }
    assert_eq!(passes, plane.run_boarding(None).unwrap());
    assert!(stepper.grid().is_aisle_clear());
    assert_eq!(stepper.remaining_in_queue(), 0);
    for (passenger, _) in plane.registry().iter() {
        assert_eq!(stepper.status_of(passenger), Some(BoardingStatus::Seated));
    }
}

#[test]
fn test_one_admission_per_pass_at_most() {
    let plane = Plane::new(3).unwrap();
    let mut stepper = BoardingStepper::new(&plane, None).unwrap();
    let mut admitted = 0;
    while stepper.phase() != BoardingPhase::Done {
        if stepper.tick().admitted.is_some() {
            admitted += 1;
        }
    }
    assert_eq!(admitted, 18);
}
