//! Event logging for boarding replay and analysis.
//!
//! The stepper records an `Event` for every state change of a passenger and
//! for each phase transition. Events enable:
//! - Debugging (who moved where, and when)
//! - Per-passenger arrival analysis
//! - Verifying the stepping rules in tests
//!
//! # Example
//!
//! ```rust
//! use boarding_simulator_core_rs::models::event::{Event, EventLog};
//! use boarding_simulator_core_rs::PassengerId;
//!
//! let mut log = EventLog::new();
//! log.log(Event::StartedStowing {
//!     tick: 12,
//!     passenger: PassengerId(4),
//!     column: 14,
//! });
//!
//! assert_eq!(log.events_for_passenger(PassengerId(4)).len(), 1);
//! assert_eq!(log.events()[0].event_type(), "StartedStowing");
//! ```

use crate::models::grid::GridPosition;
use crate::models::passenger::PassengerId;
use crate::models::seat::Seat;
use serde::{Deserialize, Serialize};

/// Boarding event capturing a state change.
///
/// `tick` is the zero-based index of the pass in which the change happened.
/// Events are logged in the order they occur within a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Passenger entered the aisle head from the boarding order
    Admitted {
        tick: usize,
        passenger: PassengerId,
        seat: Seat,
    },

    /// Passenger reached its row column and started stowing luggage
    StartedStowing {
        tick: usize,
        passenger: PassengerId,
        column: usize,
    },

    /// Passenger left the aisle for its seat cell
    Seated {
        tick: usize,
        passenger: PassengerId,
        position: GridPosition,
    },

    /// Boarding order ran out; no more admissions
    QueueExhausted { tick: usize },

    /// Aisle is clear after the order ran out
    BoardingComplete { tick: usize },

    /// Stepping halted because the watched passenger is seated
    StopConditionReached { tick: usize, passenger: PassengerId },
}

impl Event {
    /// Get the tick when this event occurred
    pub fn tick(&self) -> usize {
        match self {
            Event::Admitted { tick, .. } => *tick,
            Event::StartedStowing { tick, .. } => *tick,
            Event::Seated { tick, .. } => *tick,
            Event::QueueExhausted { tick } => *tick,
            Event::BoardingComplete { tick } => *tick,
            Event::StopConditionReached { tick, .. } => *tick,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Admitted { .. } => "Admitted",
            Event::StartedStowing { .. } => "StartedStowing",
            Event::Seated { .. } => "Seated",
            Event::QueueExhausted { .. } => "QueueExhausted",
            Event::BoardingComplete { .. } => "BoardingComplete",
            Event::StopConditionReached { .. } => "StopConditionReached",
        }
    }

    /// Get the passenger if the event concerns one
    pub fn passenger(&self) -> Option<PassengerId> {
        match self {
            Event::Admitted { passenger, .. } => Some(*passenger),
            Event::StartedStowing { passenger, .. } => Some(*passenger),
            Event::Seated { passenger, .. } => Some(*passenger),
            Event::StopConditionReached { passenger, .. } => Some(*passenger),
            _ => None,
        }
    }
}

/// Event log for storing and querying boarding events.
///
/// A thin wrapper around `Vec<Event>` with query helpers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific tick
    pub fn events_at_tick(&self, tick: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific passenger
    pub fn events_for_passenger(&self, passenger: PassengerId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.passenger() == Some(passenger))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seat::{Distance, Side};

    fn admitted(tick: usize, passenger: usize) -> Event {
        Event::Admitted {
            tick,
            passenger: PassengerId(passenger),
            seat: Seat::new("A", Side::Left, Distance::Window),
        }
    }

    #[test]
    fn test_event_accessors() {
        let event = admitted(42, 2);
        assert_eq!(event.tick(), 42);
        assert_eq!(event.event_type(), "Admitted");
        assert_eq!(event.passenger(), Some(PassengerId(2)));

        let done = Event::BoardingComplete { tick: 7 };
        assert_eq!(done.tick(), 7);
        assert_eq!(done.passenger(), None);
    }

    #[test]
    fn test_event_log_queries() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.log(admitted(0, 2));
        log.log(admitted(1, 5));
        log.log(Event::StartedStowing {
            tick: 1,
            passenger: PassengerId(2),
            column: 14,
        });
        log.log(Event::QueueExhausted { tick: 2 });

        assert_eq!(log.len(), 4);
        assert_eq!(log.events_at_tick(1).len(), 2);
        assert_eq!(log.events_of_type("Admitted").len(), 2);
        assert_eq!(log.events_for_passenger(PassengerId(2)).len(), 2);
        assert_eq!(log.events_for_passenger(PassengerId(9)).len(), 0);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_value(Event::QueueExhausted { tick: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "QueueExhausted", "tick": 3}));
    }
}
