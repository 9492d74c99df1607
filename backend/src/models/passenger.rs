//! Passenger registry
//!
//! Binds every passenger identity to exactly one seat and back again.
//!
//! # Critical Invariants
//!
//! 1. One passenger per `(row, side, distance)`: `6 * length` passengers
//! 2. `seat_of` and `passenger_at` are exact inverses
//! 3. Identities are allocated deterministically: row order, then Left
//!    before Right, then distance 1, 2, 3

use crate::models::rows::RowNames;
use crate::models::seat::{Distance, Seat, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const NAME_PREFIX: &str = "name_";

/// Seats on each side of a row
pub const SEATS_PER_SIDE: usize = 3;

/// Seats in one row (3-3 configuration)
pub const SEATS_PER_ROW: usize = 2 * SEATS_PER_SIDE;

/// Passenger identity
///
/// Displayed and parsed as `name_{n}`.
///
/// # Example
/// ```
/// use boarding_simulator_core_rs::PassengerId;
///
/// let id: PassengerId = "name_7".parse().unwrap();
/// assert_eq!(id, PassengerId(7));
/// assert_eq!(id.to_string(), "name_7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PassengerId(pub usize);

impl PassengerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", NAME_PREFIX, self.0)
    }
}

impl FromStr for PassengerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(NAME_PREFIX)
            .and_then(|n| n.parse::<usize>().ok())
            .map(PassengerId)
            .ok_or_else(|| format!("not a passenger name: {}", s))
    }
}

/// Where a passenger is in the boarding process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardingStatus {
    /// Not yet admitted from the boarding order
    Queued,
    /// Walking down the corridor or cabin aisle
    InAisle,
    /// At its row, stowing luggage before sitting down
    Stowing,
    /// In its final seat cell
    Seated,
}

/// Bidirectional passenger ↔ seat mapping for one plane
#[derive(Debug, Clone)]
pub struct PassengerRegistry {
    /// Indexed by `PassengerId`
    seats: Vec<Seat>,
    passengers: HashMap<Seat, PassengerId>,
}

impl PassengerRegistry {
    /// Allocate one passenger per seat of every row in `rows`
    pub fn generate(rows: &RowNames) -> Self {
        let mut seats = Vec::with_capacity(rows.len() * SEATS_PER_ROW);
        for (_, row) in rows.iter() {
            for side in [Side::Left, Side::Right] {
                for distance in Distance::INNER_TO_OUTER {
                    seats.push(Seat::new(row, side, distance));
                }
            }
        }

        let passengers = seats
            .iter()
            .enumerate()
            .map(|(i, seat)| (seat.clone(), PassengerId(i)))
            .collect();

        Self { seats, passengers }
    }

    /// Number of passengers (== number of seats)
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seat assigned to a passenger
    pub fn seat_of(&self, passenger: PassengerId) -> Option<&Seat> {
        self.seats.get(passenger.index())
    }

    /// Passenger assigned to a seat
    pub fn passenger_at(&self, seat: &Seat) -> Option<PassengerId> {
        self.passengers.get(seat).copied()
    }

    pub fn contains(&self, passenger: PassengerId) -> bool {
        passenger.index() < self.seats.len()
    }

    /// `(passenger, seat)` pairs in identity order
    pub fn iter(&self) -> impl Iterator<Item = (PassengerId, &Seat)> + '_ {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, seat)| (PassengerId(i), seat))
    }
}
