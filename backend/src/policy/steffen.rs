//! Steffen boarding method
//!
//! Passengers board window seats first, then middle, then aisle. Within each
//! seat distance the plane is split by row parity, and each parity group
//! boards one side of the aisle and then the other. Passengers heading for
//! adjacent rows are therefore never queued back to back, so several of them
//! can stow luggage at the same time.

use super::BoardingPolicy;
use crate::models::rows::RowNames;
use crate::models::seat::{Distance, Seat, Side};

/// Steffen method: window-first, alternating side, alternating row parity
///
/// # Example
///
/// ```
/// use boarding_simulator_core_rs::models::rows::row_names;
/// use boarding_simulator_core_rs::policy::{BoardingPolicy, SteffenPolicy};
/// use boarding_simulator_core_rs::{Distance, Seat, Side};
///
/// let order = SteffenPolicy.boarding_order(&row_names(3));
/// assert_eq!(order[0], Seat::new("A", Side::Left, Distance::Window));
/// assert_eq!(order[1], Seat::new("C", Side::Left, Distance::Window));
/// assert_eq!(order[2], Seat::new("A", Side::Right, Distance::Window));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SteffenPolicy;

/// Row-parity groups, even indices first
const PARITY_GROUPS: usize = 2;

impl SteffenPolicy {
    fn push_group(seats: &mut Vec<Seat>, rows: &RowNames, distance: Distance, parity: usize, side: Side) {
        seats.extend(
            rows.iter()
                .filter(|(i, _)| (i + parity) % 2 == 0)
                .map(|(_, row)| Seat::new(row, side, distance)),
        );
    }
}

impl BoardingPolicy for SteffenPolicy {
    fn name(&self) -> &'static str {
        "steffen"
    }

    fn boarding_order(&self, rows: &RowNames) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(rows.len() * 6);
        let mut side = Side::Left;

        for distance in Distance::OUTER_TO_INNER {
            for parity in 0..PARITY_GROUPS {
                Self::push_group(&mut seats, rows, distance, parity, side);
                side = side.opposite();
                Self::push_group(&mut seats, rows, distance, parity, side);
                side = side.opposite();
            }
        }

        seats
    }
}
