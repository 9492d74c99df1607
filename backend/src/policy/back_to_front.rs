//! Back-to-front baseline
//!
//! Rows board from the rear of the cabin forward; inside a row the window
//! seats go first. Useful as a comparison point for smarter orders.

use super::BoardingPolicy;
use crate::models::rows::RowNames;
use crate::models::seat::{Distance, Seat, Side};

/// Rear row first, window to aisle, Left before Right
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToFrontPolicy;

impl BoardingPolicy for BackToFrontPolicy {
    fn name(&self) -> &'static str {
        "back-to-front"
    }

    fn boarding_order(&self, rows: &RowNames) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(rows.len() * 6);
        for (_, row) in rows.iter() {
            for distance in Distance::OUTER_TO_INNER {
                for side in [Side::Left, Side::Right] {
                    seats.push(Seat::new(row, side, distance));
                }
            }
        }
        seats
    }
}
