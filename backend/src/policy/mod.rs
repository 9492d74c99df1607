//! Boarding Policy Module
//!
//! A boarding policy decides the order in which passengers are called to the
//! gate. The stepper admits passengers one at a time in exactly this order.
//!
//! # Policy Interface
//!
//! All policies implement the `BoardingPolicy` trait:
//! ```rust
//! use boarding_simulator_core_rs::models::rows::RowNames;
//! use boarding_simulator_core_rs::policy::BoardingPolicy;
//! use boarding_simulator_core_rs::{Distance, Seat, Side};
//!
//! struct WindowsOnlyFirst;
//!
//! impl BoardingPolicy for WindowsOnlyFirst {
//!     fn name(&self) -> &'static str {
//!         "windows-first"
//!     }
//!
//!     fn boarding_order(&self, rows: &RowNames) -> Vec<Seat> {
//!         let mut seats = Vec::new();
//!         for distance in Distance::OUTER_TO_INNER {
//!             for (_, row) in rows.iter() {
//!                 for side in [Side::Left, Side::Right] {
//!                     seats.push(Seat::new(row, side, distance));
//!                 }
//!             }
//!         }
//!         seats
//!     }
//! }
//! ```
//!
//! Available policies:
//! 1. **Steffen**: window seats first, alternating sides, every other row
//! 2. **BackToFront**: rear row first, window to aisle (baseline)

pub mod back_to_front;
pub mod steffen;

pub use back_to_front::BackToFrontPolicy;
pub use steffen::SteffenPolicy;

use crate::models::rows::RowNames;
use crate::models::seat::Seat;
use serde::{Deserialize, Serialize};

/// Produces the seat sequence passengers are admitted in
///
/// Implementations must return every seat of the plane exactly once.
pub trait BoardingPolicy {
    /// Short identifier used in reports
    fn name(&self) -> &'static str;

    /// Full boarding order for a plane with the given rows
    fn boarding_order(&self, rows: &RowNames) -> Vec<Seat>;
}

/// Policy selection for a plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PolicyConfig {
    /// Steffen method (window-first, alternating side and row parity)
    #[default]
    Steffen,

    /// Row by row from the rear, window to aisle
    BackToFront,
}

impl PolicyConfig {
    /// Instantiate the configured policy
    pub fn build(self) -> Box<dyn BoardingPolicy> {
        match self {
            PolicyConfig::Steffen => Box::new(SteffenPolicy),
            PolicyConfig::BackToFront => Box::new(BackToFrontPolicy),
        }
    }
}
