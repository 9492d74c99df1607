//! Time management for the boarding simulation
//!
//! Boarding runs in discrete ticks. One tick is one Admission + Movement
//! pass over the aisle. This module provides deterministic time advancement.

use serde::{Deserialize, Serialize};

/// Counts elapsed boarding ticks
///
/// # Example
/// ```
/// use boarding_simulator_core_rs::TimeManager;
///
/// let mut time = TimeManager::new();
/// assert_eq!(time.current_tick(), 0);
///
/// time.advance_tick();
/// assert_eq!(time.current_tick(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeManager {
    /// Total ticks elapsed since boarding started
    current_tick: usize,
}

impl TimeManager {
    /// Create a clock at tick zero
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Advance time by one tick
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }

    /// Get the number of ticks elapsed so far
    ///
    /// During a pass this is also the zero-based index of that pass.
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }
}
