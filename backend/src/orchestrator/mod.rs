//! Orchestrator - boarding loop and drivers
//!
//! See `engine.rs` for the tick loop and `sweep.rs` for multi-size runs.

pub mod engine;
pub mod sweep;

// Re-export main types for convenience
pub use engine::{BoardingOutcome, BoardingPhase, BoardingStepper, SimulationError, TickResult};
pub use sweep::{boarding_time_by_size, monotonicity_violations, SizeResult};
