//! Boarding Simulator Core - Rust Engine
//!
//! Discrete-time simulation of passengers boarding a single-aisle plane,
//! used to measure how long a boarding order takes and how that time scales
//! with plane size.
//!
//! # Architecture
//!
//! - **core**: Time management
//! - **models**: Domain types (Seat, rows, passenger registry, grid, Plane)
//! - **policy**: Boarding order heuristics (Steffen method, back-to-front)
//! - **orchestrator**: Boarding loop and multi-size sweeps
//!
//! # Critical Invariants
//!
//! 1. Every seat has exactly one passenger and vice versa
//! 2. A passenger occupies at most one grid cell at any tick
//! 3. Simulation is fully deterministic (no randomness anywhere)

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod policy;

// Re-exports for convenience
pub use core::time::TimeManager;
pub use models::{
    event::{Event, EventLog},
    grid::{Cell, GridPosition, OccupancyGrid},
    passenger::{BoardingStatus, PassengerId, PassengerRegistry},
    plane::{BoardingConfig, Plane, MAX_PLANE_LENGTH},
    rows::{row_names, RowNames},
    seat::{Distance, Seat, Side},
};
pub use orchestrator::{
    boarding_time_by_size, BoardingOutcome, BoardingPhase, BoardingStepper, SimulationError,
    SizeResult, TickResult,
};
pub use policy::{BackToFrontPolicy, BoardingPolicy, PolicyConfig, SteffenPolicy};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn boarding_simulator_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<ffi::plane::PyPlane>()?;
    Ok(())
}
