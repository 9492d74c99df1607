//! Domain models for the boarding simulator

pub mod event;
pub mod grid;
pub mod passenger;
pub mod plane;
pub mod rows;
pub mod seat;

// Re-exports
pub use event::{Event, EventLog};
pub use grid::{Cell, GridPosition, OccupancyGrid};
pub use passenger::{BoardingStatus, PassengerId, PassengerRegistry};
pub use plane::{BoardingConfig, Plane};
pub use rows::RowNames;
pub use seat::{Distance, Seat, Side};
