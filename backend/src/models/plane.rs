//! Plane
//!
//! A plane of `length` rows owns everything that is fixed for a boarding
//! run: row labels, the passenger registry, the empty occupancy grid and the
//! (lazily built, then immutable) boarding order.
//!
//! # Example
//!
//! ```rust
//! use boarding_simulator_core_rs::Plane;
//!
//! let plane = Plane::new(5).unwrap();
//! assert_eq!(plane.registry().len(), 30);
//! assert_eq!(plane.boarding_order().len(), 30);
//! assert_eq!(plane.run_boarding(None).unwrap(), 43);
//! ```

use crate::models::grid::{GridPosition, OccupancyGrid};
use crate::models::passenger::{PassengerId, PassengerRegistry};
use crate::models::rows::RowNames;
use crate::models::seat::Seat;
use crate::orchestrator::{BoardingOutcome, BoardingStepper, SimulationError};
use crate::policy::PolicyConfig;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Largest plane whose rows all get one- or two-letter labels (`A..ZZ`)
pub const MAX_PLANE_LENGTH: usize = 26 + 26 * 26;

/// Plane configuration
///
/// ```rust
/// use boarding_simulator_core_rs::{BoardingConfig, Plane, PolicyConfig};
///
/// let config: BoardingConfig =
///     serde_json::from_str(r#"{"length": 4, "policy": {"type": "BackToFront"}}"#).unwrap();
/// assert_eq!(config.policy, PolicyConfig::BackToFront);
///
/// let plane = Plane::from_config(&config).unwrap();
/// assert_eq!(plane.length(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingConfig {
    /// Number of seat rows
    pub length: usize,

    /// Boarding order heuristic (defaults to Steffen)
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl BoardingConfig {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            policy: PolicyConfig::default(),
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if self.length > MAX_PLANE_LENGTH {
            return Err(SimulationError::InvalidConfig(format!(
                "plane length {} exceeds maximum of {} rows",
                self.length, MAX_PLANE_LENGTH
            )));
        }
        Ok(())
    }
}

/// A single-aisle 3-3 plane ready to board
#[derive(Debug)]
pub struct Plane {
    length: usize,
    rows: RowNames,
    registry: PassengerRegistry,
    grid: OccupancyGrid,
    policy: PolicyConfig,
    boarding_order: OnceCell<Vec<Seat>>,
}

impl Plane {
    /// Plane of `length` rows boarding with the Steffen method
    pub fn new(length: usize) -> Result<Self, SimulationError> {
        Self::from_config(&BoardingConfig::new(length))
    }

    /// Plane of `length` rows boarding with `policy`
    pub fn with_policy(length: usize, policy: PolicyConfig) -> Result<Self, SimulationError> {
        Self::from_config(&BoardingConfig { length, policy })
    }

    /// Build a plane from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Plane)` - Fully built plane
    /// * `Err(SimulationError::InvalidConfig)` - Length out of range
    pub fn from_config(config: &BoardingConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let rows = RowNames::new(config.length);
        let registry = PassengerRegistry::generate(&rows);

        Ok(Self {
            length: config.length,
            rows,
            registry,
            grid: OccupancyGrid::new(config.length),
            policy: config.policy,
            boarding_order: OnceCell::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn rows(&self) -> &RowNames {
        &self.rows
    }

    pub fn registry(&self) -> &PassengerRegistry {
        &self.registry
    }

    /// Empty grid every run starts from
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn policy(&self) -> PolicyConfig {
        self.policy
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Boarding order, built on first call and returned unchanged afterwards
    pub fn boarding_order(&self) -> &[Seat] {
        self.boarding_order
            .get_or_init(|| self.policy.build().boarding_order(&self.rows))
    }

    /// Resolve a passenger name such as `"name_12"`
    pub fn passenger(&self, name: &str) -> Result<PassengerId, SimulationError> {
        name.parse::<PassengerId>()
            .ok()
            .filter(|&p| self.registry.contains(p))
            .ok_or_else(|| SimulationError::PassengerNotFound(name.to_string()))
    }

    /// Seat assigned to `passenger`
    pub fn seat_of(&self, passenger: PassengerId) -> Result<&Seat, SimulationError> {
        self.registry
            .seat_of(passenger)
            .ok_or_else(|| SimulationError::PassengerNotFound(passenger.to_string()))
    }

    /// Grid cell of `seat`
    pub fn seat_position(&self, seat: &Seat) -> Result<GridPosition, SimulationError> {
        let row_index = self
            .rows
            .position(&seat.row)
            .ok_or_else(|| SimulationError::RowNotFound(seat.row.clone()))?;
        Ok(self.grid.seat_position(row_index, seat.side, seat.distance))
    }

    /// Airline-style label of `seat`, e.g. `"12F"`
    pub fn classic_position(&self, seat: &Seat) -> Result<String, SimulationError> {
        seat.classic_position(&self.rows)
            .ok_or_else(|| SimulationError::RowNotFound(seat.row.clone()))
    }

    /// Zero-based position of `passenger` in the boarding order
    pub fn passenger_boarding_rank(&self, passenger: PassengerId) -> Result<usize, SimulationError> {
        let seat = self.seat_of(passenger)?;
        self.boarding_order()
            .iter()
            .position(|s| s == seat)
            .ok_or_else(|| SimulationError::SeatNotFound(seat.to_string()))
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Board the plane and report everything that happened
    ///
    /// With `stop = Some(p)` stepping halts as soon as `p` is in its seat.
    pub fn simulate(&self, stop: Option<PassengerId>) -> Result<BoardingOutcome, SimulationError> {
        let mut stepper = BoardingStepper::new(self, stop)?;
        stepper.run();
        Ok(stepper.into_outcome())
    }

    /// Ticks until boarding completes, or until `stop` is seated
    pub fn run_boarding(&self, stop: Option<PassengerId>) -> Result<usize, SimulationError> {
        Ok(self.simulate(stop)?.ticks)
    }
}
