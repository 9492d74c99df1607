//! Boarding Engine
//!
//! Discrete-time boarding loop. Each tick is one pass:
//!
//! ```text
//! For each tick t:
//! 1. Admission: if the aisle head is free, the next passenger in the
//!    boarding order steps onto it (Loading phase only)
//! 2. Movement sweep: aisle columns from the rear of the plane to the gate
//!    - Stowing passengers sit down in their seat cell
//!    - Passengers at their row column start stowing
//!    - Anyone still in the aisle steps one column rearward if it is free
//! 3. Advance time
//! 4. Completion: a pass that began in Draining ends boarding once the
//!    aisle is clear
//! ```
//!
//! Sweeping from the rear means a cell vacated this pass can be filled by
//! the passenger directly behind it in the same pass, so a moving queue
//! advances as a block.
//!
//! # Example
//!
//! ```rust
//! use boarding_simulator_core_rs::orchestrator::{BoardingPhase, BoardingStepper};
//! use boarding_simulator_core_rs::Plane;
//!
//! let plane = Plane::new(1).unwrap();
//! let mut stepper = BoardingStepper::new(&plane, None).unwrap();
//!
//! let first = stepper.tick();
//! assert_eq!(first.tick, 0);
//! assert!(first.admitted.is_some());
//!
//! let ticks = stepper.run();
//! assert_eq!(ticks, 22);
//! assert_eq!(stepper.phase(), BoardingPhase::Done);
//! ```

use crate::core::time::TimeManager;
use crate::models::event::{Event, EventLog};
use crate::models::grid::{GridPosition, OccupancyGrid};
use crate::models::passenger::{BoardingStatus, PassengerId};
use crate::models::plane::Plane;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Passenger identity unknown to the registry
    #[error("Passenger not found: {0}")]
    PassengerNotFound(String),

    /// Seat unknown to the registry or missing from the boarding order
    #[error("Seat not found: {0}")]
    SeatNotFound(String),

    /// Row label not part of the plane
    #[error("Row not found: {0}")]
    RowNotFound(String),
}

/// Stepper lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardingPhase {
    /// Still admitting passengers from the boarding order
    Loading,
    /// Order exhausted, passengers still in the aisle
    Draining,
    /// Aisle clear after the order was exhausted
    Done,
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// Zero-based index of the pass
    pub tick: usize,

    /// Passenger admitted to the aisle head this pass
    pub admitted: Option<PassengerId>,

    /// Number of passengers who sat down this pass
    pub num_seated: usize,

    /// Passengers left in the aisle after the pass
    pub in_aisle: usize,

    /// Phase after the pass
    pub phase: BoardingPhase,
}

/// Everything a finished (or stopped) run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardingOutcome {
    /// Elapsed ticks
    pub ticks: usize,

    /// Phase the stepper ended in (`Done` unless stopped early)
    pub phase: BoardingPhase,

    /// Watched passenger, if the run stopped on one
    pub stopped_on: Option<PassengerId>,

    /// Elapsed ticks at which each passenger sat down, indexed by identity
    pub arrivals: Vec<Option<usize>>,

    pub event_log: EventLog,
}

impl BoardingOutcome {
    /// Elapsed ticks when `passenger` sat down, if they did
    pub fn arrival_tick(&self, passenger: PassengerId) -> Option<usize> {
        self.arrivals.get(passenger.index()).copied().flatten()
    }

    /// Number of passengers in their seats
    pub fn num_seated(&self) -> usize {
        self.arrivals.iter().filter(|a| a.is_some()).count()
    }
}

/// Runs one boarding of a plane
///
/// Owns its grid and passenger states exclusively; the plane is only read.
pub struct BoardingStepper<'a> {
    plane: &'a Plane,

    grid: OccupancyGrid,

    time_manager: TimeManager,

    phase: BoardingPhase,

    /// Passengers in admission order
    queue: Vec<PassengerId>,

    /// Index into `queue` of the next passenger to admit
    cursor: usize,

    /// Seat cell of each passenger, indexed by identity
    targets: Vec<GridPosition>,

    /// Indexed by identity
    status: Vec<BoardingStatus>,

    /// Indexed by identity
    arrivals: Vec<Option<usize>>,

    stop: Option<PassengerId>,

    event_log: EventLog,
}

impl<'a> BoardingStepper<'a> {
    /// Prepare a run over `plane`
    ///
    /// # Errors
    ///
    /// * `PassengerNotFound` - `stop` is not a passenger of this plane
    /// * `SeatNotFound` - the boarding order names a seat the plane lacks
    /// * `InvalidConfig` - the boarding order skips or repeats seats
    pub fn new(plane: &'a Plane, stop: Option<PassengerId>) -> Result<Self, SimulationError> {
        let registry = plane.registry();

        if let Some(passenger) = stop {
            if !registry.contains(passenger) {
                return Err(SimulationError::PassengerNotFound(passenger.to_string()));
            }
        }

        let order = plane.boarding_order();
        if order.len() != registry.len() {
            return Err(SimulationError::InvalidConfig(format!(
                "boarding order has {} seats, plane has {}",
                order.len(),
                registry.len()
            )));
        }

        let mut queued = vec![false; registry.len()];
        let mut queue = Vec::with_capacity(order.len());
        for seat in order {
            let passenger = registry
                .passenger_at(seat)
                .ok_or_else(|| SimulationError::SeatNotFound(seat.to_string()))?;
            if std::mem::replace(&mut queued[passenger.index()], true) {
                return Err(SimulationError::InvalidConfig(format!(
                    "boarding order repeats seat {}",
                    seat
                )));
            }
            queue.push(passenger);
        }

        let targets = registry
            .iter()
            .map(|(_, seat)| plane.seat_position(seat))
            .collect::<Result<Vec<_>, _>>()?;

        let phase = if queue.is_empty() {
            BoardingPhase::Done
        } else {
            BoardingPhase::Loading
        };

        Ok(Self {
            plane,
            grid: plane.grid().clone(),
            time_manager: TimeManager::new(),
            phase,
            queue,
            cursor: 0,
            targets,
            status: vec![BoardingStatus::Queued; registry.len()],
            arrivals: vec![None; registry.len()],
            stop,
            event_log: EventLog::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Ticks elapsed so far
    pub fn current_tick(&self) -> usize {
        self.time_manager.current_tick()
    }

    pub fn phase(&self) -> BoardingPhase {
        self.phase
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Boarding state of `passenger`, or `None` if unknown
    pub fn status_of(&self, passenger: PassengerId) -> Option<BoardingStatus> {
        self.status.get(passenger.index()).copied()
    }

    /// Passengers not yet admitted
    pub fn remaining_in_queue(&self) -> usize {
        self.queue.len() - self.cursor
    }

    /// True once the watched passenger occupies its own seat cell
    pub fn stop_condition_met(&self) -> bool {
        self.stop
            .is_some_and(|p| self.grid.occupant(self.targets[p.index()]) == Some(p))
    }

    // ========================================================================
    // Tick Loop Implementation
    // ========================================================================

    /// Step until boarding is done or the stop condition holds
    ///
    /// Returns the elapsed tick count.
    pub fn run(&mut self) -> usize {
        while self.phase != BoardingPhase::Done {
            if self.stop_condition_met() {
                if let Some(passenger) = self.stop {
                    self.event_log.log(Event::StopConditionReached {
                        tick: self.current_tick(),
                        passenger,
                    });
                }
                break;
            }
            self.tick();
        }
        self.current_tick()
    }

    /// Execute one Admission + Movement pass
    ///
    /// Does nothing once the phase is `Done`.
    pub fn tick(&mut self) -> TickResult {
        let tick = self.current_tick();

        if self.phase == BoardingPhase::Done {
            return TickResult {
                tick,
                admitted: None,
                num_seated: 0,
                in_aisle: 0,
                phase: self.phase,
            };
        }

        let was_draining = self.phase == BoardingPhase::Draining;

        // STEP 1: ADMISSION
        let admitted = if was_draining { None } else { self.admit(tick) };

        // STEP 2: MOVEMENT SWEEP
        let num_seated = self.sweep(tick);

        // STEP 3: ADVANCE TIME
        self.time_manager.advance_tick();

        // STEP 4: COMPLETION
        // Only the aisle row is inspected; anyone off it is in a seat.
        if was_draining && self.grid.is_aisle_clear() {
            self.phase = BoardingPhase::Done;
            self.event_log.log(Event::BoardingComplete { tick });
        }

        TickResult {
            tick,
            admitted,
            num_seated,
            in_aisle: self.grid.aisle_count(),
            phase: self.phase,
        }
    }

    /// Put the next passenger on the aisle head if it is free
    fn admit(&mut self, tick: usize) -> Option<PassengerId> {
        let head = self.grid.aisle_head();
        if self.grid.is_occupied(head) {
            return None;
        }

        let Some(&passenger) = self.queue.get(self.cursor) else {
            self.phase = BoardingPhase::Draining;
            self.event_log.log(Event::QueueExhausted { tick });
            return None;
        };

        self.cursor += 1;
        self.grid.place(head, passenger);
        self.status[passenger.index()] = BoardingStatus::InAisle;

        let seat = self.plane.registry().seat_of(passenger).cloned();
        if let Some(seat) = seat {
            self.event_log.log(Event::Admitted {
                tick,
                passenger,
                seat,
            });
        }

        Some(passenger)
    }

    /// Apply movement rules to every aisle column, rear first
    ///
    /// Returns the number of passengers seated this pass.
    fn sweep(&mut self, tick: usize) -> usize {
        let width = self.grid.width();
        let mut num_seated = 0;

        for column in (0..width).rev() {
            let here = GridPosition::aisle(column);
            let Some(passenger) = self.grid.occupant(here) else {
                continue;
            };
            let target = self.targets[passenger.index()];

            match self.status[passenger.index()] {
                BoardingStatus::Stowing => {
                    self.grid.vacate(here);
                    self.grid.place(target, passenger);
                    self.status[passenger.index()] = BoardingStatus::Seated;
                    self.arrivals[passenger.index()] = Some(tick + 1);
                    self.event_log.log(Event::Seated {
                        tick,
                        passenger,
                        position: target,
                    });
                    num_seated += 1;
                    continue;
                }
                BoardingStatus::InAisle if column == target.column => {
                    self.status[passenger.index()] = BoardingStatus::Stowing;
                    self.event_log.log(Event::StartedStowing {
                        tick,
                        passenger,
                        column,
                    });
                }
                BoardingStatus::InAisle => {}
                other @ (BoardingStatus::Queued | BoardingStatus::Seated) => {
                    unreachable!("{} in aisle while {:?}", passenger, other)
                }
            }

            // A stower who just reached its column still shuffles forward
            // when there is room; it sits down from there next pass.
            let ahead = GridPosition::aisle(column + 1);
            if column + 1 < width && !self.grid.is_occupied(ahead) {
                self.grid.relocate(here, ahead);
            }
        }

        num_seated
    }

    /// Consume the stepper, keeping its results
    pub fn into_outcome(self) -> BoardingOutcome {
        let stopped_on = if self.phase == BoardingPhase::Done {
            None
        } else {
            self.stop.filter(|_| self.stop_condition_met())
        };

        BoardingOutcome {
            ticks: self.time_manager.current_tick(),
            phase: self.phase,
            stopped_on,
            arrivals: self.arrivals,
            event_log: self.event_log,
        }
    }
}
