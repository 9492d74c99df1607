//! Occupancy grid
//!
//! A `7 x (length + 10)` grid of cells. Grid row 3 is the aisle; rows 0..=2
//! hold Right-side seats and rows 4..=6 hold Left-side seats, distance 1
//! nearest the aisle. Columns `0..10` are the boarding-gate corridor where
//! only the aisle row is passable; columns `10..length + 10` are the cabin.
//!
//! ```text
//! column:  0 .. 9 | 10 ........ length+9
//! row 0    ####### | R3 seats (window)
//! row 1    ####### | R2 seats
//! row 2    ####### | R1 seats
//! row 3    corridor  aisle  aisle  aisle     <- passengers walk right
//! row 4    ####### | L1 seats
//! row 5    ####### | L2 seats
//! row 6    ####### | L3 seats (window)
//! ```
//!
//! # Critical Invariants
//!
//! A passenger identity occupies at most one cell at any time. Placing a
//! passenger into an occupied or blocked cell panics.

use crate::models::passenger::PassengerId;
use crate::models::seat::{Distance, Side};
use serde::{Deserialize, Serialize};

/// Number of grid rows (3 seat rows + aisle + 3 seat rows)
pub const GRID_ROWS: usize = 7;

/// Grid row index of the aisle
pub const AISLE_ROW: usize = 3;

/// Columns of boarding-gate corridor in front of the cabin
pub const CORRIDOR_LENGTH: usize = 10;

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Not traversable (corridor walls)
    Blocked,
    /// Traversable and free
    Empty,
    Occupied(PassengerId),
}

impl Cell {
    pub fn occupant(self) -> Option<PassengerId> {
        match self {
            Cell::Occupied(passenger) => Some(passenger),
            _ => None,
        }
    }

    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }
}

/// A `(row, column)` grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Aisle cell at `column`
    pub fn aisle(column: usize) -> Self {
        Self::new(AISLE_ROW, column)
    }
}

/// Corridor + cabin occupancy for one plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    length: usize,
    width: usize,
    /// Row-major, `GRID_ROWS * width` cells
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Empty grid for a plane of `length` rows
    pub fn new(length: usize) -> Self {
        let width = length + CORRIDOR_LENGTH;
        let mut cells = vec![Cell::Empty; GRID_ROWS * width];
        for row in (0..GRID_ROWS).filter(|&r| r != AISLE_ROW) {
            for column in 0..CORRIDOR_LENGTH {
                cells[row * width + column] = Cell::Blocked;
            }
        }
        Self {
            length,
            width,
            cells,
        }
    }

    /// Number of cabin rows
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of columns (corridor + cabin)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell where the boarding queue enters the corridor
    pub fn aisle_head(&self) -> GridPosition {
        GridPosition::aisle(0)
    }

    /// Grid cell of the seat at `(row_index, side, distance)`
    ///
    /// Row index 0 maps to the rearmost cabin column; higher indices move
    /// toward the corridor.
    pub fn seat_position(&self, row_index: usize, side: Side, distance: Distance) -> GridPosition {
        debug_assert!(row_index < self.length, "row {} outside plane", row_index);
        let column = self.length + CORRIDOR_LENGTH - 1 - row_index;
        let row = match side {
            Side::Left => AISLE_ROW + distance.value(),
            Side::Right => AISLE_ROW - distance.value(),
        };
        GridPosition::new(row, column)
    }

    fn offset(&self, pos: GridPosition) -> Option<usize> {
        (pos.row < GRID_ROWS && pos.column < self.width).then(|| pos.row * self.width + pos.column)
    }

    /// Cell at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: GridPosition) -> Option<Cell> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// Passenger at `pos`, if any
    pub fn occupant(&self, pos: GridPosition) -> Option<PassengerId> {
        self.get(pos).and_then(Cell::occupant)
    }

    /// True if `pos` is inside the grid and held by a passenger
    pub fn is_occupied(&self, pos: GridPosition) -> bool {
        self.get(pos).is_some_and(Cell::is_occupied)
    }

    /// Put `passenger` into the free cell at `pos`
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds, blocked, or already occupied.
    pub fn place(&mut self, pos: GridPosition, passenger: PassengerId) {
        let i = match self.offset(pos) {
            Some(i) => i,
            None => panic!("{:?} outside {}x{} grid", pos, GRID_ROWS, self.width),
        };
        assert!(
            self.cells[i] == Cell::Empty,
            "cannot place {} at {:?}: cell is {:?}",
            passenger,
            pos,
            self.cells[i]
        );
        self.cells[i] = Cell::Occupied(passenger);
    }

    /// Free the cell at `pos`, returning its former occupant
    pub fn vacate(&mut self, pos: GridPosition) -> Option<PassengerId> {
        let i = self.offset(pos)?;
        let occupant = self.cells[i].occupant()?;
        self.cells[i] = Cell::Empty;
        Some(occupant)
    }

    /// Move whoever stands at `from` into the free cell `to`
    pub fn relocate(&mut self, from: GridPosition, to: GridPosition) -> Option<PassengerId> {
        let passenger = self.vacate(from)?;
        self.place(to, passenger);
        Some(passenger)
    }

    /// Occupant of each aisle column, front of the plane last
    pub fn aisle(&self) -> impl Iterator<Item = Option<PassengerId>> + '_ {
        let start = AISLE_ROW * self.width;
        self.cells[start..start + self.width].iter().map(|c| c.occupant())
    }

    /// True when no aisle cell holds a passenger
    pub fn is_aisle_clear(&self) -> bool {
        self.aisle().all(|c| c.is_none())
    }

    /// Number of passengers standing in the aisle
    pub fn aisle_count(&self) -> usize {
        self.aisle().filter(Option::is_some).count()
    }

    /// Number of passengers anywhere on the grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}
