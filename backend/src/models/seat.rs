//! Seat identity
//!
//! A seat is a logical position: row label, side of the aisle, and distance
//! from the aisle. Each side of a row holds three seats (a 3-3 cabin).

use crate::models::rows::RowNames;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the aisle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side of the aisle
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Single-letter code (`L` / `R`)
    pub fn code(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Offset of a seat from the aisle
///
/// Serialized as its numeric value (1, 2, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Distance {
    /// Aisle-adjacent seat
    Aisle = 1,
    Middle = 2,
    Window = 3,
}

impl Distance {
    /// Window to aisle
    pub const OUTER_TO_INNER: [Distance; 3] = [Distance::Window, Distance::Middle, Distance::Aisle];

    /// Aisle to window
    pub const INNER_TO_OUTER: [Distance; 3] = [Distance::Aisle, Distance::Middle, Distance::Window];

    /// Numeric offset (1 = aisle, 3 = window)
    pub fn value(self) -> usize {
        self as usize
    }
}

impl From<Distance> for u8 {
    fn from(distance: Distance) -> Self {
        distance as u8
    }
}

impl TryFrom<u8> for Distance {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Distance::Aisle),
            2 => Ok(Distance::Middle),
            3 => Ok(Distance::Window),
            other => Err(format!("seat distance must be 1, 2 or 3, got {}", other)),
        }
    }
}

/// Logical seat: `(row, side, distance)`
///
/// Seats are plain values; equal fields mean the same seat.
///
/// # Example
/// ```
/// use boarding_simulator_core_rs::{Distance, Seat, Side};
///
/// let seat = Seat::new("C", Side::Right, Distance::Window);
/// assert_eq!(seat.to_string(), "(C,R,3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub row: String,
    pub side: Side,
    pub distance: Distance,
}

impl Seat {
    pub fn new(row: impl Into<String>, side: Side, distance: Distance) -> Self {
        Self {
            row: row.into(),
            side,
            distance,
        }
    }

    /// Airline-style label such as `"4B"`
    ///
    /// Row numbers count from the front of the plane (the rearmost row `A`
    /// is row `length`). Letters run from the Left window (`A`) to the Right
    /// window (`F`). Returns `None` if the row is not part of `rows`.
    ///
    /// # Example
    /// ```
    /// use boarding_simulator_core_rs::models::rows::row_names;
    /// use boarding_simulator_core_rs::{Distance, Seat, Side};
    ///
    /// let rows = row_names(5);
    /// let seat = Seat::new("B", Side::Left, Distance::Middle);
    /// assert_eq!(seat.classic_position(&rows).as_deref(), Some("4B"));
    /// ```
    pub fn classic_position(&self, rows: &RowNames) -> Option<String> {
        const LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

        let from_behind = rows.position(&self.row)?;
        let classic_row = rows.len() - from_behind;
        let letter = match self.side {
            Side::Left => LETTERS[3 - self.distance.value()],
            Side::Right => LETTERS[2 + self.distance.value()],
        };
        Some(format!("{}{}", classic_row, letter))
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.row, self.side, self.distance.value())
    }
}
