//! PyO3 wrapper for Plane
//!
//! # Example (from Python)
//!
//! ```python
//! from boarding_simulator_core_rs import Plane
//!
//! plane = Plane(30)
//! print(plane.run_boarding())              # whole plane
//! print(plane.run_boarding("name_42"))     # until name_42 is seated
//! print(plane.passenger_boarding_rank("name_42"))
//! ```

use pyo3::prelude::*;

use super::to_py_err;
use crate::models::plane::Plane as RustPlane;
use crate::models::seat::Seat;

type SeatTuple = (String, String, u8);

fn seat_to_tuple(seat: &Seat) -> SeatTuple {
    (seat.row.clone(), seat.side.code().to_string(), seat.distance.into())
}

/// Python wrapper for a Rust Plane
#[pyclass(name = "Plane")]
pub struct PyPlane {
    inner: RustPlane,
}

#[pymethods]
impl PyPlane {
    /// Create a plane of `length` rows boarding with the Steffen method
    ///
    /// Raises ValueError if the length is out of range.
    #[new]
    fn new(length: usize) -> PyResult<Self> {
        let inner = RustPlane::new(length).map_err(to_py_err)?;
        Ok(PyPlane { inner })
    }

    #[getter]
    fn length(&self) -> usize {
        self.inner.length()
    }

    /// Boarding order as `(row, side, distance)` tuples
    fn boarding_order(&self) -> Vec<SeatTuple> {
        self.inner.boarding_order().iter().map(seat_to_tuple).collect()
    }

    /// Seat of a passenger as a `(row, side, distance)` tuple
    fn seat_of(&self, passenger: &str) -> PyResult<SeatTuple> {
        let id = self.inner.passenger(passenger).map_err(to_py_err)?;
        let seat = self.inner.seat_of(id).map_err(to_py_err)?;
        Ok(seat_to_tuple(seat))
    }

    /// Ticks to board, or to seat `passenger` when given
    #[pyo3(signature = (passenger=None))]
    fn run_boarding(&self, passenger: Option<&str>) -> PyResult<usize> {
        let stop = passenger
            .map(|name| self.inner.passenger(name))
            .transpose()
            .map_err(to_py_err)?;
        self.inner.run_boarding(stop).map_err(to_py_err)
    }

    /// Zero-based call position of `passenger`
    fn passenger_boarding_rank(&self, passenger: &str) -> PyResult<usize> {
        let id = self.inner.passenger(passenger).map_err(to_py_err)?;
        self.inner.passenger_boarding_rank(id).map_err(to_py_err)
    }
}
