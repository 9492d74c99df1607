//! Python bindings (PyO3)
//!
//! Enabled with the `pyo3` feature.

pub mod plane;

use crate::orchestrator::SimulationError;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::PyErr;

/// Lookup failures become `KeyError`, configuration problems `ValueError`
pub(crate) fn to_py_err(err: SimulationError) -> PyErr {
    match err {
        SimulationError::InvalidConfig(_) => PyValueError::new_err(err.to_string()),
        SimulationError::PassengerNotFound(_)
        | SimulationError::SeatNotFound(_)
        | SimulationError::RowNotFound(_) => PyKeyError::new_err(err.to_string()),
    }
}
