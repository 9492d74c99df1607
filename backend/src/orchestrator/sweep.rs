//! Size sweep
//!
//! Boards a series of independent planes and collects `(length, ticks)`
//! pairs, the raw data for boarding-time-versus-size charts.

use super::SimulationError;
use crate::models::plane::{BoardingConfig, Plane};
use crate::policy::PolicyConfig;
use serde::{Deserialize, Serialize};

/// Boarding time of one plane size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeResult {
    pub length: usize,
    pub ticks: usize,
}

/// Board one plane per length in `lengths`
///
/// # Example
///
/// ```rust
/// use boarding_simulator_core_rs::orchestrator::boarding_time_by_size;
/// use boarding_simulator_core_rs::PolicyConfig;
///
/// let table = boarding_time_by_size(1..=3, PolicyConfig::Steffen).unwrap();
/// let ticks: Vec<usize> = table.iter().map(|r| r.ticks).collect();
/// assert_eq!(ticks, vec![22, 29, 30]);
/// ```
pub fn boarding_time_by_size(
    lengths: impl IntoIterator<Item = usize>,
    policy: PolicyConfig,
) -> Result<Vec<SizeResult>, SimulationError> {
    lengths
        .into_iter()
        .map(|length| -> Result<SizeResult, SimulationError> {
            let plane = Plane::from_config(&BoardingConfig { length, policy })?;
            let ticks = plane.run_boarding(None)?;
            Ok(SizeResult { length, ticks })
        })
        .collect()
}

/// Lengths at which boarding got strictly faster than the previous size
///
/// Returns the later length of each offending pair. Expected to be empty.
pub fn monotonicity_violations(results: &[SizeResult]) -> Vec<usize> {
    results
        .windows(2)
        .filter(|pair| pair[1].ticks < pair[0].ticks)
        .map(|pair| pair[1].length)
        .collect()
}
