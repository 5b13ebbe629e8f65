//! Time responses of transfer functions on a caller-provided grid.

use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use simcore::{Step, TimeGrid, TimeSignal};

use crate::{ControlError, Discretized, StateSpace, TransferFunction};

/// Output samples aligned with the time grid they were computed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeResponse {
    pub time: Vec<f64>,
    pub output: Vec<f64>,
}

impl TimeResponse {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(t, y)` pairs in time order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.output.iter().copied())
    }

    pub fn final_value(&self) -> Option<f64> {
        self.output.last().copied()
    }
}

/// Relative tolerance under which two consecutive grid spacings reuse the
/// same discretization.
const SPACING_REUSE_TOLERANCE: f64 = 1e-12;

/// Response of `tf` from rest to `input`, held constant between grid samples.
///
/// The grid must start at `t = 0`. Propagation between samples is exact for
/// piecewise-constant inputs whose jumps fall on grid points.
pub fn forced_response<S: TimeSignal>(
    tf: &TransferFunction,
    grid: &TimeGrid,
    input: &S,
) -> Result<TimeResponse, ControlError> {
    grid.require_origin()?;

    let ss = StateSpace::from_transfer_function(tf);
    let times = grid.as_slice();
    let mut x = DVector::zeros(ss.order());
    let mut output = Vec::with_capacity(times.len());
    output.push(ss.output(&x, input.value_at(times[0])));

    let mut cached: Option<(f64, Discretized)> = None;
    let mut discretizations = 0usize;
    for window in times.windows(2) {
        let (t0, t1) = (window[0], window[1]);
        let h = t1 - t0;
        let reuse = matches!(&cached, Some((prev, _)) if ((h - prev) / prev).abs() <= SPACING_REUSE_TOLERANCE);
        if !reuse {
            cached = Some((h, ss.discretize(h)));
            discretizations += 1;
        }
        if let Some((_, step)) = &cached {
            let u = input.value_at(t0);
            x = &step.phi * &x + &step.gamma * u;
        }
        output.push(ss.output(&x, input.value_at(t1)));
    }

    debug!(
        "forced response: order {}, {} samples, {} discretizations",
        ss.order(),
        times.len(),
        discretizations
    );

    Ok(TimeResponse {
        time: times.to_vec(),
        output,
    })
}

/// Unit step response of `tf` sampled on `grid`.
pub fn step_response(tf: &TransferFunction, grid: &TimeGrid) -> Result<TimeResponse, ControlError> {
    forced_response(tf, grid, &Step::unit())
}
