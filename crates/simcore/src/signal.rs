//! Scalar functions of time used to drive a simulation.
//!
//! Anything that maps a time in seconds to a value implements [`TimeSignal`],
//! including plain closures, so inputs such as an armature voltage or a load
//! torque can be swapped without touching the integrator.

use serde::{Deserialize, Serialize};

use crate::SimError;

/// A scalar input evaluated at simulation time `t` (seconds).
pub trait TimeSignal {
    fn value_at(&self, t: f64) -> f64;
}

impl<F> TimeSignal for F
where
    F: Fn(f64) -> f64,
{
    fn value_at(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Same value at every time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constant(pub f64);

impl TimeSignal for Constant {
    fn value_at(&self, _t: f64) -> f64 {
        self.0
    }
}

/// Jumps from `before` to `after` at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub time: f64,
    pub before: f64,
    pub after: f64,
}

impl Step {
    /// Unit step starting at `t = 0`.
    pub fn unit() -> Self {
        Step {
            time: 0.0,
            before: 0.0,
            after: 1.0,
        }
    }
}

impl TimeSignal for Step {
    fn value_at(&self, t: f64) -> f64 {
        if t < self.time { self.before } else { self.after }
    }
}

/// Piecewise-constant signal over half-open intervals.
///
/// With breakpoints `b0 < b1 < ... < bn-1` and values `v0..=vn`, the signal is
/// `v0` for `t < b0`, `vi` on `[b(i-1), bi)` and `vn` for `t >= bn-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseConstant {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

impl PiecewiseConstant {
    pub fn new(breakpoints: Vec<f64>, values: Vec<f64>) -> Result<Self, SimError> {
        if values.len() != breakpoints.len() + 1 {
            return Err(SimError::IntervalCountMismatch {
                expected: breakpoints.len() + 1,
                actual: values.len(),
            });
        }
        if let Some(i) = breakpoints.iter().position(|b| !b.is_finite()) {
            return Err(SimError::UnsortedBreakpoints(i));
        }
        if let Some(i) = breakpoints.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SimError::UnsortedBreakpoints(i + 1));
        }
        Ok(PiecewiseConstant { breakpoints, values })
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl TimeSignal for PiecewiseConstant {
    fn value_at(&self, t: f64) -> f64 {
        let interval = self.breakpoints.partition_point(|&b| b <= t);
        self.values[interval]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_signal() {
        let ramp = |t: f64| 2.0 * t;
        assert_eq!(ramp.value_at(3.0), 6.0);
    }

    #[test]
    fn test_piecewise_boundaries_are_half_open() {
        let signal = PiecewiseConstant::new(vec![1.0, 2.0], vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(signal.value_at(-5.0), 10.0);
        assert_eq!(signal.value_at(0.999), 10.0);
        assert_eq!(signal.value_at(1.0), 20.0);
        assert_eq!(signal.value_at(1.999), 20.0);
        assert_eq!(signal.value_at(2.0), 30.0);
        assert_eq!(signal.value_at(1e9), 30.0);
    }

    #[test]
    fn test_piecewise_rejects_bad_layout() {
        assert_eq!(
            PiecewiseConstant::new(vec![1.0, 2.0], vec![0.0, 1.0]),
            Err(SimError::IntervalCountMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            PiecewiseConstant::new(vec![2.0, 1.0], vec![0.0, 1.0, 2.0]),
            Err(SimError::UnsortedBreakpoints(1))
        );
        assert_eq!(
            PiecewiseConstant::new(vec![f64::NAN], vec![0.0, 1.0]),
            Err(SimError::UnsortedBreakpoints(0))
        );
    }

    #[test]
    fn test_unit_step_switches_at_origin() {
        let step = Step::unit();
        assert_eq!(step.value_at(-1e-12), 0.0);
        assert_eq!(step.value_at(0.0), 1.0);
        assert_eq!(Constant(2.5).value_at(-3.0), 2.5);
    }
}
