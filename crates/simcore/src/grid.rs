//! Ordered sample times shared by every trace a simulation produces.

use serde::{Deserialize, Serialize};

use crate::SimError;

/// Upper bound on the number of steps of a fixed-step grid.
pub const MAX_STEPS: f64 = u32::MAX as f64;

/// Strictly increasing sequence of sample times, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// `n` evenly spaced samples over `[start, end]`, both ends included.
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self, SimError> {
        if n < 2 {
            return Err(SimError::TooFewSamples {
                required: 2,
                actual: n,
            });
        }
        let span = end - start;
        let last = (n - 1) as f64;
        let samples = (0..n)
            .map(|i| if i == n - 1 { end } else { start + span * (i as f64) / last })
            .collect();
        Self::from_samples(samples)
    }

    /// Fixed-step grid of `floor(t_end / dt) + 1` samples spread evenly over
    /// `[0, t_end]`.
    ///
    /// The last sample is always `t_end`, so the spacing is slightly wider
    /// than `dt` when `t_end / dt` is not a whole number.
    pub fn uniform(t_end: f64, dt: f64) -> Result<Self, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidStep(dt));
        }
        if !(t_end.is_finite() && t_end >= 0.0) {
            return Err(SimError::InvalidDuration(t_end));
        }
        let steps = (t_end / dt).floor();
        if !(steps < MAX_STEPS) {
            return Err(SimError::TooManySamples(steps));
        }
        let n = steps as usize + 1;
        if n < 2 {
            return Ok(TimeGrid { samples: vec![0.0] });
        }
        Self::linspace(0.0, t_end, n)
    }

    /// Wraps caller-provided sample times after checking they strictly increase.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self, SimError> {
        if samples.is_empty() {
            return Err(SimError::TooFewSamples {
                required: 1,
                actual: 0,
            });
        }
        for (index, pair) in samples.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(SimError::GridNotIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        Ok(TimeGrid { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }

    /// Fails unless the first sample is exactly zero.
    pub fn require_origin(&self) -> Result<(), SimError> {
        if self.start() != 0.0 {
            return Err(SimError::GridNotAtOrigin(self.start()));
        }
        Ok(())
    }
}
