use thiserror::Error;

/// Errors raised while building time grids or configuring a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("time grid needs at least {required} samples, got {actual}")]
    TooFewSamples { required: usize, actual: usize },

    #[error("time grid must start at 0, got {0}")]
    GridNotAtOrigin(f64),

    #[error("time grid is not strictly increasing at index {index} ({previous} -> {current})")]
    GridNotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("step size must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("fixed-step grid would need {0} steps")]
    TooManySamples(f64),

    #[error("duration must be non-negative and finite, got {0}")]
    InvalidDuration(f64),

    #[error("breakpoints must be sorted and finite (index {0})")]
    UnsortedBreakpoints(usize),

    #[error("piecewise signal needs {expected} interval values, got {actual}")]
    IntervalCountMismatch { expected: usize, actual: usize },
}
