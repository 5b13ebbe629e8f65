//! Shared simulation vocabulary: time grids, time signals, integrators and errors.

pub mod error;
pub mod grid;
pub mod integrators;
pub mod signal;
pub mod traits;

pub use error::SimError;
pub use grid::TimeGrid;
pub use integrators::{ExplicitEuler, Integrator, RungeKutta4};
pub use signal::{Constant, PiecewiseConstant, Step, TimeSignal};
pub use traits::{OdeSystem, SimContext};
