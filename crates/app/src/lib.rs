//! Run configuration, rendering and output for the two simulation executables.

pub mod config;
pub mod export;
pub mod logging;
pub mod pipelines;
pub mod plot;

pub use config::{MotorRunConfig, StepRunConfig, OUTPUT_DIR};
