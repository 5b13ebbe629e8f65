//! Separately-excited DC motor model and simulation.

pub mod analysis;
pub mod motor;
pub mod profile;
pub mod simulation;

pub use analysis::{euler_stability_limit, steady_state, OperatingPoint};
pub use motor::{DcMotor, DcMotorParams, MotorInputs};
pub use profile::demo_voltage;
pub use simulation::{simulate, simulate_with, MotorTrace, SimulationSettings};
