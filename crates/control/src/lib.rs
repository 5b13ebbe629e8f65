//! Linear time-invariant system tools
//!
//! This crate provides:
//! - Transfer functions as polynomial ratios in `s`
//! - Controllable canonical state-space realizations
//! - Exact zero-order-hold time responses (step and forced)
//! - Step response summaries (overshoot, rise and settling time)

pub mod error;
pub mod response;
pub mod state_space;
pub mod step_info;
pub mod transfer_function;

pub use error::*;
pub use response::*;
pub use state_space::*;
pub use step_info::*;
pub use transfer_function::*;
