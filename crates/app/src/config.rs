//! In-source run configuration. Neither executable reads arguments or the
//! environment; edit the defaults here to change a scenario.

use electrical::{DcMotorParams, SimulationSettings};
use mechanics::MassSpringDamper;
use serde::{Deserialize, Serialize};

/// Directory receiving figures and CSV traces, relative to the working directory.
pub const OUTPUT_DIR: &str = "plots";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRunConfig {
    pub system: MassSpringDamper,
    /// Last sample time [s]
    pub t_end: f64,
    /// Number of evenly spaced samples over `[0, t_end]`
    pub samples: usize,
    /// File stem of the figure and trace
    pub output_stem: String,
}

impl Default for StepRunConfig {
    fn default() -> Self {
        StepRunConfig {
            system: MassSpringDamper::default(),
            t_end: 200.0,
            samples: 500,
            output_stem: "mass_spring_step".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorRunConfig {
    pub params: DcMotorParams,
    pub settings: SimulationSettings,
    /// Constant load torque [N·m]
    pub load_torque: f64,
    /// Upper bound on points drawn per chart; the CSV keeps every sample
    pub max_plot_points: usize,
    pub output_stem: String,
}

impl Default for MotorRunConfig {
    fn default() -> Self {
        MotorRunConfig {
            params: DcMotorParams::demo(),
            settings: SimulationSettings::new(100.0, 2e-4),
            load_torque: electrical::profile::DEMO_LOAD_TORQUE,
            max_plot_points: 20_000,
            output_stem: "dc_motor".to_string(),
        }
    }
}
