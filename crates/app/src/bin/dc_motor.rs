//! Separately-excited DC motor under a piecewise armature voltage and constant
//! load torque, integrated with forward Euler.

use std::error::Error;
use std::path::Path;

use log::info;
use sim_app::pipelines::{run_dc_motor, write_motor_outputs};
use sim_app::{logging, MotorRunConfig, OUTPUT_DIR};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let config = MotorRunConfig::default();
    info!("configuration: {}", serde_json::to_string(&config)?);

    let trace = run_dc_motor(&config)?;
    for path in write_motor_outputs(Path::new(OUTPUT_DIR), &config, &trace)? {
        info!("wrote {}", path.display());
    }
    Ok(())
}
