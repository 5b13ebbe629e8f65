//! Unit step response of a mass-spring-damper, `1 / (m s^2 + b s + k)`.

use std::error::Error;
use std::path::Path;

use log::info;
use sim_app::pipelines::{run_step_response, write_step_outputs};
use sim_app::{logging, StepRunConfig, OUTPUT_DIR};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let config = StepRunConfig::default();
    info!("configuration: {}", serde_json::to_string(&config)?);

    let response = run_step_response(&config)?;
    for path in write_step_outputs(Path::new(OUTPUT_DIR), &config, &response)? {
        info!("wrote {}", path.display());
    }
    Ok(())
}
