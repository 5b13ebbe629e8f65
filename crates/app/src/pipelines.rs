//! The two simulation runs, from configuration to rendered output.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use control::{step_response, StepInfo, TimeResponse};
use electrical::{demo_voltage, euler_stability_limit, simulate, MotorInputs, MotorTrace};
use log::{info, warn};
use simcore::{Constant, TimeGrid};

use crate::config::{MotorRunConfig, StepRunConfig};
use crate::export::write_csv;
use crate::plot::{decimate, render_figure, Chart};

/// Unit step response of the configured mass-spring-damper.
pub fn run_step_response(config: &StepRunConfig) -> Result<TimeResponse, Box<dyn Error>> {
    let system = &config.system;
    info!(
        "mass-spring-damper: wn = {:.4} rad/s, zeta = {:.4} ({:?})",
        system.natural_frequency(),
        system.damping_ratio(),
        system.damping_class()
    );

    let tf = system.transfer_function()?;
    let grid = TimeGrid::linspace(0.0, config.t_end, config.samples)?;
    let response = step_response(&tf, &grid)?;

    let summary = tf
        .dc_gain()
        .and_then(|gain| StepInfo::from_response(&response, gain));
    if let Some(summary) = summary {
        info!(
            "final value {:.4}, peak {:.4} at {:.2} s, overshoot {:.1} %",
            summary.final_value, summary.peak, summary.peak_time, summary.overshoot_percent
        );
        match summary.settling_time {
            Some(t) => info!("settles within 2 % after {:.2} s", t),
            None => info!("still outside the 2 % band at t = {:.2} s", config.t_end),
        }
    }
    Ok(response)
}

/// DC motor trace under the demonstration voltage profile.
pub fn run_dc_motor(config: &MotorRunConfig) -> Result<MotorTrace, Box<dyn Error>> {
    let params = &config.params;
    let dt = config.settings.dt;
    match euler_stability_limit(params) {
        Some(limit) if dt >= limit => warn!(
            "dt = {} s exceeds the explicit Euler stability limit of {:.4e} s; expect divergence",
            dt, limit
        ),
        Some(limit) => info!("dt = {} s (Euler stability limit {:.4e} s)", dt, limit),
        None => warn!("motor model has a non-decaying mode; Euler cannot be stable"),
    }

    let inputs = MotorInputs {
        voltage: demo_voltage()?,
        load_torque: Constant(config.load_torque),
        resistance: Constant(params.ra),
    };
    let trace = simulate(params, &inputs, &config.settings)?;

    let peak_speed = trace.velocity.iter().fold(0.0f64, |acc, w| acc.max(w.abs()));
    let peak_current = trace.current.iter().fold(0.0f64, |acc, i| acc.max(i.abs()));
    info!(
        "{} samples, peak |w| = {:.2} rad/s, peak |ia| = {:.2} A",
        trace.len(),
        peak_speed,
        peak_current
    );
    Ok(trace)
}

fn output_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, extension))
}

fn motor_panel<'a>(
    title: &'a str,
    y_label: &'a str,
    time: &[f64],
    values: &[f64],
    max_points: usize,
) -> Chart<'a> {
    let points: Vec<(f64, f64)> = time.iter().copied().zip(values.iter().copied()).collect();
    Chart {
        title,
        x_label: "t [s]",
        y_label,
        series_label: None,
        points: decimate(&points, max_points),
    }
}

pub fn write_step_csv(path: &Path, response: &TimeResponse) -> std::io::Result<()> {
    write_csv(path, &["t", "amplitude"], &[&response.time, &response.output])
}

pub fn write_motor_csv(path: &Path, trace: &MotorTrace) -> std::io::Result<()> {
    write_csv(
        path,
        &["t", "ia", "w", "Tm", "Va", "TL"],
        &[
            &trace.time,
            &trace.current,
            &trace.velocity,
            &trace.torque,
            &trace.voltage,
            &trace.load_torque,
        ],
    )
}

/// Writes `<stem>.png` and `<stem>.csv` for a step response into `dir`.
pub fn write_step_outputs(
    dir: &Path,
    config: &StepRunConfig,
    response: &TimeResponse,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let png = output_path(dir, &config.output_stem, "png");
    let csv = output_path(dir, &config.output_stem, "csv");

    let chart = Chart {
        title: "Unit Step Response of the Mass-Spring-Damper System",
        x_label: "Time (s)",
        y_label: "Amplitude",
        series_label: Some("Unit step response"),
        points: response.points().collect(),
    };
    render_figure(&png, (1024, 768), &[chart])?;
    write_step_csv(&csv, response)?;
    Ok(vec![png, csv])
}

/// Writes the four stacked motor charts and the full trace into `dir`.
pub fn write_motor_outputs(
    dir: &Path,
    config: &MotorRunConfig,
    trace: &MotorTrace,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let png = output_path(dir, &config.output_stem, "png");
    let csv = output_path(dir, &config.output_stem, "csv");

    let limit = config.max_plot_points;
    let charts = [
        motor_panel("Armature voltage", "Va [V]", &trace.time, &trace.voltage, limit),
        motor_panel("Armature current", "ia [A]", &trace.time, &trace.current, limit),
        motor_panel("Speed", "ω [rad/s]", &trace.time, &trace.velocity, limit),
        motor_panel("Electromagnetic torque", "T_m [N.m]", &trace.time, &trace.torque, limit),
    ];
    render_figure(&png, (1200, 1600), &charts)?;
    write_motor_csv(&csv, trace)?;
    Ok(vec![png, csv])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use electrical::SimulationSettings;
    use simcore::TimeSignal;

    #[test]
    fn test_default_step_run() {
        let response = run_step_response(&StepRunConfig::default()).unwrap();
        assert_eq!(response.len(), 500);
        assert_eq!(response.time[0], 0.0);
        assert_eq!(response.time[499], 200.0);
        assert_eq!(response.output[0], 0.0);
        assert!((response.output[499] - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_short_motor_run() {
        let dt = 1.0 / 1024.0;
        let config = MotorRunConfig {
            settings: SimulationSettings::new(20.0, dt),
            ..Default::default()
        };
        let trace = run_dc_motor(&config).unwrap();
        let voltage = demo_voltage().unwrap();
        assert_eq!(trace.len(), 20 * 1024 + 1);
        assert_eq!(*trace.time.last().unwrap(), 20.0);
        for (k, t) in trace.time.iter().enumerate() {
            assert_eq!(trace.voltage[k], voltage.value_at(*t));
            assert_relative_eq!(trace.torque[k], config.params.kt * trace.current[k]);
        }
        // Load torque drags the rotor backwards while Va = 0.
        assert!(trace.velocity[5 * 1024] < 0.0);
        // 500 V from t = 10 s drives it well forward.
        assert!(*trace.velocity.last().unwrap() > 100.0);
    }

    #[test]
    fn test_csv_outputs() {
        let dir = std::env::temp_dir().join(format!("sim_app_pipeline_csv_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let config = StepRunConfig {
            samples: 50,
            ..Default::default()
        };
        let response = run_step_response(&config).unwrap();
        let step_csv = dir.join("step.csv");
        write_step_csv(&step_csv, &response).unwrap();
        let text = fs::read_to_string(&step_csv).unwrap();
        assert_eq!(text.lines().count(), 51);
        assert!(text.starts_with("t,amplitude\n0.000000,0.000000\n"));

        let motor = MotorRunConfig {
            settings: SimulationSettings::new(1.0, 0.25),
            ..Default::default()
        };
        let trace = run_dc_motor(&motor).unwrap();
        let motor_csv = dir.join("motor.csv");
        write_motor_csv(&motor_csv, &trace).unwrap();
        let text = fs::read_to_string(&motor_csv).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("t,ia,w,Tm,Va,TL"));
        assert_eq!(lines.count(), 5);

        fs::remove_dir_all(&dir).unwrap();
    }
}
