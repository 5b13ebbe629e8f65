//! Fixed-step time simulation of the DC motor.

use log::debug;
use serde::{Deserialize, Serialize};
use simcore::{ExplicitEuler, Integrator, SimContext, SimError, TimeGrid, TimeSignal};

use crate::motor::{DcMotor, DcMotorParams, MotorInputs};

/// Horizon, step and initial state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Simulated duration [s]
    pub t_end: f64,
    /// Integration step [s]; must stay well below `La/Ra` and `J/B` for Euler
    pub dt: f64,
    /// Armature current at t = 0 [A]
    pub initial_current: f64,
    /// Rotor speed at t = 0 [rad/s]
    pub initial_velocity: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            t_end: 100.0,
            dt: 1e-4,
            initial_current: 0.0,
            initial_velocity: 0.0,
        }
    }
}

impl SimulationSettings {
    pub fn new(t_end: f64, dt: f64) -> Self {
        SimulationSettings {
            t_end,
            dt,
            ..Default::default()
        }
    }

    pub fn with_initial_state(mut self, current: f64, velocity: f64) -> Self {
        self.initial_current = current;
        self.initial_velocity = velocity;
        self
    }
}

/// Aligned samples of a motor run, one entry per grid time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorTrace {
    /// t [s]
    pub time: Vec<f64>,
    /// ia [A]
    pub current: Vec<f64>,
    /// w [rad/s]
    pub velocity: Vec<f64>,
    /// Tm = kt * ia [N·m]
    pub torque: Vec<f64>,
    /// Va [V]
    pub voltage: Vec<f64>,
    /// TL [N·m]
    pub load_torque: Vec<f64>,
}

impl MotorTrace {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Runs the motor with forward Euler.
///
/// Samples are spread evenly over `[0, t_end]` (see [`TimeGrid::uniform`])
/// while every step advances the state by `dt`. Sample `k + 1` depends only on sample `k` and the inputs at `t[k]`. The
/// step size is not checked against the motor's time constants: a step that
/// is too large yields a diverging or oscillating trace, not an error. See
/// [`crate::analysis::euler_stability_limit`].
pub fn simulate<V, L, R>(
    params: &DcMotorParams,
    inputs: &MotorInputs<V, L, R>,
    settings: &SimulationSettings,
) -> Result<MotorTrace, SimError>
where
    V: TimeSignal,
    L: TimeSignal,
    R: TimeSignal,
{
    simulate_with(ExplicitEuler, params, inputs, settings)
}

/// Same as [`simulate`] with a caller-chosen integration scheme.
pub fn simulate_with<I, V, L, R>(
    integrator: I,
    params: &DcMotorParams,
    inputs: &MotorInputs<V, L, R>,
    settings: &SimulationSettings,
) -> Result<MotorTrace, SimError>
where
    I: Integrator,
    V: TimeSignal,
    L: TimeSignal,
    R: TimeSignal,
{
    let time = TimeGrid::uniform(settings.t_end, settings.dt)?.into_vec();
    let n = time.len();
    let dt = settings.dt;
    debug!("simulating DC motor: {} samples, dt = {} s", n, dt);

    let mut current = vec![0.0; n];
    let mut velocity = vec![0.0; n];
    let mut torque = vec![0.0; n];
    let mut voltage = vec![0.0; n];
    let mut load_torque = vec![0.0; n];
    current[0] = settings.initial_current;
    velocity[0] = settings.initial_velocity;

    let motor = DcMotor { params, inputs };
    for k in 0..n - 1 {
        let t = time[k];
        let next = integrator.step(&motor, SimContext { dt, t }, &[current[k], velocity[k]]);
        current[k + 1] = next[0];
        velocity[k + 1] = next[1];

        voltage[k] = inputs.voltage.value_at(t);
        load_torque[k] = inputs.load_torque.value_at(t);
        torque[k] = params.torque(current[k]);
    }

    let last = n - 1;
    voltage[last] = inputs.voltage.value_at(time[last]);
    load_torque[last] = inputs.load_torque.value_at(time[last]);
    torque[last] = params.torque(current[last]);

    Ok(MotorTrace {
        time,
        current,
        velocity,
        torque,
        voltage,
        load_torque,
    })
}
