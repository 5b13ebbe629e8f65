//! Closed-form characteristics of the DC motor model
//!
//! Used to pick a step size and to sanity-check simulated traces.

use serde::{Deserialize, Serialize};

use crate::motor::DcMotorParams;

/// Equilibrium of the motor under constant voltage and load torque
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Armature current (A)
    pub current: f64,
    /// Rotor speed (rad/s)
    pub velocity: f64,
}

impl DcMotorParams {
    /// Electrical time constant `La / Ra` (s)
    pub fn electrical_time_constant(&self) -> f64 {
        self.la / self.ra
    }

    /// Mechanical time constant `J / B` (s)
    pub fn mechanical_time_constant(&self) -> f64 {
        self.j / self.b
    }

    /// Current drawn with the rotor locked (A)
    pub fn stall_current(&self, voltage: f64) -> f64 {
        voltage / self.ra
    }

    /// Torque produced with the rotor locked (N·m)
    pub fn stall_torque(&self, voltage: f64) -> f64 {
        self.torque(self.stall_current(voltage))
    }

    /// Steady speed with no load torque (rad/s)
    pub fn no_load_speed(&self, voltage: f64) -> f64 {
        steady_state(self, voltage, 0.0).velocity
    }

    /// Eigenvalues of the state matrix
    /// `[[-Ra/La, -ke/La], [kt/J, -B/J]]` as `(re, im)` pairs.
    pub fn eigenvalues(&self) -> [(f64, f64); 2] {
        let a11 = -self.ra / self.la;
        let a12 = -self.ke / self.la;
        let a21 = self.kt / self.j;
        let a22 = -self.b / self.j;

        let half_trace = 0.5 * (a11 + a22);
        let det = a11 * a22 - a12 * a21;
        let disc = half_trace * half_trace - det;
        if disc >= 0.0 {
            let root = disc.sqrt();
            [(half_trace - root, 0.0), (half_trace + root, 0.0)]
        } else {
            let root = (-disc).sqrt();
            [(half_trace, -root), (half_trace, root)]
        }
    }
}

/// Equilibrium for constant `voltage` and `load_torque`, with `Ra` from `params`.
///
/// `w = (kt Va - Ra TL) / (Ra B + kt ke)`, `ia = (B w + TL) / kt`
pub fn steady_state(params: &DcMotorParams, voltage: f64, load_torque: f64) -> OperatingPoint {
    let velocity = (params.kt * voltage - params.ra * load_torque)
        / (params.ra * params.b + params.kt * params.ke);
    let current = (params.b * velocity + load_torque) / params.kt;
    OperatingPoint { current, velocity }
}

/// Largest step for which forward Euler does not amplify the linear dynamics.
///
/// Each eigenvalue `l` requires `|1 + dt l| < 1`, i.e. `dt < -2 Re(l) / |l|^2`.
/// Returns `None` when the model has a non-decaying mode.
pub fn euler_stability_limit(params: &DcMotorParams) -> Option<f64> {
    params
        .eigenvalues()
        .iter()
        .map(|&(re, im)| {
            if re < 0.0 {
                Some(-2.0 * re / (re * re + im * im))
            } else {
                None
            }
        })
        .try_fold(f64::INFINITY, |limit, dt| dt.map(|dt| limit.min(dt)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_constants() {
        let params = DcMotorParams::new(2.0, 0.01, 0.5, 0.1, 0.3, 0.3);
        assert_relative_eq!(params.electrical_time_constant(), 0.005);
        assert_relative_eq!(params.mechanical_time_constant(), 5.0);
    }

    #[test]
    fn test_demo_motor_is_underdamped() {
        let [(re0, im0), (re1, im1)] = DcMotorParams::demo().eigenvalues();
        assert_relative_eq!(re0, -1.0);
        assert_relative_eq!(re1, -1.0);
        assert_relative_eq!(im0, -0.8, epsilon = 1e-12);
        assert_relative_eq!(im1, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_steady_state_balances_both_equations() {
        let params = DcMotorParams::new(0.5, 0.002, 0.01, 0.001, 0.05, 0.05);
        let (va, tl) = (12.0, 0.2);
        let OperatingPoint { current, velocity } = steady_state(&params, va, tl);
        assert_relative_eq!(va - params.ra * current - params.ke * velocity, 0.0, epsilon = 1e-9);
        assert_relative_eq!(params.kt * current - params.b * velocity - tl, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_stall_and_no_load() {
        let params = DcMotorParams::demo();
        assert_relative_eq!(params.stall_current(10.0), 10.0);
        assert_relative_eq!(params.stall_torque(10.0), 8.0);
        assert_relative_eq!(params.no_load_speed(10.0), 8.0 / 1.64);
    }

    #[test]
    fn test_demo_stability_limit() {
        // -2 * (-1) / (1 + 0.64)
        let limit = euler_stability_limit(&DcMotorParams::demo()).unwrap();
        assert_relative_eq!(limit, 2.0 / 1.64, epsilon = 1e-12);
        assert!(2e-4 < limit);
    }

    #[test]
    fn test_stiff_motor_limited_by_electrical_pole() {
        // Electrical pole near -Ra/La = -1000 dominates.
        let params = DcMotorParams::new(1.0, 1e-3, 1.0, 1.0, 0.01, 0.01);
        let limit = euler_stability_limit(&params).unwrap();
        assert!(limit < 2.1e-3 && limit > 1.9e-3, "limit {}", limit);
    }

    #[test]
    fn test_frictionless_unloaded_limit() {
        // With B = 0 and kt = 0 the rotor speed never decays.
        let params = DcMotorParams::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0);
        assert_eq!(euler_stability_limit(&params), None);
    }
}
