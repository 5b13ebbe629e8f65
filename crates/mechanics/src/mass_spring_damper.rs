//! Mass-Spring-Damper - translational second-order system
//!
//! `m x'' + b x' + k x = F(t)`, with the applied force as input and the
//! displacement as output, i.e. `G(s) = 1 / (m s^2 + b s + k)`.

use control::{ControlError, TransferFunction};
use serde::{Deserialize, Serialize};

/// Damping ratios within this distance of one are treated as critical.
const CRITICAL_TOLERANCE: f64 = 1e-9;

/// Regime of the unforced response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DampingClass {
    /// Undamped (`b = 0`): sustained oscillation
    Undamped,
    /// `0 < zeta < 1`: decaying oscillation
    Underdamped,
    /// `zeta = 1`: fastest response without overshoot
    CriticallyDamped,
    /// `zeta > 1`: sum of two decaying exponentials
    Overdamped,
}

/// Physical parameters of the system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassSpringDamper {
    /// Mass (kg)
    pub mass: f64,
    /// Viscous damping coefficient (N·s/m)
    pub damping: f64,
    /// Spring constant (N/m)
    pub stiffness: f64,
}

impl Default for MassSpringDamper {
    /// `m = 10`, `b = 0.5`, `k = 1`: a lightly damped, slow system.
    fn default() -> Self {
        MassSpringDamper {
            mass: 10.0,
            damping: 0.5,
            stiffness: 1.0,
        }
    }
}

impl MassSpringDamper {
    pub fn new(mass: f64, damping: f64, stiffness: f64) -> Self {
        MassSpringDamper {
            mass,
            damping,
            stiffness,
        }
    }

    /// Force-to-displacement transfer function `1 / (m s^2 + b s + k)`
    pub fn transfer_function(&self) -> Result<TransferFunction, ControlError> {
        TransferFunction::new(&[1.0], &[self.mass, self.damping, self.stiffness])
    }

    /// Undamped natural frequency `sqrt(k / m)` (rad/s)
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `b / (2 sqrt(k m))`
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn damping_class(&self) -> DampingClass {
        let zeta = self.damping_ratio();
        if zeta == 0.0 {
            DampingClass::Undamped
        } else if (zeta - 1.0).abs() <= CRITICAL_TOLERANCE {
            DampingClass::CriticallyDamped
        } else if zeta < 1.0 {
            DampingClass::Underdamped
        } else {
            DampingClass::Overdamped
        }
    }

    /// Static displacement per unit force, `1 / k`
    pub fn dc_gain(&self) -> f64 {
        1.0 / self.stiffness
    }

    /// Closed-form displacement at time `t` after a unit force step applied at rest.
    pub fn analytic_step(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        let wn = self.natural_frequency();
        let zeta = self.damping_ratio();

        // Normalized deficit from the final value, 1 at t = 0.
        let deficit = match self.damping_class() {
            DampingClass::Undamped => (wn * t).cos(),
            DampingClass::Underdamped => {
                let root = (1.0 - zeta * zeta).sqrt();
                let wd = wn * root;
                (-zeta * wn * t).exp() * ((wd * t).cos() + zeta / root * (wd * t).sin())
            }
            DampingClass::CriticallyDamped => (-wn * t).exp() * (1.0 + wn * t),
            DampingClass::Overdamped => {
                let root = (zeta * zeta - 1.0).sqrt();
                let s1 = -wn * (zeta - root);
                let s2 = -wn * (zeta + root);
                (s2 * (s1 * t).exp() - s1 * (s2 * t).exp()) / (s2 - s1)
            }
        };
        self.dc_gain() * (1.0 - deficit)
    }
}
