use serde::{Deserialize, Serialize};
use simcore::{OdeSystem, TimeSignal};

/// Constants of a separately-excited DC motor with fixed field flux.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcMotorParams {
    /// Armature resistance [ohm]
    pub ra: f64,
    /// Armature inductance [H]
    pub la: f64,
    /// Rotor inertia [kg·m²]
    pub j: f64,
    /// Viscous friction [N·m·s]
    pub b: f64,
    /// Torque constant [N·m/A]
    pub kt: f64,
    /// Back-EMF constant [V·s/rad]
    pub ke: f64,
}

impl DcMotorParams {
    pub fn new(ra: f64, la: f64, j: f64, b: f64, kt: f64, ke: f64) -> Self {
        DcMotorParams { ra, la, j, b, kt, ke }
    }

    /// Unit-valued teaching motor with `kt = ke = 0.8`.
    pub fn demo() -> Self {
        DcMotorParams::new(1.0, 1.0, 1.0, 1.0, 0.8, 0.8)
    }

    /// Electromagnetic torque produced by armature current `ia`.
    pub fn torque(&self, ia: f64) -> f64 {
        self.kt * ia
    }

    /// Voltage induced by rotor speed `w`.
    pub fn back_emf(&self, w: f64) -> f64 {
        self.ke * w
    }
}

impl Default for DcMotorParams {
    fn default() -> Self {
        DcMotorParams::demo()
    }
}

/// The three time-dependent inputs of the motor.
#[derive(Debug, Clone)]
pub struct MotorInputs<V, L, R> {
    /// Applied armature voltage [V]
    pub voltage: V,
    /// Load torque opposing rotation [N·m]
    pub load_torque: L,
    /// Effective armature resistance [ohm], e.g. raised for dynamic braking
    pub resistance: R,
}

// La * dia/dt = Va - Ra * ia - ke * w
fn derivative_current(ia: f64, w: f64, voltage: f64, resistance: f64, params: &DcMotorParams) -> f64 {
    (voltage - resistance * ia - params.back_emf(w)) / params.la
}

// J * dw/dt = kt * ia - B * w - TL
fn derivative_velocity(ia: f64, w: f64, load_torque: f64, params: &DcMotorParams) -> f64 {
    (params.torque(ia) - params.b * w - load_torque) / params.j
}

/// Armature current and rotor speed dynamics, state `[ia, w]`.
#[derive(Debug, Clone, Copy)]
pub struct DcMotor<'a, V, L, R> {
    pub params: &'a DcMotorParams,
    pub inputs: &'a MotorInputs<V, L, R>,
}

impl<V, L, R> OdeSystem<2> for DcMotor<'_, V, L, R>
where
    V: TimeSignal,
    L: TimeSignal,
    R: TimeSignal,
{
    fn derivatives(&self, t: f64, state: &[f64; 2]) -> [f64; 2] {
        let [ia, w] = *state;
        let voltage = self.inputs.voltage.value_at(t);
        let resistance = self.inputs.resistance.value_at(t);
        let load_torque = self.inputs.load_torque.value_at(t);
        [
            derivative_current(ia, w, voltage, resistance, self.params),
            derivative_velocity(ia, w, load_torque, self.params),
        ]
    }
}
