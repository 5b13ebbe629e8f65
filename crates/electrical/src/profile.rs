//! Demonstration input profile, in seconds.

use simcore::{PiecewiseConstant, SimError};

/// Interval boundaries of the demonstration profile [s].
pub const DEMO_BREAKPOINTS: [f64; 7] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];

/// Armature voltage on each interval [V].
pub const DEMO_LEVELS: [f64; 8] = [0.0, 500.0, 200.0, 300.0, -80.0, 0.0, -300.0, 0.0];

/// Load torque used alongside the demonstration profile [N·m].
pub const DEMO_LOAD_TORQUE: f64 = 2.0;

/// Piecewise armature voltage over half-open 10 s intervals:
/// rest, start-up, sag, nominal, plugging, stop, reversal, stop.
pub fn demo_voltage() -> Result<PiecewiseConstant, SimError> {
    PiecewiseConstant::new(DEMO_BREAKPOINTS.to_vec(), DEMO_LEVELS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcore::TimeSignal;

    #[test]
    fn test_mid_interval_values_are_exact() {
        let voltage = demo_voltage().unwrap();
        let times = [5.0, 15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 75.0];
        let expected = [0.0, 500.0, 200.0, 300.0, -80.0, 0.0, -300.0, 0.0];
        for (t, v) in times.iter().zip(expected) {
            assert_eq!(voltage.value_at(*t), v, "Va({})", t);
        }
    }

    #[test]
    fn test_boundaries_belong_to_the_next_interval() {
        let voltage = demo_voltage().unwrap();
        assert_eq!(voltage.value_at(9.999), 0.0);
        assert_eq!(voltage.value_at(10.0), 500.0);
        assert_eq!(voltage.value_at(40.0), -80.0);
        assert_eq!(voltage.value_at(70.0), 0.0);
        assert_eq!(voltage.value_at(-1.0), 0.0);
        assert_eq!(voltage.value_at(1e6), 0.0);
    }
}
