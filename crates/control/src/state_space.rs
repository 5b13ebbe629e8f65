//! State-space realization `x' = A x + B u`, `y = C x + D u`.

use nalgebra::{DMatrix, DVector, RowDVector};

use crate::TransferFunction;

#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    a: DMatrix<f64>,
    b: DVector<f64>,
    c: RowDVector<f64>,
    d: f64,
}

/// One-step propagation of a state-space model under a zero-order-hold input.
#[derive(Debug, Clone)]
pub struct Discretized {
    pub phi: DMatrix<f64>,
    pub gamma: DVector<f64>,
}

impl StateSpace {
    /// Controllable canonical form of `tf`.
    ///
    /// With the denominator normalized to `s^n + a1 s^(n-1) + ... + an`, the
    /// first row of `A` is `[-a1, ..., -an]`, the subdiagonal is one, `B = e1`,
    /// and `C`/`D` come from splitting off the direct feedthrough term.
    pub fn from_transfer_function(tf: &TransferFunction) -> Self {
        let den = tf.denominator();
        let n = tf.order();
        let lead = den[0];

        let mut padded = vec![0.0; n + 1 - tf.numerator().len()];
        padded.extend_from_slice(tf.numerator());

        let d = padded[0] / lead;
        let mut a = DMatrix::zeros(n, n);
        let mut c = RowDVector::zeros(n);
        for i in 0..n {
            let ai = den[i + 1] / lead;
            a[(0, i)] = -ai;
            c[i] = padded[i + 1] / lead - ai * d;
            if i + 1 < n {
                a[(i + 1, i)] = 1.0;
            }
        }
        let mut b = DVector::zeros(n);
        if n > 0 {
            b[0] = 1.0;
        }

        StateSpace { a, b, c, d }
    }

    pub fn order(&self) -> usize {
        self.b.len()
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    pub fn c(&self) -> &RowDVector<f64> {
        &self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// Output for state `x` and input `u`.
    pub fn output(&self, x: &DVector<f64>, u: f64) -> f64 {
        self.c.iter().zip(x.iter()).map(|(c, x)| c * x).sum::<f64>() + self.d * u
    }

    /// Exact zero-order-hold discretization over a step of `h` seconds.
    ///
    /// `exp([[A, B], [0, 0]] * h) = [[Phi, Gamma], [0, 1]]`, which also holds
    /// when `A` is singular.
    pub fn discretize(&self, h: f64) -> Discretized {
        let n = self.order();
        let mut augmented = DMatrix::zeros(n + 1, n + 1);
        augmented.view_mut((0, 0), (n, n)).copy_from(&(&self.a * h));
        augmented.view_mut((0, n), (n, 1)).copy_from(&(&self.b * h));

        let exp = augmented.exp();
        Discretized {
            phi: exp.view((0, 0), (n, n)).into_owned(),
            gamma: exp.view((0, n), (n, 1)).column(0).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_spring_damper_realization() {
        let tf = TransferFunction::new(&[1.0], &[10.0, 0.5, 1.0]).unwrap();
        let ss = StateSpace::from_transfer_function(&tf);

        assert_eq!(ss.order(), 2);
        assert_relative_eq!(ss.a()[(0, 0)], -0.05);
        assert_relative_eq!(ss.a()[(0, 1)], -0.1);
        assert_relative_eq!(ss.a()[(1, 0)], 1.0);
        assert_relative_eq!(ss.a()[(1, 1)], 0.0);
        assert_relative_eq!(ss.c()[0], 0.0);
        assert_relative_eq!(ss.c()[1], 0.1);
        assert_eq!(ss.d(), 0.0);
    }

    #[test]
    fn test_biproper_splits_feedthrough() {
        // (2s + 3) / (s + 1) = 2 + 1 / (s + 1)
        let tf = TransferFunction::new(&[2.0, 3.0], &[1.0, 1.0]).unwrap();
        let ss = StateSpace::from_transfer_function(&tf);
        assert_relative_eq!(ss.d(), 2.0);
        assert_relative_eq!(ss.c()[0], 1.0);
        assert_relative_eq!(ss.a()[(0, 0)], -1.0);
    }

    #[test]
    fn test_first_order_discretization_is_exact() {
        // 1 / (s + 1)
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]).unwrap();
        let ss = StateSpace::from_transfer_function(&tf);
        let step = ss.discretize(0.5);
        assert_relative_eq!(step.phi[(0, 0)], (-0.5f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(step.gamma[0], 1.0 - (-0.5f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_pure_integrator_discretization() {
        // 1 / s has A = 0, so Gamma must reduce to h.
        let tf = TransferFunction::new(&[1.0], &[1.0, 0.0]).unwrap();
        let ss = StateSpace::from_transfer_function(&tf);
        let step = ss.discretize(0.25);
        assert_relative_eq!(step.phi[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(step.gamma[0], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_static_gain_has_no_states() {
        let tf = TransferFunction::new(&[3.0], &[2.0]).unwrap();
        let ss = StateSpace::from_transfer_function(&tf);
        assert_eq!(ss.order(), 0);
        assert_relative_eq!(ss.output(&DVector::zeros(0), 1.0), 1.5);
    }
}
