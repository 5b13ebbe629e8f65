//! Transfer functions `G(s) = N(s) / D(s)` of single-input single-output systems.

use nalgebra::Complex;
use serde::{Deserialize, Serialize};

use crate::{ControlError, StateSpace};

/// Ratio of two polynomials in `s`, coefficients in descending powers.
///
/// `1 / (m s^2 + b s + k)` is `numerator = [1]`, `denominator = [m, b, k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
}

fn strip_leading_zeros(coefficients: &[f64]) -> Vec<f64> {
    let first = coefficients.iter().position(|&c| c != 0.0);
    match first {
        Some(i) => coefficients[i..].to_vec(),
        None => Vec::new(),
    }
}

fn check_finite(polynomial: &'static str, coefficients: &[f64]) -> Result<(), ControlError> {
    match coefficients.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(ControlError::NonFiniteCoefficient { polynomial, index }),
        None => Ok(()),
    }
}

impl TransferFunction {
    /// Builds `numerator / denominator`, dropping leading zero coefficients.
    ///
    /// Fails for a zero denominator or when the numerator order exceeds the
    /// denominator order (no causal realization exists).
    pub fn new(numerator: &[f64], denominator: &[f64]) -> Result<Self, ControlError> {
        check_finite("numerator", numerator)?;
        check_finite("denominator", denominator)?;

        let denominator = strip_leading_zeros(denominator);
        if denominator.is_empty() {
            return Err(ControlError::ZeroDenominator);
        }
        let mut numerator = strip_leading_zeros(numerator);
        if numerator.is_empty() {
            numerator.push(0.0);
        }
        if numerator.len() > denominator.len() {
            return Err(ControlError::Improper {
                numerator_order: numerator.len() - 1,
                denominator_order: denominator.len() - 1,
            });
        }
        Ok(TransferFunction {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Degree of the denominator polynomial.
    pub fn order(&self) -> usize {
        self.denominator.len() - 1
    }

    /// True when the numerator degree is strictly below the denominator degree,
    /// i.e. there is no direct feedthrough from input to output.
    pub fn is_strictly_proper(&self) -> bool {
        self.numerator.len() < self.denominator.len()
    }

    /// Steady-state gain `G(0)`, or `None` when the system has a pole at the origin.
    pub fn dc_gain(&self) -> Option<f64> {
        let den0 = self.denominator[self.denominator.len() - 1];
        if den0 == 0.0 {
            return None;
        }
        Some(self.numerator[self.numerator.len() - 1] / den0)
    }

    /// Evaluates `G(s)` at a complex frequency.
    pub fn evaluate(&self, s: Complex<f64>) -> Complex<f64> {
        let horner = |coefficients: &[f64]| {
            coefficients
                .iter()
                .fold(Complex::new(0.0, 0.0), |acc, &c| acc * s + c)
        };
        horner(&self.numerator) / horner(&self.denominator)
    }

    /// Roots of the denominator.
    pub fn poles(&self) -> Vec<Complex<f64>> {
        match self.denominator.as_slice() {
            [_] => Vec::new(),
            [a, b] => vec![Complex::new(-b / a, 0.0)],
            [a, b, c] => {
                let disc = b * b - 4.0 * a * c;
                if disc >= 0.0 {
                    let root = disc.sqrt();
                    vec![
                        Complex::new((-b - root) / (2.0 * a), 0.0),
                        Complex::new((-b + root) / (2.0 * a), 0.0),
                    ]
                } else {
                    let im = (-disc).sqrt() / (2.0 * a);
                    let re = -b / (2.0 * a);
                    vec![Complex::new(re, -im), Complex::new(re, im)]
                }
            }
            _ => StateSpace::from_transfer_function(self)
                .a()
                .complex_eigenvalues()
                .iter()
                .copied()
                .collect(),
        }
    }

    /// True when every pole lies strictly in the left half-plane.
    pub fn is_stable(&self) -> bool {
        self.poles().iter().all(|p| p.re < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leading_zeros_are_dropped() {
        let tf = TransferFunction::new(&[0.0, 0.0, 2.0], &[0.0, 1.0, 3.0]).unwrap();
        assert_eq!(tf.numerator(), &[2.0]);
        assert_eq!(tf.denominator(), &[1.0, 3.0]);
        assert_eq!(tf.order(), 1);
        assert!(tf.is_strictly_proper());
    }

    #[test]
    fn test_rejects_zero_denominator() {
        assert_eq!(
            TransferFunction::new(&[1.0], &[0.0, 0.0]),
            Err(ControlError::ZeroDenominator)
        );
    }

    #[test]
    fn test_rejects_improper() {
        assert_eq!(
            TransferFunction::new(&[1.0, 0.0, 0.0], &[1.0, 1.0]),
            Err(ControlError::Improper {
                numerator_order: 2,
                denominator_order: 1
            })
        );
    }

    #[test]
    fn test_rejects_nan() {
        assert_eq!(
            TransferFunction::new(&[1.0], &[1.0, f64::NAN]),
            Err(ControlError::NonFiniteCoefficient {
                polynomial: "denominator",
                index: 1
            })
        );
    }

    #[test]
    fn test_dc_gain() {
        let tf = TransferFunction::new(&[1.0], &[10.0, 0.5, 1.0]).unwrap();
        assert_relative_eq!(tf.dc_gain().unwrap(), 1.0);

        let integrator = TransferFunction::new(&[1.0], &[1.0, 0.0]).unwrap();
        assert_eq!(integrator.dc_gain(), None);
    }

    #[test]
    fn test_evaluate_matches_dc_gain_at_origin() {
        let tf = TransferFunction::new(&[2.0, 1.0], &[1.0, 3.0, 4.0]).unwrap();
        let g0 = tf.evaluate(Complex::new(0.0, 0.0));
        assert_relative_eq!(g0.re, 0.25);
        assert_relative_eq!(g0.im, 0.0);
    }

    #[test]
    fn test_underdamped_poles_are_conjugate() {
        let tf = TransferFunction::new(&[1.0], &[10.0, 0.5, 1.0]).unwrap();
        let poles = tf.poles();
        assert_eq!(poles.len(), 2);
        assert_relative_eq!(poles[0].re, -0.025);
        assert_relative_eq!(poles[0].im, -poles[1].im);
        assert_relative_eq!(poles[0].norm(), 0.1f64.sqrt(), epsilon = 1e-12);
        assert!(tf.is_stable());
    }

    #[test]
    fn test_third_order_poles_from_companion_matrix() {
        // (s + 1)(s + 2)(s + 3)
        let tf = TransferFunction::new(&[6.0], &[1.0, 6.0, 11.0, 6.0]).unwrap();
        let mut real: Vec<f64> = tf.poles().iter().map(|p| p.re).collect();
        real.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(real[0], -3.0, epsilon = 1e-9);
        assert_relative_eq!(real[1], -2.0, epsilon = 1e-9);
        assert_relative_eq!(real[2], -1.0, epsilon = 1e-9);
    }
}
