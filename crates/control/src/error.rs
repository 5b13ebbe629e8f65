use simcore::SimError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("transfer function denominator is empty or all zeros")]
    ZeroDenominator,

    #[error("improper transfer function: numerator order {numerator_order} exceeds denominator order {denominator_order}")]
    Improper {
        numerator_order: usize,
        denominator_order: usize,
    },

    #[error("{polynomial} coefficient {index} is not finite")]
    NonFiniteCoefficient {
        polynomial: &'static str,
        index: usize,
    },

    #[error(transparent)]
    Grid(#[from] SimError),
}
