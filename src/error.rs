use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Expected `records` and `targets` to have same number of rows, got {0} != {1}")]
    MismatchedShapes(usize, usize),
    #[error("Values must be finite and not `Inf`, `-Inf` or `NaN`")]
    InvalidValues,
    #[error("The regularization strength `lambda` must be non-negative")]
    NegativeRegularization,
    #[error("gradient_tolerance must be a positive, finite number")]
    InvalidGradientTolerance,
    #[error("Expected at least two distinct classes, got {0}")]
    TooFewClasses(usize),
    #[error("The class enumeration must be duplicate-free and cover every label in the targets")]
    InvalidClasses,
    #[error(transparent)]
    ArgMinError(#[from] argmin::core::Error),
}
