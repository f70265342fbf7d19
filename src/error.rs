use thiserror::Error;

/// Structural errors raised by polynomial arithmetic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The divisor has no coefficients at all
    #[error("attempted to divide by a polynomial with no coefficients")]
    EmptyDivisor,

    /// A leading coefficient used as a divisor is zero
    #[error("attempted to divide by a zero leading coefficient")]
    DivisionByZero,

    /// Elementwise operators need sequences of the same length
    #[error("cannot combine sequences of different lengths ({lhs} and {rhs})")]
    LengthMismatch { lhs: usize, rhs: usize },

    /// A coefficient does not fit in an `f64`
    #[error("coefficient at index {index} cannot be represented as f64")]
    Cast { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
