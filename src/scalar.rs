//! The capabilities a coefficient type must provide.
//!
//! All three traits are blanket-implemented, so any type with the right
//! operators (primitive signed integers, floats, [`num::Rational64`],
//! [`num::complex::Complex64`], ...) can be used as a coefficient without any
//! extra work.

use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num::{FromPrimitive, One, ToPrimitive, Zero};

/// Ring-like coefficients: sums, differences, products and negation.
///
/// [`FromPrimitive`] is used to multiply coefficients by small integers, which
/// is how derivatives are computed.
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + FromPrimitive
{
}

impl<T> Scalar for T where
    T: Clone
        + PartialEq
        + Debug
        + Zero
        + One
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Neg<Output = Self>
        + FromPrimitive
{
}

/// Coefficients that can also be divided. Only polynomial division needs
/// this.
pub trait FieldScalar: Scalar + Div<Output = Self> {}

impl<T> FieldScalar for T where T: Scalar + Div<Output = Self> {}

/// Coefficients that can be ordered against zero and converted to `f64`.
///
/// This is what the root solver needs: roots are always reported as `f64`,
/// and convergence is decided by comparing against a decimal tolerance.
pub trait RealScalar: FieldScalar + PartialOrd + ToPrimitive {}

impl<T> RealScalar for T where T: FieldScalar + PartialOrd + ToPrimitive {}
