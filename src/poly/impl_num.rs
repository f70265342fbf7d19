#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations and operators.
//
// Polynomial operands may have a different coefficient type than `self`, as
// long as combining the two yields `self`'s type (e.g. `Poly<Rational64>` and
// `Poly<i64>`). The result always has the coefficient type of the left operand.

use itertools::{EitherOrBoth, Itertools};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    util::{doc_macros::panic_division, linalg::convolve_1d},
    Error, Poly, Scalar,
};

impl<T: Scalar> Poly<T> {
    /// Add two polynomials.
    ///
    /// The coefficients are aligned at the constant term, surplus high-order
    /// coefficients of the longer operand are kept as they are.
    ///
    /// ```
    /// use poly_solve::poly;
    ///
    /// assert_eq!(poly![2, -3, 1].sum(&poly![3, 2, -3, 1]), poly![3, 4, -6, 2]);
    /// ```
    #[must_use]
    pub fn sum<U>(&self, other: &Poly<U>) -> Self
    where
        T: Add<U, Output = T>,
        U: Clone,
    {
        let mut coeffs = self
            .0
            .iter()
            .rev()
            .zip_longest(other.0.iter().rev())
            .map(|p| match p {
                EitherOrBoth::Both(l, r) => l.clone() + r.clone(),
                EitherOrBoth::Left(l) => l.clone(),
                EitherOrBoth::Right(r) => T::zero() + r.clone(),
            })
            .collect_vec();
        coeffs.reverse();
        Self(coeffs)
    }

    /// Subtract a polynomial, the same as adding its negation.
    ///
    /// Leading zeros are kept, so `(p + q) - q` may be longer than `p`.
    #[must_use]
    pub fn difference<U>(&self, other: &Poly<U>) -> Self
    where
        T: Add<U, Output = T>,
        U: Scalar,
    {
        self.sum(&-other)
    }

    /// Multiply two polynomials, `len(a * b) == len(a) + len(b) - 1`.
    ///
    /// Multiplying by the zero polynomial yields the zero polynomial.
    #[must_use]
    pub fn multiply<U>(&self, other: &Poly<U>) -> Self
    where
        T: Mul<U, Output = T>,
        U: Clone,
    {
        if self.is_empty() || other.is_empty() {
            return Self::zero();
        }
        Self(convolve_1d(&self.0, &other.0))
    }

    /// Calculate the quotient and remainder using long division. More efficient than
    /// calculating them separately.
    ///
    /// The remainder has `divisor.len() - 1` coefficients. When the dividend
    /// is shorter than the divisor, the quotient is zero and the remainder
    /// is the dividend, so `/` never hands back the dividend unchanged.
    ///
    /// # Errors
    /// - `EmptyDivisor`: the divisor has no coefficients
    /// - `DivisionByZero`: the leading coefficient of the divisor is zero
    ///
    /// # Examples
    /// ```
    /// use poly_solve::poly;
    ///
    /// let (q, r) = poly![1.0, -2.0, 0.0, -4.0].div_rem(&poly![1.0, -3.0]).unwrap();
    /// assert_eq!(q, poly![1.0, 1.0, 3.0]);
    /// assert_eq!(r, poly![5.0]);
    /// ```
    pub fn div_rem<U>(&self, divisor: &Poly<U>) -> crate::Result<(Self, Self)>
    where
        T: Div<U, Output = T> + Mul<U, Output = T>,
        U: Scalar,
    {
        let Some(lead) = divisor.leading() else {
            return Err(Error::EmptyDivisor);
        };
        if lead.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.len() < divisor.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let steps = self.len() - divisor.len() + 1;
        let mut rem = self.0.clone();
        let mut quot = Vec::with_capacity(steps);
        for k in 0..steps {
            let q = rem[k].clone() / lead.clone();
            for (r, d) in rem[k..].iter_mut().zip(divisor.iter()) {
                *r = r.clone() - q.clone() * d.clone();
            }
            quot.push(q);
        }
        let rem = rem.split_off(steps);
        Ok((Self(quot), Self(rem)))
    }

    /// Quotient of the long division, the remainder is discarded.
    ///
    /// # Errors
    /// See [`Poly::div_rem`]
    pub fn divide<U>(&self, divisor: &Poly<U>) -> crate::Result<Self>
    where
        T: Div<U, Output = T> + Mul<U, Output = T>,
        U: Scalar,
    {
        Ok(self.div_rem(divisor)?.0)
    }

    #[track_caller]
    fn quotient<U>(&self, divisor: &Poly<U>) -> Self
    where
        T: Div<U, Output = T> + Mul<U, Output = T>,
        U: Scalar,
    {
        match self.divide(divisor) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Implements an operator and its assigning variant for every combination of
/// owned and borrowed polynomial operands, by forwarding to a method taking
/// `(&self, &Poly<U>)`.
macro_rules! impl_poly_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $inner:ident, [$($doc:expr)?], $($bound:tt)+) => {
        impl<T, U> $op<Poly<U>> for Poly<T>
        where
            T: Scalar + $($bound)+,
            U: Scalar,
        {
            type Output = Self;

            $(#[doc = $doc])?
            fn $method(self, rhs: Poly<U>) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl<T, U> $op<&Poly<U>> for Poly<T>
        where
            T: Scalar + $($bound)+,
            U: Scalar,
        {
            type Output = Self;

            $(#[doc = $doc])?
            fn $method(self, rhs: &Poly<U>) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<T, U> $op<Poly<U>> for &Poly<T>
        where
            T: Scalar + $($bound)+,
            U: Scalar,
        {
            type Output = Poly<T>;

            $(#[doc = $doc])?
            fn $method(self, rhs: Poly<U>) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl<T, U> $op<&Poly<U>> for &Poly<T>
        where
            T: Scalar + $($bound)+,
            U: Scalar,
        {
            type Output = Poly<T>;

            $(#[doc = $doc])?
            fn $method(self, rhs: &Poly<U>) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<T, U> $op_assign<Poly<U>> for Poly<T>
        where
            T: Scalar + $($bound)+,
            U: Scalar,
        {
            $(#[doc = $doc])?
            fn $method_assign(&mut self, rhs: Poly<U>) {
                *self = self.$inner(&rhs);
            }
        }

        impl<T, U> $op_assign<&Poly<U>> for Poly<T>
        where
            T: Scalar + $($bound)+,
            U: Scalar,
        {
            $(#[doc = $doc])?
            fn $method_assign(&mut self, rhs: &Poly<U>) {
                *self = self.$inner(rhs);
            }
        }
    };
}

impl_poly_op!(Add, add, AddAssign, add_assign, sum, [], Add<U, Output = T>);
impl_poly_op!(Sub, sub, SubAssign, sub_assign, difference, [], Add<U, Output = T>);
impl_poly_op!(Mul, mul, MulAssign, mul_assign, multiply, [], Mul<U, Output = T>);
impl_poly_op!(
    Div,
    div,
    DivAssign,
    div_assign,
    quotient,
    [concat!("# Panics\n", panic_division!())],
    Div<U, Output = T> + Mul<U, Output = T>
);

/// Operators between a polynomial and a single coefficient value.
///
/// `+` and `-` act on the constant term, `*` and `/` on every coefficient.
macro_rules! impl_scalar_op {
    ($($t:ty),*) => {$(
        impl<T> Add<$t> for Poly<T>
        where
            T: Scalar + Add<$t, Output = T>,
        {
            type Output = Self;

            fn add(mut self, rhs: $t) -> Self::Output {
                self += rhs;
                self
            }
        }

        impl<T> AddAssign<$t> for Poly<T>
        where
            T: Scalar + Add<$t, Output = T>,
        {
            fn add_assign(&mut self, rhs: $t) {
                let c = self.constant_term_mut();
                *c = c.clone() + rhs;
            }
        }

        impl<T> Sub<$t> for Poly<T>
        where
            T: Scalar + Sub<$t, Output = T>,
        {
            type Output = Self;

            fn sub(mut self, rhs: $t) -> Self::Output {
                self -= rhs;
                self
            }
        }

        impl<T> SubAssign<$t> for Poly<T>
        where
            T: Scalar + Sub<$t, Output = T>,
        {
            fn sub_assign(&mut self, rhs: $t) {
                let c = self.constant_term_mut();
                *c = c.clone() - rhs;
            }
        }

        impl<T> Mul<$t> for Poly<T>
        where
            T: Scalar + Mul<$t, Output = T>,
        {
            type Output = Self;

            fn mul(mut self, rhs: $t) -> Self::Output {
                self *= rhs;
                self
            }
        }

        impl<T> MulAssign<$t> for Poly<T>
        where
            T: Scalar + Mul<$t, Output = T>,
        {
            fn mul_assign(&mut self, rhs: $t) {
                self.0.iter_mut().for_each(|c| *c = c.clone() * rhs);
            }
        }

        impl<T> Mul<Poly<T>> for $t
        where
            T: Scalar + Mul<$t, Output = T>,
        {
            type Output = Poly<T>;

            fn mul(self, rhs: Poly<T>) -> Self::Output {
                rhs * self
            }
        }

        impl<T> Div<$t> for Poly<T>
        where
            T: Scalar + Div<$t, Output = T>,
        {
            type Output = Self;

            fn div(mut self, rhs: $t) -> Self::Output {
                self /= rhs;
                self
            }
        }

        impl<T> DivAssign<$t> for Poly<T>
        where
            T: Scalar + Div<$t, Output = T>,
        {
            fn div_assign(&mut self, rhs: $t) {
                self.0.iter_mut().for_each(|c| *c = c.clone() / rhs);
            }
        }
    )*};
}

impl_scalar_op!(i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Scalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.into_iter().map(Neg::neg).collect())
    }
}

impl<T: Scalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: Scalar> std::iter::Sum for Poly<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: Scalar> std::iter::Product for Poly<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
