use std::fmt::{self, Display};

use crate::Scalar;

mod base;
mod calculus;
mod conversions;
mod impl_num;
pub mod roots;

/// A univariate polynomial, with coefficients stored highest degree first.
///
/// The coefficients are kept exactly as given: leading zeros are not trimmed,
/// so [`Poly::len`] and [`Poly::degree`] describe the stored shape rather than
/// the algebraic degree. An empty polynomial is the zero polynomial.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Poly<T>(pub(crate) Vec<T>);

impl<T> Poly<T> {
    /// Create a polynomial from coefficients in descending order of degree.
    ///
    /// ```
    /// use poly_solve::Poly;
    ///
    /// // 2x^2 - 3x + 1
    /// let p = Poly::new(vec![2, -3, 1]);
    /// assert_eq!(p.degree(), Some(2));
    /// ```
    #[must_use]
    pub const fn new(coeffs: Vec<T>) -> Self {
        Self(coeffs)
    }

    /// The zero polynomial, which has no coefficients
    #[must_use]
    pub const fn zero() -> Self {
        Self(vec![])
    }

    /// Number of stored coefficients
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The degree of the polynomial as stored, `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
}

impl<T: Scalar> Poly<T> {
    /// The multiplicative identity, `[1]`
    #[must_use]
    pub fn one() -> Self {
        Self(vec![T::one()])
    }

    /// A constant polynomial
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self(vec![c])
    }

    /// Create a polynomial from a single term (coefficient + degree)
    ///
    /// # Examples
    /// ```
    /// use poly_solve::{poly, Poly};
    ///
    /// assert_eq!(Poly::term(5, 3), poly![5, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn term(coeff: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[0] = coeff;
        Self(coeffs)
    }

    /// Monic polynomial with the given roots.
    ///
    /// ```
    /// use poly_solve::{poly, Poly};
    ///
    /// assert_eq!(Poly::from_roots(&[1, 2]), poly![1, -3, 2]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        roots
            .iter()
            .map(|r| Self(vec![T::one(), -r.clone()]))
            .fold(Self::one(), |acc, x| acc * x)
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use poly_solve::poly;
    ///
    /// let p = poly![3.0, 2.0, 1.0];
    /// assert_eq!(p.eval(2.0), 17.0);
    /// ```
    pub fn eval(&self, x: T) -> T {
        // use Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
        let mut coeffs = self.0.iter();
        let Some(first) = coeffs.next() else {
            return T::zero();
        };
        coeffs.fold(first.clone(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Raise the polynomial to a non-negative integer power.
    ///
    /// `power(0)` is the multiplicative identity, even for the zero polynomial.
    ///
    /// ```
    /// use poly_solve::{poly, Poly};
    ///
    /// assert_eq!(poly![1, 1].power(2), poly![1, 2, 1]);
    /// assert_eq!(poly![1, 1].power(0), Poly::one());
    /// ```
    #[must_use]
    pub fn power(&self, pow: u32) -> Self {
        if pow == 0 {
            return Self::one();
        }

        if pow == 1 {
            return self.clone();
        }

        // TODO: exponentiation by squaring
        let mut res = self.clone();
        for _ in 2..=pow {
            res = res * self;
        }
        res
    }

    /// Whether this is the constant polynomial one, ignoring leading zeros
    #[must_use]
    pub fn is_one(&self) -> bool {
        let trimmed = self.clone().trim_leading_zeros();
        trimmed.len() == 1 && trimmed.0[0].is_one()
    }
}

impl<T: Scalar + PartialOrd + Display> Poly<T> {
    /// Display the polynomial using a custom variable name.
    ///
    /// ```
    /// use poly_solve::poly;
    ///
    /// let p = poly![2, -3, 1];
    /// assert_eq!(p.display_with('t').to_string(), "+2*t^2 - 3*t^1 + 1");
    /// ```
    #[must_use]
    pub const fn display_with(&self, symbol: char) -> PolyDisplay<'_, T> {
        PolyDisplay { poly: self, symbol }
    }
}

/// Helper returned by [`Poly::display_with`]
#[derive(Clone, Copy, Debug)]
pub struct PolyDisplay<'a, T> {
    poly: &'a Poly<T>,
    symbol: char,
}

impl<T: Scalar + PartialOrd + Display> Display for PolyDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.poly.len();
        for (i, c) in self.poly.iter().enumerate() {
            let negative = *c < T::zero();
            if i > 0 {
                f.write_str(if negative { " - " } else { " + " })?;
            } else {
                f.write_str(if negative { "-" } else { "+" })?;
            }
            // a signed zero still prints as zero
            let magnitude = if negative {
                -c.clone()
            } else if c.is_zero() {
                T::zero()
            } else {
                c.clone()
            };
            write!(f, "{magnitude}")?;
            let power = n - 1 - i;
            if power > 0 {
                write!(f, "*{}^{}", self.symbol, power)?;
            }
        }
        Ok(())
    }
}

impl<T: Scalar + PartialOrd + Display> Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with('x').fmt(f)
    }
}
