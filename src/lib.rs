//! Generic univariate polynomials and a real root solver.
//!
//! Coefficients are stored in order of **descending** degree: the first
//! coefficient multiplies the highest power and the last one is the constant
//! term. Use [`Poly::from_ascending`] if your coefficients come the other way
//! around.
//!
//! ```
//! use poly_solve::{poly, Poly64};
//!
//! // x^2 - 3x + 2
//! let p: Poly64 = poly![1.0, -3.0, 2.0];
//! assert_eq!(p.eval(1.0), 0.0);
//! assert_eq!(p.solve(0.0, 100, 6).unwrap().sorted().as_slice(), &[1.0, 2.0]);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

/// Create a polynomial from a list of coefficients, highest degree first.
///
/// ```
/// use poly_solve::{poly, Poly};
///
/// assert_eq!(poly![3, 0, 1], Poly::new(vec![3, 0, 1]));
/// let zero: Poly<i32> = poly![];
/// assert!(zero.is_empty());
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::zero()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(vec![$($c),+])
    };
}

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::{FieldScalar, RealScalar, Scalar};

mod poly;
pub use poly::{roots, Poly, PolyDisplay};
pub use roots::{PolynomialRoot, RootsResultExt, Solver};

pub(crate) mod util;
pub use util::linalg::{dot, elementwise_sum};

// re-exported for integration tests and benchmarks
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
