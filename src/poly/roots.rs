use std::ops::Deref;

use crate::{
    util::{doc_macros::errors_no_converge, float::round_to},
    Poly, RealScalar,
};

mod newton;
pub use newton::{newton, NewtonOutput};
mod restart;
pub use restart::Restart;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("root finder did not converge within the given constraints")]
    NoConverge(PolynomialRoot),

    #[error(transparent)]
    Poly(#[from] crate::Error),
}

pub type Result<T = PolynomialRoot> = std::result::Result<T, Error>;

/// The real roots found by a solver, in the order they were found.
///
/// Repeated roots appear once per multiplicity that was detected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolynomialRoot(Vec<f64>);

impl PolynomialRoot {
    /// Sort in ascending order
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.0.sort_by(f64::total_cmp);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for PolynomialRoot {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<PolynomialRoot> for Vec<f64> {
    fn from(value: PolynomialRoot) -> Self {
        value.0
    }
}

impl IntoIterator for PolynomialRoot {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Extension trait for [`Result`]
pub trait RootsResultExt: sealed::Sealed {
    /// Get roots even if the solver ran out of restarts. Returns [`None`] if
    /// the error was not a convergence failure.
    fn ignore_errors(self) -> Option<PolynomialRoot>;
}

impl sealed::Sealed for Result {}

impl RootsResultExt for Result {
    fn ignore_errors(self) -> Option<PolynomialRoot> {
        match self {
            Ok(roots) | Err(Error::NoConverge(roots)) => Some(roots),
            Err(_) => None,
        }
    }
}

/// Real root finder combining closed forms, Newton's method and deflation.
///
/// Polynomials with up to three coefficients are solved directly. Longer
/// ones are reduced one root at a time: Newton's method finds a root, which
/// is then factored out with synthetic division, until a quadratic is left.
///
/// ```
/// use poly_solve::{poly, Poly64, Solver};
///
/// let p: Poly64 = poly![1.0, -6.0, 11.0, -6.0];
/// let roots = Solver::default().precision(8).seed(1).solve(&p).unwrap();
/// assert_eq!(roots.sorted().as_slice(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    guess: f64,
    max_iter: usize,
    precision: u16,
    max_restarts: usize,
    restart: Restart,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            guess: 0.0,
            max_iter: 100,
            precision: 6,
            max_restarts: 100,
            restart: Restart::new(),
        }
    }
}

impl Solver {
    /// Starting point of every Newton search
    #[must_use]
    pub const fn guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }

    /// Iteration limit of a single Newton search
    #[must_use]
    pub const fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Number of decimal digits roots are rounded to
    #[must_use]
    pub const fn precision(mut self, precision: u16) -> Self {
        self.precision = precision;
        self
    }

    /// How many failed Newton searches are tolerated before giving up
    #[must_use]
    pub const fn max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Use a reproducible random source
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.restart = Restart::with_seed(seed);
        self
    }

    #[must_use]
    pub fn restart(mut self, restart: Restart) -> Self {
        self.restart = restart;
        self
    }

    /// Find the real roots of `poly`. The polynomial itself is not modified.
    ///
    /// Leading zero coefficients are ignored. Polynomials of degree 0 (and
    /// the zero polynomial) have no roots.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    /// - `Poly(Cast)`: a coefficient cannot be converted to `f64`
    pub fn solve<T: RealScalar>(&mut self, poly: &Poly<T>) -> Result {
        let mut this = poly.cast_to_f64()?.trim_leading_zeros();
        let mut roots = vec![];
        let mut guess = self.guess;
        let mut restarts = 0;

        while this.len() > 3 {
            let out = newton(&this, guess, self.max_iter, self.precision, &mut self.restart);
            let Some(root) = out.root else {
                restarts += 1;
                if restarts > self.max_restarts {
                    log::warn!("giving up after {restarts} restarts {{found: {roots:?}, remaining: \"{this}\"}}");
                    return Err(Error::NoConverge(PolynomialRoot(roots)));
                }
                guess = self.restart.perturb(guess);
                log::debug!("no root found, restarting {{guess: {guess}, restarts: {restarts}}}");
                continue;
            };

            let multiplicity = if out.is_repeated { 2 } else { 1 };
            for _ in 0..multiplicity {
                roots.push(root);
                this = this.deflate(root);
            }
            log::debug!("deflated {{root: {root}, multiplicity: {multiplicity}, remaining: \"{this}\"}}");
        }

        roots.extend(closed_form(&this, self.precision)?);
        Ok(PolynomialRoot(roots))
    }
}

impl<T: RealScalar> Poly<T> {
    /// Find the real roots with Newton's method and deflation.
    ///
    /// Use a [`Solver`] for more control, e.g. to make runs reproducible.
    ///
    /// # Examples
    /// ```
    /// use poly_solve::Poly;
    ///
    /// // 0 + 2x - 3x^2 + x^3
    /// let p = Poly::from_ascending(vec![0.0, 2.0, -3.0, 1.0]);
    /// let roots = p.solve(0.0, 100, 6).unwrap();
    /// assert_eq!(roots.sorted().as_slice(), &[0.0, 1.0, 2.0]);
    /// ```
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn solve(&self, guess: f64, max_iter: usize, precision: u16) -> Result {
        Solver::default()
            .guess(guess)
            .max_iter(max_iter)
            .precision(precision)
            .solve(self)
    }

    /// Same as [`Poly::solve`] with a guess of `0`, 100 iterations and 6
    /// digits of precision.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn solve_default(&self) -> Result {
        Solver::default().solve(self)
    }
}

/// Roots of a polynomial with at most three coefficients.
fn closed_form(poly: &Poly<f64>, precision: u16) -> crate::Result<Vec<f64>> {
    debug_assert!(poly.len() <= 3);
    match poly.len() {
        0 | 1 => Ok(vec![]),
        2 => Ok(vec![linear_root(poly, precision)?]),
        _ => quadratic_roots(poly, precision),
    }
}

/// Root of `a*x + b`
pub(crate) fn linear_root(poly: &Poly<f64>, precision: u16) -> crate::Result<f64> {
    debug_assert_eq!(poly.len(), 2);
    let (a, b) = (poly[0], poly[1]);
    if a == 0.0 {
        return Err(crate::Error::DivisionByZero);
    }
    Ok(round_to(-b / a, precision))
}

/// Real roots of `a*x^2 + b*x + c`, the larger one first when `a > 0`.
/// Complex pairs are not reported, neither is anything when the
/// discriminant is NaN.
pub(crate) fn quadratic_roots(poly: &Poly<f64>, precision: u16) -> crate::Result<Vec<f64>> {
    debug_assert_eq!(poly.len(), 3);
    let (a, b, c) = (poly[0], poly[1], poly[2]);
    if a == 0.0 {
        return Err(crate::Error::DivisionByZero);
    }
    let discriminant = b.mul_add(b, -4.0 * a * c);
    if discriminant.is_nan() || discriminant < 0.0 {
        log::trace!("complex roots are not reported {{discriminant: {discriminant}}}");
        return Ok(vec![]);
    }
    let sqrt = discriminant.sqrt();
    Ok(vec![
        round_to((-b + sqrt) / (2.0 * a), precision),
        round_to((-b - sqrt) / (2.0 * a), precision),
    ])
}
