use crate::{util::casting::usize_to_scalar, util::doc_macros::panic_t_from_int, Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// Derivative
    ///
    /// The constant term is dropped and every other coefficient is multiplied
    /// by the power it belongs to, so the result is always one coefficient
    /// shorter (the derivative of a constant is the zero polynomial).
    ///
    /// ```
    /// use poly_solve::poly;
    ///
    /// assert_eq!(poly![1, 2, 3, 4].derivative(), poly![3, 4, 3]);
    /// ```
    ///
    /// # Panics
    #[doc = panic_t_from_int!(r"usize")]
    #[must_use]
    pub fn derivative(&self) -> Self {
        let n = self.len();
        if n <= 1 {
            return Self::zero();
        }

        let coeffs = self.0[..n - 1]
            .iter()
            .zip((1..n).rev())
            .map(|(c, k)| c.clone() * usize_to_scalar::<T>(k))
            .collect();
        Self(coeffs)
    }

    /// Derivative of order `order`, `nth_derivative(0)` is a copy.
    ///
    /// # Panics
    #[doc = panic_t_from_int!(r"usize")]
    #[must_use]
    pub fn nth_derivative(&self, order: usize) -> Self {
        (0..order).fold(self.clone(), |p, _| p.derivative())
    }
}
