use crate::{Poly, Scalar};

impl<T> Poly<T> {
    /// The coefficient of the highest stored power, if any
    #[must_use]
    pub fn leading(&self) -> Option<&T> {
        self.0.first()
    }

    /// The constant term, if any
    #[must_use]
    pub fn constant_term(&self) -> Option<&T> {
        self.0.last()
    }
}

impl<T: Scalar> Poly<T> {
    /// Remove leading zero coefficients.
    ///
    /// Arithmetic never does this on its own, so sums and differences may
    /// leave zeros in front.
    ///
    /// ```
    /// use poly_solve::poly;
    ///
    /// assert_eq!(poly![0, 0, 1, 2].trim_leading_zeros(), poly![1, 2]);
    /// assert!(poly![0, 0].trim_leading_zeros().is_empty());
    /// ```
    #[must_use]
    pub fn trim_leading_zeros(mut self) -> Self {
        let first = self
            .0
            .iter()
            .position(|c| !c.is_zero())
            .unwrap_or(self.0.len());
        self.0.drain(..first);
        self
    }

    /// Mutable access to the constant term, creating it for the zero polynomial
    pub(crate) fn constant_term_mut(&mut self) -> &mut T {
        if self.0.is_empty() {
            self.0.push(T::zero());
        }
        let n = self.0.len();
        &mut self.0[n - 1]
    }

    /// Factor out one root of the polynomial with Horner's synthetic division,
    /// from the highest degree down, then discard the remainder.
    ///
    /// Returns a new polynomial one coefficient shorter.
    pub(crate) fn deflate(&self, r: T) -> Self {
        let mut z0 = T::zero();
        let mut quotient = Vec::with_capacity(self.len());
        for c in &self.0 {
            z0 = z0 * r.clone() + c.clone();
            quotient.push(z0.clone());
        }
        // the last value is the remainder
        quotient.pop();
        Self(quotient)
    }
}
