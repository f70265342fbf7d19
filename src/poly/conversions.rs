use std::ops::Index;

use num::ToPrimitive;

use crate::{Error, Poly};

impl<T> Poly<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the highest degree down
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Create a polynomial from coefficients in ascending order of degree,
    /// i.e. constant term first.
    ///
    /// ```
    /// use poly_solve::{poly, Poly};
    ///
    /// // 2 - 3x + x^2
    /// assert_eq!(Poly::from_ascending(vec![2, -3, 1]), poly![1, -3, 2]);
    /// ```
    #[must_use]
    pub fn from_ascending(mut coeffs: Vec<T>) -> Self {
        coeffs.reverse();
        Self(coeffs)
    }
}

impl<T: Clone> Poly<T> {
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    /// Coefficients in ascending order of degree, constant term first
    #[must_use]
    pub fn to_ascending(&self) -> Vec<T> {
        self.0.iter().rev().cloned().collect()
    }
}

impl<T: ToPrimitive> Poly<T> {
    /// Convert every coefficient to `f64`.
    ///
    /// # Errors
    /// - `Cast`: a coefficient cannot be represented as `f64`
    pub fn cast_to_f64(&self) -> crate::Result<Poly<f64>> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, c)| c.to_f64().ok_or(Error::Cast { index }))
            .collect::<crate::Result<Vec<_>>>()
            .map(Poly)
    }
}

impl<T> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value.to_vec())
    }
}

impl<T> From<Poly<T>> for Vec<T> {
    fn from(val: Poly<T>) -> Self {
        val.into_vec()
    }
}

impl<T> Index<usize> for Poly<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a, T> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Poly<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
