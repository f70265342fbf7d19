//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;

use crate::{Poly, Poly64};

/// Infinite stream of uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    state: Rng,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64().mul_add(self.max - self.min, self.min))
    }
}

/// Generate one test case where the roots are known and can be compared
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly64, Vec<f64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let poly = Poly64::from_roots(&roots) * scale;
    (poly, roots)
}

/// Generate one test case where the roots are at least `0.5` apart.
///
/// Every root is a distinct integer in `[-degree, degree]` plus a random
/// offset in `[0, 0.5)`, the polynomial is scaled by a factor in `[1, 4)`.
pub fn test_case_separated_roots(rng: &mut Rng, degree: usize) -> (Poly64, Vec<f64>) {
    let bound = i32::try_from(degree).expect("degree should be small");
    let mut bases = (-bound..=bound).collect_vec();
    rng.shuffle(&mut bases);
    let roots = bases
        .into_iter()
        .take(degree)
        .map(|b| f64::from(b) + rng.f64() * 0.5)
        .collect_vec();
    let scale = rng.f64().mul_add(3.0, 1.0);
    let poly = Poly::from_roots(&roots) * scale;
    (poly, roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: &[f64], mut roots2: Vec<f64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).abs();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
