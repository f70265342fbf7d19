//! These tests are tuned to just barely succeed, to find what the stability
//! limits of the solver are and to catch stability regressions.
//!
//! This should be updated if the stability is improved.

use fastrand::Rng;
use poly_solve::{
    __testing::{check_roots, test_case_roots, test_case_separated_roots, RandStreamR64},
    Solver,
};

/// - max degree: 5
/// - worst-case error: 1E-3
#[test]
fn separated_real() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let mut rng = Rng::with_seed(1);
    for i in 0..200 {
        let degree = 4 + i % 2;
        let (poly, expected_roots) = test_case_separated_roots(&mut rng, degree);
        let roots = Solver::default()
            .seed(i as u64)
            .solve(&poly)
            .unwrap_or_else(|e| panic!("@ {i}: {e} {poly}"));
        assert!(
            check_roots(&roots, expected_roots.clone(), 1E-3),
            "@ {i}: {roots:?} != {expected_roots:?}",
        );
    }
}

/// Roots drawn independently can be arbitrarily close, so only the ones that
/// were reported are checked.
///
/// - max degree: 4
#[test]
fn uniform_real_reported_roots() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let mut roots_stream = RandStreamR64::new(1, -2.0, 2.0);
    let mut scale_stream = RandStreamR64::new(2, 1.0, 10.0);
    for i in 0..200 {
        let (poly, _) = test_case_roots(&mut roots_stream, &mut scale_stream, 4);
        let Ok(roots) = Solver::default().seed(i).solve(&poly) else {
            continue;
        };
        assert!(roots.len() <= 4, "@ {i}: {roots:?}");
        for r in roots.iter() {
            assert!(poly.eval(*r).abs() < 5E-2, "@ {i}: {r} in {roots:?}");
        }
    }
}
