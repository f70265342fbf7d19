use fastrand::Rng;
use num::{Rational64, Zero};
use poly_solve::{poly, roots::Error, Poly, Poly64, RootsResultExt, Solver};

fn rand_poly(rng: &mut Rng) -> Poly<i64> {
    const MAX_LEN: usize = 7;
    let len = rng.usize(0..MAX_LEN);
    Poly::new((0..len).map(|_| rng.i64(-10..=10)).collect())
}

fn to_rational(p: &Poly<i64>) -> Poly<Rational64> {
    Poly::new(p.iter().copied().map(Rational64::from).collect())
}

/// a tour of the arithmetic operators, in random combinations
#[test]
fn stress_test_arithmetic() {
    const ITER: usize = 250;
    let mut rng = Rng::with_seed(0);
    for i in 0..ITER {
        let a = rand_poly(&mut rng);
        let b = rand_poly(&mut rng);

        let roundtrip = (&a + &b) - &b;
        assert_eq!(
            roundtrip.trim_leading_zeros(),
            a.clone().trim_leading_zeros(),
            "@ {i}: ({a:?} + {b:?}) - {b:?}"
        );

        let product = &a * &b;
        if !a.is_empty() && !b.is_empty() {
            assert_eq!(product.len(), a.len() + b.len() - 1);
        }
        for x in -3..=3 {
            assert_eq!(product.eval(x), a.eval(x) * b.eval(x), "@ {i}: x = {x}");
        }

        let divisor = to_rational(&b).trim_leading_zeros();
        if divisor.is_empty() {
            continue;
        }
        let (q, r) = to_rational(&a).multiply(&divisor).div_rem(&divisor).unwrap();
        if !a.is_empty() {
            assert_eq!(q, to_rational(&a), "@ {i}");
        }
        assert!(r.iter().all(Zero::is_zero), "@ {i}: {r:?}");
    }
}

#[test]
fn scenario_quadratic() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    // 2 - 3x + x^2
    let p = Poly::from_ascending(vec![2.0, -3.0, 1.0]);
    assert_eq!(p.solve(0.0, 100, 6).unwrap().sorted().as_slice(), &[1.0, 2.0]);
}

#[test]
fn scenario_cubic_zero_root() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let p = Poly::from_ascending(vec![0.0, 2.0, -3.0, 1.0]);
    assert_eq!(
        p.solve(0.0, 100, 6).unwrap().sorted().as_slice(),
        &[0.0, 1.0, 2.0]
    );
}

#[test]
fn scenario_quartic() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let p = Poly::from_ascending(vec![0, -6, 11, -6, 1]);
    let roots = Solver::default().seed(3).solve(&p).unwrap();
    assert_eq!(roots.sorted().as_slice(), &[0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn scenario_sum() {
    let p: Poly<i32> = poly![2, -3, 1];
    let q: Poly<i32> = poly![3, 2, -3, 1];
    assert_eq!(p + q, poly![3, 4, -6, 2]);
}

#[test]
fn scenario_exact_factor() {
    let p: Poly64 = Poly::from_roots(&[1.0, 2.0, 3.0]);
    let factor: Poly64 = poly![1.0, -2.0];
    let (q, r) = p.div_rem(&factor).unwrap();
    assert_eq!(q, Poly::from_roots(&[1.0, 3.0]));
    assert!(r.iter().all(|c| *c == 0.0));
    assert_eq!(p / factor, q);
}

#[test]
fn power_identities() {
    let p: Poly<i64> = poly![4, 0, -1, 7];
    assert_eq!(p.power(1), p);
    assert_eq!(p.power(0), Poly::one());
    assert_eq!(p.power(3), &p * &p * &p);
}

#[test]
fn derivative_then_solve() {
    // (x - 1)(x - 2)(x - 3)(x - 4), the derivative has three real roots
    let p: Poly64 = Poly::from_roots(&[1.0, 2.0, 3.0, 4.0]);
    let stationary = p.derivative().solve(2.4, 100, 6).unwrap().sorted();
    assert_eq!(stationary.len(), 3);
    assert!((stationary[1] - 2.5).abs() < 1E-6);
    for x in stationary.iter() {
        assert!(p.derivative().eval(*x).abs() < 1E-3, "{x}");
    }
}

#[test]
fn no_real_roots() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    // (x^2 + 1)(x^2 + 4)
    let p: Poly64 = poly![1.0, 0.0, 5.0, 0.0, 4.0];
    let result = Solver::default()
        .max_iter(30)
        .max_restarts(5)
        .seed(11)
        .solve(&p);
    assert!(matches!(result, Err(Error::NoConverge(ref r)) if r.is_empty()));
    assert!(result.ignore_errors().unwrap().is_empty());
}
