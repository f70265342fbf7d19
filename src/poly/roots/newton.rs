use crate::{
    util::float::{close_to, round_to, tolerance},
    Poly,
};

use super::Restart;

/// Result of a single Newton-Raphson search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonOutput {
    /// `None` if the search did not end close enough to a root
    pub root: Option<f64>,

    /// Both the polynomial and its derivative vanish at the root, so it
    /// has multiplicity of at least two
    pub is_repeated: bool,
}

/// Find a single real root using Newton's method, starting from `guess`.
///
/// The search stops when two successive estimates agree to `precision`
/// digits, when `|p(x)| < 10^-precision`, or after `max_iter` steps. If the
/// derivative vanishes, the root is either flagged as repeated (when the
/// polynomial vanishes at half the precision as well) or the estimate jumps
/// to a random point near `guess`.
///
/// The reported root is rounded to `precision` digits. A search that ends
/// where `|p(x)| >= 10^-(precision / 2)` reports no root.
#[must_use]
pub fn newton(
    poly: &Poly<f64>,
    guess: f64,
    max_iter: usize,
    precision: u16,
    restart: &mut Restart,
) -> NewtonOutput {
    log::trace!("starting with arguments: {{poly: \"{poly}\", guess: {guess}, max_iter: {max_iter}, precision: {precision}}}");

    let derivative = poly.derivative();
    let epsilon = tolerance(precision);
    let half_epsilon = tolerance(precision / 2);

    let mut previous = f64::MAX;
    let mut current = guess;
    let mut is_repeated = false;
    let mut iteration = 0;

    while !close_to(previous, current, precision) && iteration < max_iter {
        previous = current;
        let px = poly.eval(previous);
        let pdx = derivative.eval(previous);

        if px.abs() < epsilon {
            log::trace!("stopping because target precision reached");
            break;
        }

        if pdx.abs() < half_epsilon {
            if px.abs() < half_epsilon {
                log::trace!("stopping because derivative vanishes at a root {{x: {previous}}}");
                is_repeated = true;
                break;
            }
            current = restart.perturb(guess);
            log::trace!("stationary point, jumping {{from: {previous}, to: {current}}}");
        } else {
            current = previous - px / pdx;
        }

        iteration += 1;
    }

    let root = (poly.eval(current).abs() < half_epsilon).then(|| round_to(current, precision));
    if root.is_none() {
        log::trace!("did not converge {{current: {current}, iterations: {iteration}}}");
    }
    NewtonOutput { root, is_repeated }
}

#[cfg(test)]
mod test {
    use super::{newton, NewtonOutput};
    use crate::{roots::Restart, Poly64};

    #[test]
    fn simple_root() {
        let p: Poly64 = poly![1.0, -6.0, 11.0, -6.0];
        let out = newton(&p, 0.0, 100, 6, &mut Restart::with_seed(1));
        assert_eq!(
            out,
            NewtonOutput {
                root: Some(1.0),
                is_repeated: false
            }
        );
    }

    #[test]
    fn exact_guess() {
        let p: Poly64 = poly![1.0, -3.0, 2.0, 0.0];
        let out = newton(&p, 0.0, 100, 6, &mut Restart::with_seed(1));
        assert_eq!(out.root, Some(0.0));
        assert!(!out.is_repeated);
    }

    /// `x^2 + 0.0005` has no real root, but both it and its derivative are
    /// small enough at zero to count as a double root at half precision
    #[test]
    fn repeated_root_flag() {
        let p: Poly64 = poly![1.0, 0.0, 0.0005];
        let out = newton(&p, 0.0, 100, 6, &mut Restart::with_seed(1));
        assert_eq!(out.root, Some(0.0));
        assert!(out.is_repeated);
    }

    /// `x^3 - 3x` has a stationary point at 1, the search has to jump away
    #[test]
    fn stationary_point() {
        let p: Poly64 = poly![1.0, 0.0, -3.0, 0.0];
        let out = newton(&p, 1.0, 100, 6, &mut Restart::with_seed(5));
        let root = out.root.unwrap();
        assert!((root.abs() - 3f64.sqrt()).abs() < 1E-5, "{root}");
        assert!(!out.is_repeated);
    }

    #[test]
    fn no_real_root() {
        let p: Poly64 = poly![1.0, 0.0, 0.0, 0.0, 1.0];
        let out = newton(&p, 0.5, 20, 6, &mut Restart::with_seed(1));
        assert_eq!(out.root, None);
    }

    #[test]
    fn zero_iterations() {
        let p: Poly64 = poly![1.0, -6.0, 11.0, -6.0];
        let out = newton(&p, 0.0, 0, 6, &mut Restart::with_seed(1));
        assert_eq!(out.root, None);
    }
}
