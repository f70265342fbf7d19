use fastrand::Rng;

const DEFAULT_SPREAD: f64 = 0.1;

/// Source of randomized guesses, used to escape stationary points and to
/// retry Newton searches that did not find anything.
///
/// Each [`crate::Solver`] owns one, so runs with the same seed are fully
/// reproducible.
#[derive(Clone, Debug)]
pub struct Restart {
    rng: Rng,
    spread: f64,
}

impl Restart {
    /// Seeded from system entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Rng::new(),
            spread: DEFAULT_SPREAD,
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            spread: DEFAULT_SPREAD,
        }
    }

    /// Relative width of the window around the guess, `0.1` means ±10%.
    #[must_use]
    pub const fn spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Draw a value uniformly from `[g - s*g, g + s*g]` (bounds reordered for
    /// negative guesses).
    ///
    /// A guess of zero has an empty window, `[-1, 1]` is used instead.
    pub fn perturb(&mut self, guess: f64) -> f64 {
        let a = guess - self.spread * guess;
        let b = guess + self.spread * guess;
        let (mut low, mut high) = if a <= b { (a, b) } else { (b, a) };
        if high - low <= 0.0 {
            low = -1.0;
            high = 1.0;
        }
        self.rng.f64().mul_add(high - low, low)
    }
}

impl Default for Restart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::Restart;

    #[test]
    fn stays_in_window() {
        let mut restart = Restart::with_seed(1);
        for _ in 0..1000 {
            let x = restart.perturb(10.0);
            assert!((9.0..=11.0).contains(&x), "{x}");
            let x = restart.perturb(-10.0);
            assert!((-11.0..=-9.0).contains(&x), "{x}");
        }
    }

    #[test]
    fn zero_guess_falls_back() {
        let mut restart = Restart::with_seed(2);
        let samples: Vec<f64> = (0..1000).map(|_| restart.perturb(0.0)).collect();
        assert!(samples.iter().all(|x| (-1.0..=1.0).contains(x)));
        // the window is actually used, not collapsed onto zero
        assert!(samples.iter().any(|x| x.abs() > 0.5));
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Restart::with_seed(42);
        let mut b = Restart::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.perturb(3.0).to_bits(), b.perturb(3.0).to_bits());
        }
    }

    #[test]
    fn custom_spread() {
        let mut restart = Restart::with_seed(3).spread(0.5);
        for _ in 0..1000 {
            let x = restart.perturb(2.0);
            assert!((1.0..=3.0).contains(&x), "{x}");
        }
    }
}
