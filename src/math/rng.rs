//! Deterministic uniform numbers for cloud placement and drift speeds.

/// Small linear congruential generator; deterministic per seed so placement
/// and speeds are reproducible in tests.
#[derive(Debug, Clone)]
pub struct Rng {
    seed: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn next(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        self.seed
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.next() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// `a + floor(u * (b - a))`: inclusive of `a`, exclusive of `b`,
    /// integer-floored offsets
    pub fn randint(&mut self, a: f64, b: f64) -> f64 {
        a + (self.unit() * (b - a)).floor()
    }

    /// Shorthand for `randint(0, b)`
    pub fn randint_upto(&mut self, b: f64) -> f64 {
        self.randint(0.0, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randint_range() {
        let mut rng = Rng::new(42);
        for _ in 0..1000 {
            let v = rng.randint(10.0, 20.0);
            assert!(v >= 10.0 && v < 20.0);
            assert_eq!(v, v.floor());
        }
    }

    #[test]
    fn test_randint_fractional_base() {
        // the lower bound's fractional part survives the floor
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.randint(0.5, 2.0);
            assert!(v == 0.5 || v == 1.5, "unexpected speed {}", v);
        }
    }

    #[test]
    fn test_randint_upto() {
        let mut rng = Rng::new(1);
        for _ in 0..1000 {
            let v = rng.randint_upto(100.0);
            assert!(v >= 0.0 && v < 100.0);
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let mut a = Rng::new(99);
        let mut b = Rng::new(99);
        for _ in 0..10 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = Rng::new(3);
        assert_eq!(rng.randint(5.0, 5.0), 5.0);
    }
}
