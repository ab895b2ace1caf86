use crate::{RandGen, Seeder};
use rand::Rng;
use std::fmt::{Debug, Formatter};

/// Points given by [`FixedScore::default`].
pub const DEFAULT_POINTS: u32 = 3;

/// A source of points for a match.
///
/// Implementations may be non-deterministic. Closures returning `u32` are providers too.
pub trait ScoreProvider {
    /// Returns the points at stake in the match.
    fn provide_score(&mut self) -> u32;
}

/// A provider always returning the same points.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedScore(pub u32);

impl Default for FixedScore {
    #[inline]
    fn default() -> Self {
        FixedScore(DEFAULT_POINTS)
    }
}

impl ScoreProvider for FixedScore {
    #[inline]
    fn provide_score(&mut self) -> u32 {
        self.0
    }
}

/// A provider backed by a function exported with the C ABI, usually built in a separate unit.
#[derive(Copy, Clone)]
pub struct ExternScore(pub extern "C" fn() -> u32);

impl ScoreProvider for ExternScore {
    #[inline]
    fn provide_score(&mut self) -> u32 {
        (self.0)()
    }
}

impl Debug for ExternScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExternScore({:p})", self.0 as *const ())
    }
}

/// A provider drawing reproducible pseudo-random points in the range `0..=max`.
#[derive(Clone, Debug)]
pub struct SeededScore {
    rng: RandGen,
    max: u32,
}

impl SeededScore {
    /// Creates a new `SeededScore`. The same seed always gives the same sequence of points.
    pub fn new(mut seeder: Seeder, max: u32) -> SeededScore {
        SeededScore {
            rng: seeder.make_rng(),
            max,
        }
    }
}

impl ScoreProvider for SeededScore {
    #[inline]
    fn provide_score(&mut self) -> u32 {
        self.rng.gen_range(0..=self.max)
    }
}

// TRAIT DEFAULT IMPLEMENTATIONS

impl<F: FnMut() -> u32> ScoreProvider for F {
    #[inline]
    fn provide_score(&mut self) -> u32 {
        self()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gen_seed;

    #[test]
    fn test_fixed_score() {
        assert_eq!(FixedScore::default().provide_score(), 3);
        assert_eq!(FixedScore(42).provide_score(), 42);
    }

    #[test]
    fn test_closure_score() {
        let mut next = 0u32;
        let mut provider = || {
            next += 1;
            next
        };
        assert_eq!(provider.provide_score(), 1);
        assert_eq!(provider.provide_score(), 2);
    }

    extern "C" fn seven() -> u32 {
        7
    }

    #[test]
    fn test_extern_score() {
        let mut provider = ExternScore(seven);
        assert_eq!(provider.provide_score(), 7);
    }

    #[test]
    fn test_seeded_score_bounds() {
        let mut provider = SeededScore::new(Seeder::from(gen_seed()), 5);
        for _ in 0..500 {
            assert!(provider.provide_score() <= 5);
        }

        let mut provider = SeededScore::new(Seeder::from(gen_seed()), 0);
        for _ in 0..50 {
            assert_eq!(provider.provide_score(), 0);
        }
    }

    #[test]
    fn test_reproducibility() {
        // Execute a bunch of times to test against different seeds
        for _ in 0..50 {
            reproducibility_test_case(gen_seed());
        }
    }

    fn reproducibility_test_case(seed: [u8; 32]) {
        let mut provider = SeededScore::new(Seeder::from(seed), 10);
        let points: Vec<_> = (0..20).map(|_| provider.provide_score()).collect();

        for _ in 0..10 {
            let mut provider_clone = SeededScore::new(Seeder::from(seed), 10);
            let points_clone: Vec<_> = (0..20).map(|_| provider_clone.provide_score()).collect();

            assert_eq!(points, points_clone);
        }
    }
}
