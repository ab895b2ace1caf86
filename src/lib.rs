#![deny(unsafe_code)]

use rand::{thread_rng, Rng};

pub mod evaluator;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod score;
pub mod team;

pub use evaluator::{determine_winner, EvaluationError, MatchEvaluator, MatchReport, Side};
pub use score::{ExternScore, FixedScore, ScoreProvider, SeededScore};
pub use team::Team;

/// Seed source for the seeded score providers.
pub use rand_seeder::Seeder;

/// Random generator used by the seeded score providers.
pub type RandGen = rand_pcg::Pcg64;

/// Generates a new random seed.
#[inline]
pub fn gen_seed() -> [u8; 32] {
    thread_rng().gen()
}

/// Creates a [`Seeder`] from a new random seed.
#[inline]
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
