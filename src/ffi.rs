//! C ABI surface, enabled by the `ffi` feature.
//!
//! ```c
//! struct team {
//!     const char *name;
//!     uint32_t strength;
//! };
//! extern const char *winner(struct team team_a, struct team team_b);
//! extern uint32_t score(void);
//! ```
#![allow(unsafe_code)] // #[no_mangle]

use crate::evaluator::pick_stronger;
use crate::score::{FixedScore, ScoreProvider};
use std::ffi::c_char;
use tracing::trace;

/// A team as laid out across the C ABI. Passed by value.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct RawTeam {
    /// Nul-terminated name, owned by the caller. Never read on this side.
    pub name: *const c_char,
    pub strength: u32,
}

/// Returns the name pointer of the strictly stronger team, `team_b`'s on equal strength.
///
/// The returned pointer is one of the two inputs, so it is valid as long as the caller's data is.
#[no_mangle]
pub extern "C" fn winner(team_a: RawTeam, team_b: RawTeam) -> *const c_char {
    trace!(
        strength_a = team_a.strength,
        strength_b = team_b.strength,
        "winner called across the C ABI"
    );
    pick_stronger(
        (team_a.name, team_a.strength),
        (team_b.name, team_b.strength),
    )
}

/// Returns the default points at stake in a match.
#[no_mangle]
pub extern "C" fn score() -> u32 {
    FixedScore::default().provide_score()
}
