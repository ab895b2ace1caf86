use crate::score::ScoreProvider;
use crate::team::Team;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::{debug, trace};

/// First line printed before a match.
pub const BANNER: &str = "le match est ";

/// Returns the name of the team with the strictly greater strength.
///
/// On equal strength `team_b` wins. This tie-break is kept for compatibility with existing callers
/// of the C ABI `winner` function, which behaves the same way.
#[inline]
pub fn determine_winner<'a>(team_a: &'a Team, team_b: &'a Team) -> &'a str {
    pick_stronger(
        (team_a.name(), team_a.strength()),
        (team_b.name(), team_b.strength()),
    )
}

/// Picks the strictly stronger entry, the second one on equal strength.
#[inline]
pub(crate) fn pick_stronger<T>((a, strength_a): (T, u32), (b, strength_b): (T, u32)) -> T {
    if strength_a > strength_b {
        a
    } else {
        b
    }
}

/// Formats the line announcing the two teams, e.g. `France - Bresil`.
pub fn fixture_line(team_a: &Team, team_b: &Team) -> String {
    [team_a, team_b].iter().map(|team| team.name()).join(" - ")
}

/// Position of a team in a match.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum EvaluationError {
    /// A team has an empty (or whitespace-only) name.
    #[error("the {0} team has an empty name")]
    EmptyName(Side),
}

/// The outcome of a match.
#[derive(Serialize, Copy, Clone, Debug, Eq, PartialEq)]
pub struct MatchReport<'a> {
    team_a: &'a Team,
    team_b: &'a Team,
    winner: &'a str,
    points: u32,
}

impl<'a> MatchReport<'a> {
    #[inline]
    pub fn team_a(&self) -> &'a Team {
        self.team_a
    }

    #[inline]
    pub fn team_b(&self) -> &'a Team {
        self.team_b
    }

    #[inline]
    /// Name of the winning team, borrowed from one of the two teams.
    pub fn winner(&self) -> &'a str {
        self.winner
    }

    #[inline]
    /// Points won by the winner.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Formats the sentence announcing the winner.
    pub fn result_line(&self) -> String {
        format!(
            "C'est {} qui gagne {} points dans la poche",
            self.winner, self.points
        )
    }
}

impl Display for MatchReport<'_> {
    /// Writes the whole announcement, one line per step, without a trailing newline.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "{}", fixture_line(self.team_a, self.team_b))?;
        write!(f, "{}", self.result_line())
    }
}

/// Evaluates matches, taking the points at stake from a [`ScoreProvider`].
#[derive(Debug)]
pub struct MatchEvaluator<P: ScoreProvider> {
    provider: P,
}

impl<P: ScoreProvider> MatchEvaluator<P> {
    #[inline]
    /// Creates a new `MatchEvaluator`.
    pub fn new(provider: P) -> MatchEvaluator<P> {
        Self { provider }
    }

    /// Evaluates a match between two teams. The provider is called exactly once.
    pub fn evaluate<'a>(&mut self, team_a: &'a Team, team_b: &'a Team) -> MatchReport<'a> {
        let points = self.provider.provide_score();
        trace!(points, "score provided");

        let winner = determine_winner(team_a, team_b);
        debug!(team_a = %team_a, team_b = %team_b, winner, points, "match evaluated");

        MatchReport {
            team_a,
            team_b,
            winner,
            points,
        }
    }

    /// Like [`MatchEvaluator::evaluate`], but rejects teams without a name first.
    ///
    /// The provider isn't called if validation fails.
    pub fn try_evaluate<'a>(
        &mut self,
        team_a: &'a Team,
        team_b: &'a Team,
    ) -> Result<MatchReport<'a>, EvaluationError> {
        validate(team_a, Side::First)?;
        validate(team_b, Side::Second)?;
        Ok(self.evaluate(team_a, team_b))
    }

    #[inline]
    /// Returns the provider, consuming the evaluator.
    pub fn into_provider(self) -> P {
        self.provider
    }
}

#[inline]
fn validate(team: &Team, side: Side) -> Result<(), EvaluationError> {
    if team.has_blank_name() {
        debug!(%side, "rejected team with empty name");
        return Err(EvaluationError::EmptyName(side));
    }
    Ok(())
}
