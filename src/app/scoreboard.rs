//! Live scoreboard

use std::fmt;

use chrono::{DateTime, Utc};

use crate::scoring::{MatchState, Player};
use crate::util::time::elapsed_minutes;

/// Marker shown next to the player serving the next point
const SERVER_DOT: char = '*';

/// Scoreboard view of a match at a given instant
pub struct Scoreboard<'a> {
    state: &'a MatchState,
    now: DateTime<Utc>,
}

impl<'a> Scoreboard<'a> {
    pub fn new(state: &'a MatchState, now: DateTime<Utc>) -> Self {
        Self { state, now }
    }

    fn status(&self) -> Option<String> {
        let state = self.state;
        let score = &state.score;
        if let Some(winner) = state.winner() {
            return Some(format!("Match won by {}", state.info.name(winner)));
        }
        if state.ended_early {
            return Some("Match ended early".to_string());
        }
        if score.in_match_tiebreak() {
            return Some(format!(
                "Match tiebreak, first to {}",
                state.format.decider_tiebreak_points
            ));
        }
        if score.in_set_tiebreak() {
            return Some(format!("Tiebreak, first to {}", state.format.set_tiebreak_points));
        }
        None
    }
}

impl fmt::Display for Scoreboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let score = &state.score;
        let live = !state.is_finished();
        let width = state
            .info
            .player_names
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
            .max(6);

        let minutes = elapsed_minutes(state.info.started_at, self.now);
        if state.info.location.is_empty() {
            writeln!(f, "{minutes} min")?;
        } else {
            writeln!(f, "{} | {minutes} min", state.info.location)?;
        }

        write!(f, "  {:<width$}  Sets", "")?;
        for i in 0..score.sets.len() {
            write!(f, "  S{}", i + 1)?;
        }
        if live {
            let points = if score.tiebreak().is_some() { "TB" } else { "Pts" };
            write!(f, "  {points:>3}")?;
        }
        writeln!(f)?;

        for player in Player::BOTH {
            let dot = if live && score.server() == player { SERVER_DOT } else { ' ' };
            write!(
                f,
                "{dot} {:<width$}  {:>4}",
                state.info.name(player),
                score.sets_won[player.index()]
            )?;
            for set in &score.sets {
                write!(f, "  {:>2}", set.games[player.index()])?;
            }
            if live {
                write!(f, "  {:>3}", score.point_label(player))?;
            }
            writeln!(f)?;
        }

        if let Some(status) = self.status() {
            writeln!(f, "{status}")?;
        }
        Ok(())
    }
}
