//! Read-only match snapshot handed to renderers and exporters

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::scoring::{FormatConfig, MatchState, Player, PlayerStats, PointLogEntry, SetRecord};

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
    Won { winner: Player },
    EndedEarly,
}

impl MatchStatus {
    pub fn of(state: &MatchState) -> Self {
        match state.winner() {
            Some(winner) => Self::Won { winner },
            None if state.ended_early => Self::EndedEarly,
            None => Self::InProgress,
        }
    }
}

/// Borrowed view of everything needed to rebuild any summary
#[derive(Debug, Serialize)]
pub struct MatchSnapshot<'a> {
    pub match_id: Uuid,
    pub players: &'a [String; 2],
    pub location: &'a str,
    pub started_at: DateTime<Utc>,
    pub format: &'a FormatConfig,
    #[serde(flatten)]
    pub status: MatchStatus,
    pub sets_won: [u32; 2],
    pub sets: &'a [SetRecord],
    pub match_stats: &'a [PlayerStats; 2],
    /// One more slot than `sets` while the match tiebreak is in play
    pub set_stats: &'a [[PlayerStats; 2]],
    pub log: &'a [PointLogEntry],
}

impl<'a> MatchSnapshot<'a> {
    pub fn capture(state: &'a MatchState) -> Self {
        Self {
            match_id: state.info.id,
            players: &state.info.player_names,
            location: &state.info.location,
            started_at: state.info.started_at,
            format: &state.format,
            status: MatchStatus::of(state),
            sets_won: state.score.sets_won,
            sets: &state.score.sets,
            match_stats: &state.match_stats,
            set_stats: &state.set_stats,
            log: &state.log,
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.players[player.index()]
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
