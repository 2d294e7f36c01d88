//! Tiebreak engine - 1-2-2 serve rotation, end changes and win condition
//!
//! Both the set tiebreak and the match tiebreak-10 run through the same
//! engine; only the target score differs.

use serde::{Deserialize, Serialize};

use super::format::FormatConfig;
use super::player::Player;

/// Points between change-of-ends cues inside a tiebreak
pub const TIEBREAK_END_CHANGE_EVERY: u32 = 6;

/// Which tiebreak is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiebreakKind {
    /// Decides a set tied at `tiebreak_at_games`
    Set,
    /// Replaces the deciding set
    Match,
}

/// An active tiebreak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiebreak {
    pub kind: TiebreakKind,
    /// Player who served the opening point
    pub start_server: Player,
    /// Tiebreak points won, indexed by `Player::index`
    pub points: [u32; 2],
}

impl Tiebreak {
    pub fn new(kind: TiebreakKind, start_server: Player) -> Self {
        Self {
            kind,
            start_server,
            points: [0, 0],
        }
    }

    /// Points already played in this tiebreak
    pub fn points_played(&self) -> u32 {
        self.points[0] + self.points[1]
    }

    /// Server of the next point
    pub fn server(&self) -> Player {
        TiebreakEngine::server_for_point(self.start_server, self.points_played())
    }

    pub fn target(&self, format: &FormatConfig) -> u32 {
        match self.kind {
            TiebreakKind::Set => format.set_tiebreak_points,
            TiebreakKind::Match => format.decider_tiebreak_points,
        }
    }

    /// Record a point and report the tiebreak winner, if any
    pub fn award(&mut self, winner: Player, format: &FormatConfig) -> Option<Player> {
        self.points[winner.index()] += 1;
        TiebreakEngine::winner(self.points, self.target(format))
    }

    /// True when the players change ends before the next point
    pub fn end_change_due(&self) -> bool {
        TiebreakEngine::end_change_after(self.points_played())
    }
}

/// Pure tiebreak rules
pub struct TiebreakEngine;

impl TiebreakEngine {
    /// Server for 0-based tiebreak point `index`.
    ///
    /// The opening server takes point 0, then service alternates every two
    /// points: S, O, O, S, S, O, O, S, ...
    pub fn server_for_point(start_server: Player, index: u32) -> Player {
        match index % 4 {
            0 | 3 => start_server,
            _ => start_server.opponent(),
        }
    }

    /// Ends change after every sixth point played
    pub fn end_change_after(points_played: u32) -> bool {
        points_played > 0 && points_played % TIEBREAK_END_CHANGE_EVERY == 0
    }

    /// Winner of a tiebreak to `target`, win by two
    pub fn winner(points: [u32; 2], target: u32) -> Option<Player> {
        let [p1, p2] = points;
        if p1.max(p2) < target || p1.abs_diff(p2) < 2 {
            return None;
        }
        Some(if p1 > p2 { Player::One } else { Player::Two })
    }
}
