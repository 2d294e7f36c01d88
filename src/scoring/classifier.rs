//! Pre-point significance: game, break, set and match points
//!
//! Everything here reads the score as it stands before the point is played
//! and never mutates it. Tiebreak points carry no flags.

use serde::{Deserialize, Serialize};

use super::format::FormatConfig;
use super::player::Player;
use super::score::ScoreState;

/// Flags recorded on a log entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSignificance {
    pub break_point: bool,
    pub game_point: bool,
    pub set_point: bool,
    pub match_point: bool,
}

pub struct PointClassifier;

impl PointClassifier {
    /// Whether the leader wins the game by taking the next point
    pub fn is_game_point_for(leader_points: u32, trailer_points: u32) -> bool {
        leader_points >= 3 && (trailer_points <= 2 || leader_points == trailer_points + 1)
    }

    pub fn is_game_point_if_player_wins(score: &ScoreState, player: Player) -> bool {
        score.tiebreak().is_none()
            && Self::is_game_point_for(
                score.game_points[player.index()],
                score.game_points[player.opponent().index()],
            )
    }

    pub fn is_break_point_if_receiver_wins(score: &ScoreState) -> bool {
        Self::is_game_point_if_player_wins(score, score.current_server.opponent())
    }

    pub fn is_set_point_if_player_wins(score: &ScoreState, format: &FormatConfig, player: Player) -> bool {
        if !Self::is_game_point_if_player_wins(score, player) {
            return false;
        }
        let games = score.current_set().games;
        format.set_won_with(games[player.index()] + 1, games[player.opponent().index()])
    }

    pub fn is_match_point_if_player_wins(score: &ScoreState, format: &FormatConfig, player: Player) -> bool {
        Self::is_set_point_if_player_wins(score, format, player)
            && score.sets_won[player.index()] + 1 == format.sets_to_win()
    }

    /// Flags for the next point, for either player
    pub fn classify(score: &ScoreState, format: &FormatConfig) -> PointSignificance {
        PointSignificance {
            break_point: Self::is_break_point_if_receiver_wins(score),
            game_point: Player::BOTH
                .iter()
                .any(|&p| Self::is_game_point_if_player_wins(score, p)),
            set_point: Player::BOTH
                .iter()
                .any(|&p| Self::is_set_point_if_player_wins(score, format, p)),
            match_point: Player::BOTH
                .iter()
                .any(|&p| Self::is_match_point_if_player_wins(score, format, p)),
        }
    }
}
