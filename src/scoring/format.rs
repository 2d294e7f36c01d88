//! Match format parameters and the fixed presets offered before a match

use serde::{Deserialize, Serialize};

use super::MatchError;

/// How the match is decided when sets are split one-all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeciderKind {
    /// A full third set, with its own set tiebreak
    RegularThirdSet,
    /// A single tiebreak to `decider_tiebreak_points` instead of a third set
    MatchTiebreak10,
}

/// The three formats the tracker offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPreset {
    /// Best-of-3 full sets to 6, TB7 at 6-6
    BestOfThree,
    /// Best-of-3 to 6, TB7 at 6-6, match TB10 instead of a third set
    BestOfThreeMatchTiebreak,
    /// Best-of-3 short sets to 4, TB7 at 4-4
    ShortSets,
}

impl FormatPreset {
    /// Map a 1-based menu choice to a preset
    pub fn from_choice(choice: u8) -> Result<Self, MatchError> {
        match choice {
            1 => Ok(Self::BestOfThree),
            2 => Ok(Self::BestOfThreeMatchTiebreak),
            3 => Ok(Self::ShortSets),
            other => Err(MatchError::InvalidPresetChoice(other)),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BestOfThree => "Best-of-3 full sets (to 6, TB7 at 6-6)",
            Self::BestOfThreeMatchTiebreak => "Best-of-3 with match TB10 instead of 3rd set",
            Self::ShortSets => "Best-of-3 short sets to 4 (TB7 at 4-4)",
        }
    }
}

impl Default for FormatPreset {
    fn default() -> Self {
        Self::BestOfThree
    }
}

/// Static format parameters, fixed once the match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Games needed to take a set (with a two-game lead)
    pub games_to_win_set: u32,
    /// Game count at which both players tied enter a set tiebreak
    pub tiebreak_at_games: u32,
    /// Target points of a set tiebreak, win by 2
    pub set_tiebreak_points: u32,
    pub decider: DeciderKind,
    /// Target points of the match tiebreak, win by 2
    pub decider_tiebreak_points: u32,
    pub best_of_sets: u32,
}

impl FormatConfig {
    pub fn for_preset(preset: FormatPreset) -> Self {
        match preset {
            FormatPreset::BestOfThree => Self {
                games_to_win_set: 6,
                tiebreak_at_games: 6,
                set_tiebreak_points: 7,
                decider: DeciderKind::RegularThirdSet,
                decider_tiebreak_points: 10,
                best_of_sets: 3,
            },
            FormatPreset::BestOfThreeMatchTiebreak => Self {
                games_to_win_set: 6,
                tiebreak_at_games: 6,
                set_tiebreak_points: 7,
                decider: DeciderKind::MatchTiebreak10,
                decider_tiebreak_points: 10,
                best_of_sets: 3,
            },
            FormatPreset::ShortSets => Self {
                games_to_win_set: 4,
                tiebreak_at_games: 4,
                set_tiebreak_points: 7,
                decider: DeciderKind::RegularThirdSet,
                decider_tiebreak_points: 10,
                best_of_sets: 3,
            },
        }
    }

    /// Sets a player needs to win the match
    pub fn sets_to_win(&self) -> u32 {
        self.best_of_sets / 2 + 1
    }

    /// True when `games` against `opponent_games` closes a regular set
    pub fn set_won_with(&self, games: u32, opponent_games: u32) -> bool {
        games >= self.games_to_win_set && games >= opponent_games + 2
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::for_preset(FormatPreset::default())
    }
}
