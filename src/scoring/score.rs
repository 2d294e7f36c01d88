//! Score state - point -> game -> set -> match progression

use serde::{Deserialize, Serialize};
use tracing::info;

use super::format::{DeciderKind, FormatConfig};
use super::player::Player;
use super::tiebreak::{Tiebreak, TiebreakKind};

/// Games and tiebreak result of one set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRecord {
    pub games: [u32; 2],
    pub finished: bool,
    pub tiebreak_played: bool,
    /// Final tiebreak score, frozen when the set closes
    pub tiebreak_points: [u32; 2],
}

impl SetRecord {
    pub fn total_games(&self) -> u32 {
        self.games[0] + self.games[1]
    }

    pub fn winner(&self) -> Option<Player> {
        if !self.finished {
            return None;
        }
        let [one, two] = if self.tiebreak_played {
            self.tiebreak_points
        } else {
            self.games
        };
        Some(if one > two { Player::One } else { Player::Two })
    }
}

/// What is being played right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GameMode {
    Regular,
    Tiebreak(Tiebreak),
}

/// Transitions produced by a single point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub game_won: Option<Player>,
    /// Index of the set closed by this point and its winner
    pub set_closed: Option<(usize, Player)>,
    pub set_tiebreak_started: bool,
    pub match_tiebreak_started: bool,
    pub match_won: Option<Player>,
    /// Players change ends before the next point
    pub change_ends: bool,
}

/// Score of the match: sets, games, points and serve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Closed sets plus the set in progress (last)
    pub sets: Vec<SetRecord>,
    /// Raw regular-game points, 0.. (4+ only while deuce/advantage)
    pub game_points: [u32; 2],
    pub mode: GameMode,
    /// Server of the current regular game
    pub current_server: Player,
    pub sets_won: [u32; 2],
}

impl ScoreState {
    pub fn new(first_server: Player) -> Self {
        Self {
            sets: vec![SetRecord::default()],
            game_points: [0, 0],
            mode: GameMode::Regular,
            current_server: first_server,
            sets_won: [0, 0],
        }
    }

    pub fn current_set(&self) -> &SetRecord {
        self.sets.last().expect("score always holds at least one set")
    }

    fn current_set_mut(&mut self) -> &mut SetRecord {
        self.sets
            .last_mut()
            .expect("score always holds at least one set")
    }

    pub fn tiebreak(&self) -> Option<&Tiebreak> {
        match &self.mode {
            GameMode::Regular => None,
            GameMode::Tiebreak(tb) => Some(tb),
        }
    }

    pub fn in_set_tiebreak(&self) -> bool {
        matches!(self.tiebreak(), Some(tb) if tb.kind == TiebreakKind::Set)
    }

    pub fn in_match_tiebreak(&self) -> bool {
        matches!(self.tiebreak(), Some(tb) if tb.kind == TiebreakKind::Match)
    }

    /// Server of the next point; follows the 1-2-2 pattern inside tiebreaks
    pub fn server(&self) -> Player {
        match &self.mode {
            GameMode::Regular => self.current_server,
            GameMode::Tiebreak(tb) => tb.server(),
        }
    }

    /// Set slot the next point belongs to.
    ///
    /// The match tiebreak has no `SetRecord` until it finishes, so its points
    /// go to the slot just past the last tracked set.
    pub fn set_index(&self) -> usize {
        if self.in_match_tiebreak() {
            self.sets.len()
        } else {
            self.sets.len() - 1
        }
    }

    /// 0-based game number within the set being played
    pub fn game_index(&self) -> u32 {
        if self.in_match_tiebreak() {
            0
        } else {
            self.current_set().total_games()
        }
    }

    /// Points already played in the current game or tiebreak
    pub fn points_played_in_game(&self) -> u32 {
        match &self.mode {
            GameMode::Regular => self.game_points[0] + self.game_points[1],
            GameMode::Tiebreak(tb) => tb.points_played(),
        }
    }

    pub fn match_winner(&self, format: &FormatConfig) -> Option<Player> {
        let need = format.sets_to_win();
        Player::BOTH
            .into_iter()
            .find(|p| self.sets_won[p.index()] >= need)
    }

    /// Scoreboard text for `player`'s points in the current game
    pub fn point_label(&self, player: Player) -> String {
        if let GameMode::Tiebreak(tb) = &self.mode {
            return tb.points[player.index()].to_string();
        }
        let mine = self.game_points[player.index()];
        let theirs = self.game_points[player.opponent().index()];
        if mine >= 3 && theirs >= 3 {
            return match mine.cmp(&theirs) {
                std::cmp::Ordering::Equal => "40".to_string(),
                std::cmp::Ordering::Greater => "Ad".to_string(),
                std::cmp::Ordering::Less => String::new(),
            };
        }
        match mine {
            0 => "0",
            1 => "15",
            2 => "30",
            _ => "40",
        }
        .to_string()
    }

    /// Apply one point won by `winner`
    pub fn award_point(&mut self, winner: Player, format: &FormatConfig) -> ScoreUpdate {
        let mut update = ScoreUpdate::default();

        let tiebreak_result = match &mut self.mode {
            GameMode::Regular => None,
            GameMode::Tiebreak(tb) => Some((tb.kind, tb.award(winner, format), tb.clone())),
        };

        match tiebreak_result {
            None => self.award_regular_point(winner, format, &mut update),
            Some((_, None, tb)) => update.change_ends = tb.end_change_due(),
            Some((TiebreakKind::Set, Some(tb_winner), tb)) => {
                self.finish_set_tiebreak(tb_winner, &tb, format, &mut update)
            }
            Some((TiebreakKind::Match, Some(tb_winner), tb)) => {
                self.finish_match_tiebreak(tb_winner, &tb, &mut update)
            }
        }

        if update.match_won.is_some() {
            update.change_ends = false;
        }
        update
    }

    fn award_regular_point(&mut self, winner: Player, format: &FormatConfig, update: &mut ScoreUpdate) {
        self.game_points[winner.index()] += 1;
        let mine = self.game_points[winner.index()];
        let theirs = self.game_points[winner.opponent().index()];
        if mine < 4 || mine < theirs + 2 {
            return;
        }

        // Game
        self.current_set_mut().games[winner.index()] += 1;
        self.current_server = self.current_server.opponent();
        self.game_points = [0, 0];
        update.game_won = Some(winner);
        update.change_ends = self.current_set().total_games() % 2 == 1;

        let games = self.current_set().games;
        info!(winner = %winner, games = ?games, "Game won");

        if games[0] == format.tiebreak_at_games && games[1] == format.tiebreak_at_games {
            self.current_set_mut().tiebreak_played = true;
            self.mode = GameMode::Tiebreak(Tiebreak::new(TiebreakKind::Set, self.current_server));
            update.set_tiebreak_started = true;
            info!(start_server = %self.current_server, "Set tiebreak started");
            return;
        }

        if format.set_won_with(games[winner.index()], games[winner.opponent().index()]) {
            self.close_set(winner, format, update);
        }
    }

    fn finish_set_tiebreak(
        &mut self,
        winner: Player,
        tb: &Tiebreak,
        format: &FormatConfig,
        update: &mut ScoreUpdate,
    ) {
        let set = self.current_set_mut();
        set.tiebreak_points = tb.points;
        set.games[winner.index()] += 1;
        update.game_won = Some(winner);
        update.change_ends = set.total_games() % 2 == 1;

        // Rule 5(b): the player who served first in the tiebreak receives first in the next set
        self.current_server = tb.start_server.opponent();
        self.mode = GameMode::Regular;
        self.close_set(winner, format, update);
    }

    fn finish_match_tiebreak(&mut self, winner: Player, tb: &Tiebreak, update: &mut ScoreUpdate) {
        self.sets_won[winner.index()] += 1;
        // Decider row keeps the games of the last tracked set for display
        let decider = SetRecord {
            games: self.current_set().games,
            finished: true,
            tiebreak_played: true,
            tiebreak_points: tb.points,
        };
        let index = self.sets.len();
        self.sets.push(decider);
        self.mode = GameMode::Regular;
        update.set_closed = Some((index, winner));
        update.match_won = Some(winner);
        info!(winner = %winner, points = ?tb.points, "Match tiebreak won");
    }

    fn close_set(&mut self, winner: Player, format: &FormatConfig, update: &mut ScoreUpdate) {
        self.current_set_mut().finished = true;
        self.sets_won[winner.index()] += 1;
        let index = self.sets.len() - 1;
        update.set_closed = Some((index, winner));
        info!(set = index + 1, winner = %winner, games = ?self.current_set().games, "Set closed");

        if let Some(match_winner) = self.match_winner(format) {
            update.match_won = Some(match_winner);
            info!(winner = %match_winner, sets = ?self.sets_won, "Match won");
            return;
        }

        if self.sets.len() == 2
            && format.decider == DeciderKind::MatchTiebreak10
            && self.sets_won == [1, 1]
        {
            self.game_points = [0, 0];
            self.mode = GameMode::Tiebreak(Tiebreak::new(TiebreakKind::Match, self.current_server));
            update.match_tiebreak_started = true;
            info!(start_server = %self.current_server, "Match tiebreak started");
        } else {
            self.start_new_set();
        }
    }

    fn start_new_set(&mut self) {
        self.sets.push(SetRecord::default());
        self.game_points = [0, 0];
        self.mode = GameMode::Regular;
    }
}
