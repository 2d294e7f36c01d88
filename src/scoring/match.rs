//! Match state and the point-by-point controller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::classifier::{PointClassifier, PointSignificance};
use super::event::{PointEvent, ServeType};
use super::format::FormatConfig;
use super::history::HistoryManager;
use super::player::Player;
use super::score::{GameMode, ScoreState, ScoreUpdate};
use super::stats::{PlayerStats, StatsAggregator};
use super::tiebreak::TiebreakKind;

/// Errors returned by the controller
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("The match is over; no more points can be recorded")]
    MatchOver,

    #[error("No point is being entered")]
    NoPointInProgress,

    #[error("Unknown format choice: {0} (expected 1-3)")]
    InvalidPresetChoice(u8),

    #[error("The deciding tiebreak server can only be chosen before its first point")]
    DeciderServerLocked,
}

/// Who is playing, and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: Uuid,
    pub player_names: [String; 2],
    pub location: String,
    pub started_at: DateTime<Utc>,
}

impl MatchInfo {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_names: [player1.into(), player2.into()],
            location: location.into(),
            started_at: Utc::now(),
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.player_names[player.index()]
    }
}

/// One played point; never modified after it is appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointLogEntry {
    /// Position in the log, 0-based
    pub index: usize,
    pub set_index: usize,
    /// Game number within the set, 0-based
    pub game_index: u32,
    pub in_tiebreak: bool,
    /// Point number within the game or tiebreak, 1-based
    pub point_number: u32,
    pub server: Player,
    pub serve_type: ServeType,
    pub winner: Player,
    /// Computed before the point was applied
    #[serde(flatten)]
    pub significance: PointSignificance,
    pub description: String,
}

/// Full match state; cloned whole into the undo history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub info: MatchInfo,
    pub format: FormatConfig,
    pub score: ScoreState,
    pub match_stats: [PlayerStats; 2],
    /// One slot per set, the match tiebreak included
    pub set_stats: Vec<[PlayerStats; 2]>,
    pub log: Vec<PointLogEntry>,
    /// Stopped by the user before a winner was decided
    pub ended_early: bool,
}

impl MatchState {
    pub fn new(info: MatchInfo, format: FormatConfig, first_server: Player) -> Self {
        Self {
            info,
            format,
            score: ScoreState::new(first_server),
            match_stats: Default::default(),
            set_stats: vec![Default::default()],
            log: Vec::new(),
            ended_early: false,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.score.match_winner(&self.format)
    }

    pub fn is_finished(&self) -> bool {
        self.ended_early || self.winner().is_some()
    }

    pub fn stats(&self, player: Player) -> &PlayerStats {
        &self.match_stats[player.index()]
    }

    pub fn set_stats(&self, set_index: usize, player: Player) -> Option<&PlayerStats> {
        self.set_stats.get(set_index).map(|pair| &pair[player.index()])
    }

    fn ensure_set_slot(&mut self, set_index: usize) {
        while self.set_stats.len() <= set_index {
            self.set_stats.push(Default::default());
        }
    }
}

/// Result of applying one point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub entry: PointLogEntry,
    pub update: ScoreUpdate,
    /// The match was decided by this point
    pub match_over: bool,
}

/// Owns the match and applies point events one at a time
pub struct MatchController {
    state: MatchState,
    history: HistoryManager<MatchState>,
    point_in_progress: bool,
}

impl MatchController {
    pub fn new(info: MatchInfo, format: FormatConfig, first_server: Player) -> Self {
        info!(
            match_id = %info.id,
            player1 = %info.player_names[0],
            player2 = %info.player_names[1],
            first_server = %first_server,
            "Match created"
        );
        Self {
            state: MatchState::new(info, format, first_server),
            history: HistoryManager::new(),
            point_in_progress: false,
        }
    }

    /// Read-only view for renderers and exporters
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn point_in_progress(&self) -> bool {
        self.point_in_progress
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Server of the next point
    pub fn server(&self) -> Player {
        self.state.score.server()
    }

    /// Start entering a point: snapshot the state for undo.
    pub fn begin_point(&mut self) -> Result<(), MatchError> {
        if self.is_over() {
            warn!(match_id = %self.state.info.id, "Point rejected, match is over");
            return Err(MatchError::MatchOver);
        }
        if !self.point_in_progress {
            self.history.push(&self.state);
            self.point_in_progress = true;
        }
        Ok(())
    }

    /// Finish the point started with `begin_point`
    pub fn commit_point(&mut self, event: &PointEvent) -> Result<ApplyOutcome, MatchError> {
        if !self.point_in_progress {
            return Err(MatchError::NoPointInProgress);
        }
        self.point_in_progress = false;
        Ok(self.apply(event))
    }

    /// Snapshot and apply a point in one step
    pub fn apply_point(&mut self, event: &PointEvent) -> Result<ApplyOutcome, MatchError> {
        self.begin_point()?;
        self.commit_point(event)
    }

    fn apply(&mut self, event: &PointEvent) -> ApplyOutcome {
        let state = &mut self.state;
        let score = &state.score;

        // Everything recorded on the entry is read before the point lands
        let server = score.server();
        let significance = PointClassifier::classify(score, &state.format);
        let set_index = score.set_index();
        let game_index = score.game_index();
        let in_tiebreak = score.tiebreak().is_some();
        let point_number = score.points_played_in_game() + 1;
        let winner = event.winner(server);

        let update = state.score.award_point(winner, &state.format);

        state.ensure_set_slot(set_index);
        let sets_won = state.score.sets_won;
        debug_assert!(sets_won.iter().all(|&won| won <= state.format.sets_to_win()));
        StatsAggregator::new(&mut state.match_stats, &mut state.set_stats[set_index]).record_point(
            server,
            event,
            significance.break_point,
        );

        let entry = PointLogEntry {
            index: state.log.len(),
            set_index,
            game_index,
            in_tiebreak,
            point_number,
            server,
            serve_type: event.logged_serve(),
            winner,
            significance,
            description: event.describe(server),
        };
        state.log.push(entry.clone());

        // Keep a stats slot ready for whatever is played next
        let next_index = state.score.set_index();
        state.ensure_set_slot(next_index);

        debug!(
            point = entry.index + 1,
            set = set_index + 1,
            game = game_index + 1,
            tiebreak = in_tiebreak,
            server = %server,
            winner = %winner,
            break_point = significance.break_point,
            set_point = significance.set_point,
            match_point = significance.match_point,
            "Point recorded"
        );

        let match_over = update.match_won.is_some();
        if match_over {
            info!(match_id = %state.info.id, winner = %winner, sets = ?sets_won, "Match finished");
        }

        ApplyOutcome {
            entry,
            update,
            match_over,
        }
    }

    /// Undo the last completed point.
    ///
    /// While a point is being entered this pops twice: the snapshot taken by
    /// `begin_point`, then the one before the previous point.
    pub fn undo(&mut self) -> bool {
        if self.state.ended_early {
            warn!(match_id = %self.state.info.id, "Undo rejected, match was ended");
            return false;
        }
        if self.point_in_progress {
            self.point_in_progress = false;
            let _ = self.history.pop();
        }
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                info!(
                    match_id = %self.state.info.id,
                    points = self.state.log.len(),
                    "Undid last point"
                );
                true
            }
            None => {
                warn!(match_id = %self.state.info.id, "Nothing to undo");
                false
            }
        }
    }

    /// Stop the match now; a point being entered is discarded.
    pub fn end_match(&mut self) -> &MatchState {
        if self.point_in_progress {
            self.point_in_progress = false;
            let _ = self.history.pop();
        }
        if self.state.winner().is_none() {
            self.state.ended_early = true;
            info!(match_id = %self.state.info.id, points = self.state.log.len(), "Match ended early");
        }
        &self.state
    }

    /// Pick who opens the match tiebreak, before its first point
    pub fn choose_decider_server(&mut self, player: Player) -> Result<(), MatchError> {
        match &mut self.state.score.mode {
            GameMode::Tiebreak(tb) if tb.kind == TiebreakKind::Match && tb.points_played() == 0 => {
                tb.start_server = player;
                info!(start_server = %player, "Match tiebreak server chosen");
                Ok(())
            }
            _ => Err(MatchError::DeciderServerLocked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::event::{RallyOutcome, ReturnOutcome};
    use crate::scoring::format::FormatPreset;
    use proptest::prelude::*;

    fn controller(preset: FormatPreset) -> MatchController {
        MatchController::new(
            MatchInfo::new("Alice", "Bea", "Club - Court 1"),
            FormatConfig::for_preset(preset),
            Player::One,
        )
    }

    /// A point `player` wins whoever serves
    fn point_for(ctl: &MatchController, player: Player) -> PointEvent {
        if ctl.server() == player {
            PointEvent::ace(ServeType::First)
        } else {
            PointEvent::returned(ServeType::First, false, ReturnOutcome::Winner)
        }
    }

    fn win_points(ctl: &mut MatchController, player: Player, n: usize) -> Option<ApplyOutcome> {
        let mut last = None;
        for _ in 0..n {
            let event = point_for(ctl, player);
            last = Some(ctl.apply_point(&event).unwrap());
        }
        last
    }

    fn win_games(ctl: &mut MatchController, player: Player, n: usize) {
        for _ in 0..n {
            win_points(ctl, player, 4);
        }
    }

    fn assert_point_conservation(state: &MatchState) {
        let n = state.log.len() as u32;
        let [a, b] = &state.match_stats;
        assert_eq!(a.points_won + b.points_won, n);
        assert_eq!(a.points_played, n);
        assert_eq!(b.points_played, n);
        let per_set: u32 = state.set_stats.iter().map(|pair| pair[0].points_played).sum();
        assert_eq!(per_set, n);
    }

    #[test]
    fn seven_five_then_tiebreak_set_then_fresh_third_set() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        let (a, b) = (Player::One, Player::Two);

        for _ in 0..5 {
            win_games(&mut ctl, a, 1);
            win_games(&mut ctl, b, 1);
        }
        win_games(&mut ctl, a, 1);
        assert_eq!(ctl.state().score.current_set().games, [6, 5]);
        win_games(&mut ctl, a, 1);
        let score = &ctl.state().score;
        assert_eq!(score.sets[0].games, [7, 5]);
        assert!(score.sets[0].finished && !score.sets[0].tiebreak_played);

        for _ in 0..6 {
            win_games(&mut ctl, a, 1);
            win_games(&mut ctl, b, 1);
        }
        assert!(ctl.state().score.in_set_tiebreak());

        // 5-5, then B takes two in a row
        for _ in 0..5 {
            win_points(&mut ctl, a, 1);
            win_points(&mut ctl, b, 1);
        }
        win_points(&mut ctl, b, 1);
        let outcome = win_points(&mut ctl, b, 1).unwrap();
        assert_eq!(outcome.update.set_closed, Some((1, b)));
        assert!(outcome.entry.in_tiebreak);

        let score = &ctl.state().score;
        assert_eq!(score.sets[1].games, [6, 7]);
        assert!(score.sets[1].tiebreak_played);
        assert_eq!(score.sets[1].tiebreak_points, [5, 7]);
        assert_eq!(score.sets.len(), 3);
        assert_eq!(score.current_set().games, [0, 0]);
        assert_eq!(score.mode, GameMode::Regular);
        assert_eq!(score.sets_won, [1, 1]);
        assert_point_conservation(ctl.state());
    }

    #[test]
    fn match_tiebreak_decides_split_sets() {
        let mut ctl = controller(FormatPreset::BestOfThreeMatchTiebreak);
        let (a, b) = (Player::One, Player::Two);
        win_games(&mut ctl, a, 6);
        win_games(&mut ctl, b, 6);

        let score = &ctl.state().score;
        assert!(score.in_match_tiebreak());
        assert_eq!(score.sets.len(), 2);
        assert_eq!(ctl.state().set_stats.len(), 3);

        for _ in 0..8 {
            win_points(&mut ctl, a, 1);
            win_points(&mut ctl, b, 1);
        }
        win_points(&mut ctl, a, 1);
        let outcome = win_points(&mut ctl, a, 1).unwrap();
        assert!(outcome.match_over);
        assert_eq!(outcome.entry.set_index, 2);
        assert!(outcome.entry.in_tiebreak);
        // Eighteenth tiebreak point, but the match is over
        assert!(!outcome.update.change_ends);

        let state = ctl.state();
        assert_eq!(state.winner(), Some(a));
        assert_eq!(state.score.sets_won, [2, 1]);
        assert_eq!(state.score.sets.len(), 3);
        assert_eq!(state.score.sets[2].tiebreak_points, [10, 8]);
        assert_eq!(state.score.sets[2].winner(), Some(a));
        assert_eq!(state.set_stats[2][0].points_played, 18);
        assert_point_conservation(state);

        assert!(matches!(
            ctl.apply_point(&PointEvent::ace(ServeType::First)),
            Err(MatchError::MatchOver)
        ));
    }

    #[test]
    fn second_set_tiebreak_leads_into_match_tiebreak() {
        let mut ctl = controller(FormatPreset::BestOfThreeMatchTiebreak);
        let (a, b) = (Player::One, Player::Two);
        win_games(&mut ctl, a, 6);
        for _ in 0..6 {
            win_games(&mut ctl, a, 1);
            win_games(&mut ctl, b, 1);
        }
        assert!(ctl.state().score.in_set_tiebreak());
        let tiebreak_start = ctl.server();

        win_points(&mut ctl, b, 6);
        let outcome = win_points(&mut ctl, b, 1).unwrap();
        assert_eq!(outcome.update.game_won, Some(b));
        assert_eq!(outcome.update.set_closed, Some((1, b)));
        assert!(outcome.update.match_tiebreak_started);
        assert!(!outcome.update.set_tiebreak_started);
        // 6-7 is an odd game total
        assert!(outcome.update.change_ends);
        assert!(!outcome.match_over);

        let state = ctl.state();
        assert!(state.score.in_match_tiebreak());
        assert_eq!(state.score.sets.len(), 2);
        assert_eq!(state.score.sets[1].games, [6, 7]);
        assert_eq!(state.score.sets[1].tiebreak_points, [0, 7]);
        assert_eq!(state.score.sets_won, [1, 1]);
        assert_eq!(state.set_stats.len(), 3);
        assert_eq!(state.score.set_index(), 2);
        assert_eq!(ctl.server(), tiebreak_start.opponent());
        assert_point_conservation(state);
    }

    #[test]
    fn match_winning_game_does_not_signal_change_ends() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        let (a, b) = (Player::One, Player::Two);
        win_games(&mut ctl, a, 6);
        win_games(&mut ctl, a, 5);
        win_games(&mut ctl, b, 3);
        win_points(&mut ctl, a, 3);
        let outcome = win_points(&mut ctl, a, 1).unwrap();

        assert!(outcome.match_over);
        assert_eq!(outcome.update.game_won, Some(a));
        assert_eq!(outcome.update.match_won, Some(a));
        // 6-3 leaves an odd total, which would otherwise change ends
        assert_eq!(ctl.state().score.sets[1].games, [6, 3]);
        assert!(!outcome.update.change_ends);
    }

    #[test]
    fn decider_server_can_be_chosen_before_first_point() {
        let mut ctl = controller(FormatPreset::BestOfThreeMatchTiebreak);
        assert!(matches!(
            ctl.choose_decider_server(Player::Two),
            Err(MatchError::DeciderServerLocked)
        ));
        win_games(&mut ctl, Player::One, 6);
        win_games(&mut ctl, Player::Two, 6);
        ctl.choose_decider_server(Player::Two).unwrap();
        assert_eq!(ctl.server(), Player::Two);
        win_points(&mut ctl, Player::One, 1);
        assert_eq!(ctl.server(), Player::One);
        assert!(ctl.choose_decider_server(Player::Two).is_err());
    }

    #[test]
    fn tiebreak_server_sequence_and_end_change() {
        let mut ctl = controller(FormatPreset::ShortSets);
        for _ in 0..4 {
            win_games(&mut ctl, Player::One, 1);
            win_games(&mut ctl, Player::Two, 1);
        }
        assert!(ctl.state().score.in_set_tiebreak());
        let start = ctl.server();
        let mut servers = Vec::new();
        let mut end_changes = Vec::new();
        for i in 0..6 {
            servers.push(ctl.server());
            let winner = if i % 2 == 0 { Player::One } else { Player::Two };
            let outcome = win_points(&mut ctl, winner, 1).unwrap();
            end_changes.push(outcome.update.change_ends);
        }
        let other = start.opponent();
        assert_eq!(servers, vec![start, other, other, start, start, other]);
        assert_eq!(end_changes, vec![false, false, false, false, false, true]);
        let log = &ctl.state().log;
        assert!(log.iter().rev().take(6).all(|e| e.in_tiebreak && !e.significance.game_point));
        assert_eq!(log.last().unwrap().point_number, 6);
    }

    #[test]
    fn break_point_flag_and_credit() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        win_points(&mut ctl, Player::Two, 3);
        let outcome = ctl.apply_point(&PointEvent::double_fault(true)).unwrap();
        assert!(outcome.entry.significance.break_point);
        assert!(outcome.entry.significance.game_point);
        assert_eq!(outcome.entry.serve_type, ServeType::Second);
        assert_eq!(outcome.entry.winner, Player::Two);
        assert_eq!(outcome.update.game_won, Some(Player::Two));

        let state = ctl.state();
        assert_eq!(state.stats(Player::One).double_faults, 1);
        assert_eq!(state.stats(Player::Two).break_points_won, 1);
        assert_eq!(state.stats(Player::Two).break_points_total, 1);
        assert_eq!(state.set_stats(0, Player::Two).unwrap().break_points_won, 1);
        assert_eq!(state.log[3].point_number, 4);
    }

    #[test]
    fn undo_restores_previous_state_exactly() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        win_games(&mut ctl, Player::One, 2);
        win_points(&mut ctl, Player::Two, 2);
        let before = ctl.state().clone();
        let event = PointEvent::rally(ServeType::Second, true, RallyOutcome::Winner, Player::One)
            .with_net(Player::One);
        ctl.apply_point(&event).unwrap();
        assert_ne!(ctl.state(), &before);
        assert!(ctl.undo());
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        assert!(!ctl.undo());
        ctl.begin_point().unwrap();
        assert!(!ctl.undo());
        assert!(!ctl.point_in_progress());
        assert_eq!(ctl.history_len(), 0);
    }

    #[test]
    fn undo_during_entry_pops_twice() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        let start = ctl.state().clone();
        win_points(&mut ctl, Player::One, 1);
        let after_one = ctl.state().clone();
        win_points(&mut ctl, Player::One, 1);
        assert_eq!(ctl.history_len(), 2);

        // Mid-entry undo reverts the last completed point, not just the entry
        ctl.begin_point().unwrap();
        assert!(ctl.undo());
        assert_eq!(ctl.state(), &after_one);
        assert_eq!(ctl.history_len(), 1);

        // After completion a single pop reverts one point
        assert!(ctl.undo());
        assert_eq!(ctl.state(), &start);
    }

    #[test]
    fn end_match_mid_entry_keeps_completed_points() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        win_points(&mut ctl, Player::Two, 3);
        let completed = ctl.state().log.len();
        ctl.begin_point().unwrap();
        let state = ctl.end_match();
        assert!(state.ended_early);
        assert_eq!(state.log.len(), completed);
        assert_eq!(ctl.history_len(), 3);
        assert!(ctl.is_over());
        assert!(matches!(ctl.begin_point(), Err(MatchError::MatchOver)));
        assert!(!ctl.undo());
    }

    #[test]
    fn commit_without_begin_is_rejected() {
        let mut ctl = controller(FormatPreset::BestOfThree);
        assert!(matches!(
            ctl.commit_point(&PointEvent::ace(ServeType::First)),
            Err(MatchError::NoPointInProgress)
        ));
    }

    #[test]
    fn match_point_flag_in_straight_sets() {
        let mut ctl = controller(FormatPreset::ShortSets);
        win_games(&mut ctl, Player::One, 4);
        win_games(&mut ctl, Player::One, 3);
        let outcome = win_points(&mut ctl, Player::One, 3).unwrap();
        assert!(!outcome.entry.significance.match_point);
        let outcome = win_points(&mut ctl, Player::One, 1).unwrap();
        assert!(outcome.entry.significance.match_point);
        assert!(outcome.entry.significance.set_point);
        assert!(outcome.match_over);
        assert_eq!(ctl.state().winner(), Some(Player::One));
    }

    fn arb_event() -> impl Strategy<Value = PointEvent> {
        let player = prop_oneof![Just(Player::One), Just(Player::Two)];
        let serve = prop_oneof![Just(ServeType::None), Just(ServeType::First), Just(ServeType::Second)];
        let rally = prop_oneof![
            Just(RallyOutcome::Winner),
            Just(RallyOutcome::UnforcedError),
            Just(RallyOutcome::ForcedErrorDrawn)
        ];
        let ret = prop_oneof![
            Just(ReturnOutcome::Winner),
            Just(ReturnOutcome::UnforcedError),
            Just(ReturnOutcome::ForcedError)
        ];
        prop_oneof![
            any::<bool>().prop_map(PointEvent::double_fault),
            serve.clone().prop_map(PointEvent::ace),
            serve.clone().prop_map(PointEvent::service_winner),
            (serve.clone(), any::<bool>(), ret).prop_map(|(s, f, o)| PointEvent::returned(s, f, o)),
            (serve, any::<bool>(), rally, player.clone(), proptest::option::of(player)).prop_map(
                |(s, f, o, by, net)| {
                    let event = PointEvent::rally(s, f, o, by);
                    match net {
                        Some(p) => event.with_net(p),
                        None => event,
                    }
                }
            ),
        ]
    }

    proptest! {
        #[test]
        fn prop_points_are_conserved(
            events in proptest::collection::vec(arb_event(), 0..400),
            preset in prop_oneof![
                Just(FormatPreset::BestOfThree),
                Just(FormatPreset::BestOfThreeMatchTiebreak),
                Just(FormatPreset::ShortSets)
            ],
        ) {
            let mut ctl = controller(preset);
            for event in &events {
                if ctl.is_over() {
                    break;
                }
                ctl.apply_point(event).unwrap();
            }
            let state = ctl.state();
            let n = state.log.len() as u32;
            prop_assert_eq!(state.match_stats[0].points_won + state.match_stats[1].points_won, n);
            prop_assert_eq!(state.match_stats[0].points_played, n);
            prop_assert_eq!(state.match_stats[1].points_played, n);
            prop_assert!(state.score.sets_won.iter().all(|&w| w <= state.format.sets_to_win()));
            for (i, entry) in state.log.iter().enumerate() {
                prop_assert_eq!(entry.index, i);
            }
        }

        #[test]
        fn prop_apply_then_undo_round_trips(
            events in proptest::collection::vec(arb_event(), 1..200),
        ) {
            let mut ctl = controller(FormatPreset::BestOfThreeMatchTiebreak);
            for event in &events {
                if ctl.is_over() {
                    break;
                }
                let before = ctl.state().clone();
                ctl.apply_point(event).unwrap();
                let after = ctl.state().clone();
                prop_assert!(ctl.undo());
                prop_assert_eq!(ctl.state(), &before);
                ctl.apply_point(event).unwrap();
                prop_assert_eq!(ctl.state(), &after);
            }
        }
    }
}
