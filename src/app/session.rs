//! Line-oriented console session owning one match

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::export::{self, summary, MatchSnapshot};
use crate::scoring::{
    ApplyOutcome, DeciderKind, FormatConfig, MatchController, MatchInfo, Player, PointEvent,
};

use super::command::{Command, StatsView, HELP};
use super::scoreboard::Scoreboard;

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Console session: parses commands, drives the controller, prints views
pub struct Session<W: Write> {
    controller: MatchController,
    export_dir: PathBuf,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: &Config, out: W) -> Self {
        let [player1, player2] = &config.player_names;
        let info = MatchInfo::new(player1.as_str(), player2.as_str(), config.location.as_str());
        let controller = MatchController::new(info, FormatConfig::for_preset(config.format), config.first_server);
        Self {
            controller,
            export_dir: config.export_dir.clone(),
            out,
        }
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        let state = self.controller.state();
        let intro = format!(
            "{} vs {}  ({})\nType `help` for commands.\n",
            state.info.name(Player::One),
            state.info.name(Player::Two),
            describe_format(&state.format)
        );
        writeln!(self.out, "{intro}")?;
        self.print_scoreboard()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.handle(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    debug!(input = %line, error = %e, "Rejected command");
                    writeln!(self.out, "{e}")?;
                }
            }
        }

        info!(match_id = %self.controller.state().info.id, "Session closed");
        Ok(())
    }

    /// Execute one command
    pub fn handle(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Point(event) => self.record_point(&event)?,
            Command::Begin => match self.controller.begin_point() {
                Ok(()) => {
                    let server = self.name(self.controller.server());
                    writeln!(self.out, "Point open, {server} serving.")?;
                }
                Err(e) => writeln!(self.out, "{e}")?,
            },
            Command::Undo => {
                if self.controller.undo() {
                    let left = self.controller.history_len();
                    writeln!(self.out, "Undid last point ({left} more can be undone).")?;
                    self.print_scoreboard()?;
                } else {
                    writeln!(self.out, "Nothing to undo.")?;
                }
            }
            Command::Stats(view) => self.print_stats(view)?,
            Command::Log => self.print_log()?,
            Command::Server(player) => match self.controller.choose_decider_server(player) {
                Ok(()) => {
                    let name = self.name(player);
                    writeln!(self.out, "{name} serves first in the match tiebreak.")?;
                    self.print_scoreboard()?;
                }
                Err(e) => writeln!(self.out, "{e}")?,
            },
            Command::Export => self.export()?,
            Command::End => {
                if self.controller.state().is_finished() {
                    writeln!(self.out, "The match is already over.")?;
                } else {
                    self.controller.end_match();
                    writeln!(self.out, "Match ended.")?;
                    self.print_result()?;
                }
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {
                if !self.controller.state().is_finished() {
                    warn!(
                        match_id = %self.controller.state().info.id,
                        points = self.controller.state().log.len(),
                        "Leaving an unfinished match"
                    );
                }
                writeln!(self.out, "Goodbye.")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn name(&self, player: Player) -> String {
        self.controller.state().info.name(player).to_string()
    }

    fn record_point(&mut self, event: &PointEvent) -> anyhow::Result<()> {
        let result = if self.controller.point_in_progress() {
            self.controller.commit_point(event)
        } else {
            self.controller.apply_point(event)
        };
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(());
            }
        };

        self.print_outcome(&outcome)?;
        if outcome.match_over {
            self.print_result()?;
        } else {
            self.print_scoreboard()?;
        }
        Ok(())
    }

    fn print_outcome(&mut self, outcome: &ApplyOutcome) -> anyhow::Result<()> {
        let entry = &outcome.entry;
        let update = &outcome.update;
        let names = self.controller.state().info.player_names.clone();
        let name = |p: Player| names[p.index()].as_str();

        writeln!(self.out, "Point {}: {}", name(entry.winner), entry.description)?;
        if entry.significance.match_point {
            writeln!(self.out, "(was match point)")?;
        } else if entry.significance.set_point {
            writeln!(self.out, "(was set point)")?;
        } else if entry.significance.break_point {
            writeln!(self.out, "(was break point)")?;
        }

        if let Some(player) = update.game_won {
            writeln!(self.out, "Game {}.", name(player))?;
        }
        if let Some((set_index, player)) = update.set_closed {
            let games = self
                .controller
                .state()
                .score
                .sets
                .get(set_index)
                .map(summary::set_score)
                .unwrap_or_default();
            writeln!(self.out, "Set {} to {} ({games}).", set_index + 1, name(player))?;
        }
        if update.set_tiebreak_started {
            writeln!(self.out, "Tiebreak.")?;
        }
        if update.match_tiebreak_started {
            let server = self.name(self.controller.server());
            writeln!(
                self.out,
                "Match tiebreak. {server} serves first unless changed with `server 1|2`."
            )?;
        }
        if update.change_ends {
            writeln!(self.out, "--- Change ends ---")?;
        }
        Ok(())
    }

    fn print_scoreboard(&mut self) -> anyhow::Result<()> {
        let board = Scoreboard::new(self.controller.state(), Utc::now()).to_string();
        writeln!(self.out, "{board}")?;
        Ok(())
    }

    fn print_result(&mut self) -> anyhow::Result<()> {
        let state = self.controller.state();
        let mut text = String::new();
        match state.winner() {
            Some(winner) => {
                text.push_str(&format!(
                    "Match finished! {} wins {}-{}.\n",
                    state.info.name(winner),
                    state.score.sets_won[winner.index()],
                    state.score.sets_won[winner.opponent().index()]
                ));
            }
            None => text.push_str("Final score so far:\n"),
        }
        for (i, set) in state.score.sets.iter().enumerate() {
            text.push_str(&format!("  Set {}: {}\n", i + 1, summary::set_score(set)));
        }
        text.push_str("Use `stats`, `log` or `export`, then `quit`.");
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn print_stats(&mut self, view: StatsView) -> anyhow::Result<()> {
        let state = self.controller.state();
        let names = [state.info.name(Player::One), state.info.name(Player::Two)];
        let text = match view {
            StatsView::Match => {
                summary::side_by_side(names, [state.stats(Player::One), state.stats(Player::Two)])
            }
            StatsView::Player(player) => summary::stats_block(
                &format!("{} (Match Totals)", names[player.index()]),
                state.stats(player),
            ),
            StatsView::Set(set_index) => {
                match (state.set_stats(set_index, Player::One), state.set_stats(set_index, Player::Two)) {
                    (Some(one), Some(two)) => format!(
                        "Set {}\n{}",
                        set_index + 1,
                        summary::side_by_side(names, [one, two])
                    ),
                    _ => format!("No stats for set {} yet.", set_index + 1),
                }
            }
        };
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn print_log(&mut self) -> anyhow::Result<()> {
        let state = self.controller.state();
        if state.log.is_empty() {
            writeln!(self.out, "No points recorded yet.")?;
            return Ok(());
        }
        let names = [state.info.name(Player::One), state.info.name(Player::Two)];
        let mut text = String::from(summary::LOG_HEADER);
        for entry in &state.log {
            text.push('\n');
            text.push_str(&summary::log_line(entry, names));
        }
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn export(&mut self) -> anyhow::Result<()> {
        let snapshot = MatchSnapshot::capture(self.controller.state());
        match export::export_all(&snapshot, &self.export_dir) {
            Ok(paths) => {
                writeln!(self.out, "Saved:")?;
                for path in paths {
                    writeln!(self.out, "  {}", path.display())?;
                }
            }
            Err(e) => {
                error!(error = %e, dir = %self.export_dir.display(), "Export failed");
                writeln!(self.out, "Export failed: {e}")?;
            }
        }
        Ok(())
    }
}

fn describe_format(format: &FormatConfig) -> String {
    let mut text = format!(
        "best of {} sets to {}, tiebreak at {}-{}",
        format.best_of_sets, format.games_to_win_set, format.tiebreak_at_games, format.tiebreak_at_games
    );
    if format.decider == DeciderKind::MatchTiebreak10 {
        text.push_str(&format!(", deciding tiebreak to {}", format.decider_tiebreak_points));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use crate::scoring::FormatPreset;

    fn config(export_dir: PathBuf) -> Config {
        Config {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            player_names: ["Ann".to_string(), "Bo".to_string()],
            location: "Court 1".to_string(),
            format: FormatPreset::BestOfThree,
            first_server: Player::One,
            export_dir,
        }
    }

    fn run(script: &str) -> (Session<Vec<u8>>, String) {
        let mut session = Session::new(&config(PathBuf::from(".")), Vec::new());
        session.run(script.as_bytes()).unwrap();
        let text = String::from_utf8(session.out.clone()).unwrap();
        (session, text)
    }

    #[test]
    fn records_points_and_announces_game() {
        let (session, text) = run("p ace1\np 1st rue\np sw2\np 1st w1 net=1\nquit\n");
        let state = session.controller().state();
        assert_eq!(state.log.len(), 4);
        assert_eq!(state.score.current_set().games, [1, 0]);
        assert!(text.contains("Point Ann: Ace (1st)."));
        assert!(text.contains("Game Ann."));
        assert!(text.contains("--- Change ends ---"));
        assert!(text.ends_with("Goodbye.\n"));
    }

    #[test]
    fn bad_lines_do_not_stop_the_session() {
        let (session, text) = run("p 3rd w1\nfly\n\np df1\n");
        assert_eq!(session.controller().state().log.len(), 1);
        assert!(text.contains("Invalid serve: \"3rd\""));
        assert!(text.contains("Unknown command: fly"));
        assert!(text.contains("Point Bo: 1st fault -> double fault."));
    }

    #[test]
    fn begin_then_undo_drops_previous_point() {
        let (session, text) = run("p ace1\np ace1\nbegin\nundo\n");
        let ctl = session.controller();
        assert_eq!(ctl.state().log.len(), 1);
        assert!(!ctl.point_in_progress());
        assert!(text.contains("Point open, Ann serving."));
        assert!(text.contains("Undid last point (1 more can be undone)."));
    }

    #[test]
    fn end_blocks_points_and_undo() {
        let (session, text) = run("p ace1\nend\np ace1\nundo\nend\n");
        assert_eq!(session.controller().state().log.len(), 1);
        assert!(text.contains("Match ended."));
        assert!(text.contains("The match is over"));
        assert!(text.contains("Nothing to undo."));
        assert!(text.contains("The match is already over."));
    }

    #[test]
    fn stats_and_log_views() {
        let (_, text) = run("p ace1\nstats\nstats p2\nstats set 2\nlog\n");
        assert!(text.contains("Aces (1st/2nd): 1 (1 / 0)"));
        assert!(text.contains("Bo (Match Totals)"));
        assert!(text.contains("No stats for set 2 yet."));
        assert!(text.contains(summary::LOG_HEADER));
        assert!(text.contains("1 | 1 | 1 | N | Ann | 1st | Ann |"));
    }

    #[test]
    fn decider_server_outside_match_tiebreak_is_refused() {
        let (_, text) = run("server 2\n");
        assert!(text.contains("The deciding tiebreak server can only be chosen"));
    }

    #[test]
    fn export_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(&config(dir.path().to_path_buf()), Vec::new());
        session.run("p ace1\nexport\n".as_bytes()).unwrap();
        let text = String::from_utf8(session.out).unwrap();
        assert!(text.contains("Saved:"));
        let written = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(written, 5);
    }
}
