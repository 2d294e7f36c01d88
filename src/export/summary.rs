//! Plain-text match summary

use std::fmt::Write;

use crate::scoring::{DeciderKind, Player, PlayerStats, PointLogEntry, SetRecord};
use crate::util::ratio::{percent, ratio_with_percent};

use super::snapshot::{MatchSnapshot, MatchStatus};

/// `6-4`, `7-6 (TB 7-5)`
pub fn set_score(set: &SetRecord) -> String {
    let mut text = format!("{}-{}", set.games[0], set.games[1]);
    if set.tiebreak_played && set.finished {
        let _ = write!(text, " (TB {}-{})", set.tiebreak_points[0], set.tiebreak_points[1]);
    }
    text
}

/// Labelled lines of one player's counters, in display order
pub fn stat_lines(s: &PlayerStats) -> Vec<(&'static str, String)> {
    vec![
        ("First serve", ratio_with_percent(s.first_serves_in, s.first_serves_attempted)),
        ("1st pts won", ratio_with_percent(s.points_won_on_first_serve, s.first_serves_in)),
        ("Second serve", ratio_with_percent(s.second_serves_in, s.second_serves_attempted)),
        ("2nd pts won", ratio_with_percent(s.points_won_on_second_serve, s.second_serves_in)),
        (
            "Aces (1st/2nd)",
            format!("{} ({} / {})", s.aces(), s.aces_first, s.aces_second),
        ),
        (
            "Service winners",
            format!(
                "{} ({} / {})",
                s.service_winners(),
                s.service_winners_first,
                s.service_winners_second
            ),
        ),
        ("Double faults", s.double_faults.to_string()),
        ("Return vs 1st won", s.return_points_won_vs_first.to_string()),
        ("Return vs 2nd won", s.return_points_won_vs_second.to_string()),
        (
            "Return W/UE/FE",
            format!(
                "{} / {} / {}",
                s.return_winners, s.return_unforced_errors, s.return_forced_errors
            ),
        ),
        ("Rally winners", s.rally_winners.to_string()),
        ("Unforced errors", s.unforced_errors.to_string()),
        ("Forced drawn", s.forced_errors_drawn.to_string()),
        ("Net points", ratio_with_percent(s.net_points_won, s.net_points_total)),
        ("Break points", format!("{}/{}", s.break_points_won, s.break_points_total)),
        ("Total points", ratio_with_percent(s.points_won, s.points_played)),
    ]
}

/// Titled block of one player's stats
pub fn stats_block(title: &str, stats: &PlayerStats) -> String {
    let mut out = format!("{title}\n{}\n", "-".repeat(40));
    for (label, value) in stat_lines(stats) {
        let _ = writeln!(out, "  {:<18} {value}", format!("{label}:"));
    }
    out
}

/// Two players' stats in columns
pub fn side_by_side(names: [&str; 2], stats: [&PlayerStats; 2]) -> String {
    const WIDTH: usize = 34;
    let mut out = format!("{:<WIDTH$}   {:<WIDTH$}\n", names[0], names[1]);
    let _ = writeln!(out, "{:<WIDTH$}   {:<WIDTH$}", "-".repeat(32), "-".repeat(32));
    for ((label, a), (_, b)) in stat_lines(stats[0]).into_iter().zip(stat_lines(stats[1])) {
        let left = format!("{label}: {a}");
        let right = format!("{label}: {b}");
        let _ = writeln!(out, "{left:<WIDTH$}   {right:<WIDTH$}");
    }
    out
}

/// `# | Set | Game | TB | Server | Serve | Winner | BP/GP/SP/MP | Event` row
pub fn log_line(entry: &PointLogEntry, names: [&str; 2]) -> String {
    let flags = &entry.significance;
    let mut marks = Vec::new();
    for (on, mark) in [
        (flags.break_point, "BP"),
        (flags.game_point, "GP"),
        (flags.set_point, "SP"),
        (flags.match_point, "MP"),
    ] {
        if on {
            marks.push(mark);
        }
    }
    format!(
        "{} | {} | {} | {} | {} | {} | {} | {} | {}",
        entry.index + 1,
        entry.set_index + 1,
        entry.game_index + 1,
        if entry.in_tiebreak { "Y" } else { "N" },
        names[entry.server.index()],
        entry.serve_type.label(),
        names[entry.winner.index()],
        marks.join(" "),
        entry.description
    )
}

pub const LOG_HEADER: &str = "# | Set | Game | TB | Server | Serve | Winner | BP/GP/SP/MP | Event";

/// Full text summary: result, per-match and per-set stats, point log
pub fn render(snapshot: &MatchSnapshot<'_>) -> String {
    let names = [snapshot.name(Player::One), snapshot.name(Player::Two)];
    let format = snapshot.format;
    let mut out = String::from("Match Summary\n=============\n");

    let _ = writeln!(out, "Players: {} vs {}", names[0], names[1]);
    let _ = writeln!(out, "Location: {}", snapshot.location);
    let _ = write!(
        out,
        "Format: Best-of-{}; sets to {} (TB{} at {}-{})",
        format.best_of_sets,
        format.games_to_win_set,
        format.set_tiebreak_points,
        format.tiebreak_at_games,
        format.tiebreak_at_games
    );
    if format.decider == DeciderKind::MatchTiebreak10 {
        let _ = write!(out, "; deciding TB{}", format.decider_tiebreak_points);
    }
    out.push('\n');

    let result = match snapshot.status {
        MatchStatus::Won { winner } => format!(
            "{} wins {}-{}",
            names[winner.index()],
            snapshot.sets_won[winner.index()],
            snapshot.sets_won[winner.opponent().index()]
        ),
        MatchStatus::EndedEarly => "Ended before completion".to_string(),
        MatchStatus::InProgress => "In progress".to_string(),
    };
    let _ = writeln!(out, "Result: {result}");

    out.push_str("\nSet Scores:\n");
    for (i, set) in snapshot.sets.iter().enumerate() {
        let _ = writeln!(out, "  Set {}: {}", i + 1, set_score(set));
    }

    for player in Player::BOTH {
        out.push('\n');
        out.push_str(&stats_block(
            &format!("Player: {} (Match Totals)", names[player.index()]),
            &snapshot.match_stats[player.index()],
        ));
    }

    out.push_str("\nPer-set stats\n-------------\n");
    for (i, pair) in snapshot.set_stats.iter().enumerate() {
        if pair[0].points_played == 0 {
            continue;
        }
        let _ = writeln!(out, "Set {}:", i + 1);
        for player in Player::BOTH {
            out.push_str(&stats_block(&format!("  {}", names[player.index()]), &pair[player.index()]));
        }
    }

    let _ = writeln!(out, "\nPoint-by-point log\n-------------------\n{LOG_HEADER}");
    for entry in snapshot.log {
        out.push_str(&log_line(entry, names));
        out.push('\n');
    }

    let total = snapshot.log.len() as u32;
    let won = snapshot.match_stats[0].points_won;
    let _ = writeln!(out, "\n{} won {} of {} points ({})", names[0], won, total, percent(won, total));
    out
}
