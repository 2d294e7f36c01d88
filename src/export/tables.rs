//! CSV bundle: match totals, per-set stats, point-by-point

use std::path::Path;

use crate::scoring::{Player, PlayerStats};

use super::snapshot::MatchSnapshot;
use super::ExportError;

const STAT_COLUMNS: [&str; 25] = [
    "FirstServIn",
    "FirstServAtt",
    "FirstPtsWon",
    "SecondServIn",
    "SecondServAtt",
    "SecondPtsWon",
    "Aces1",
    "Aces2",
    "SrvW1",
    "SrvW2",
    "DF",
    "RetWonV1",
    "RetWonV2",
    "RetW",
    "RetUE",
    "RetFE",
    "RallyW",
    "UE",
    "FEdrawn",
    "NetWon",
    "NetTot",
    "BPWon",
    "BPTot",
    "PtsWon",
    "PtsPlayed",
];

const POINT_COLUMNS: [&str; 12] = [
    "Idx", "Set", "Game", "TB", "Server", "ServeType", "Winner", "BP", "GP", "SP", "MP", "Event",
];

fn stat_values(s: &PlayerStats) -> [u32; 25] {
    [
        s.first_serves_in,
        s.first_serves_attempted,
        s.points_won_on_first_serve,
        s.second_serves_in,
        s.second_serves_attempted,
        s.points_won_on_second_serve,
        s.aces_first,
        s.aces_second,
        s.service_winners_first,
        s.service_winners_second,
        s.double_faults,
        s.return_points_won_vs_first,
        s.return_points_won_vs_second,
        s.return_winners,
        s.return_unforced_errors,
        s.return_forced_errors,
        s.rally_winners,
        s.unforced_errors,
        s.forced_errors_drawn,
        s.net_points_won,
        s.net_points_total,
        s.break_points_won,
        s.break_points_total,
        s.points_won,
        s.points_played,
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Y"
    } else {
        "N"
    }
}

fn open(path: &Path) -> Result<csv::Writer<std::fs::File>, ExportError> {
    csv::Writer::from_path(path).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_err(path: &Path) -> impl Fn(csv::Error) -> ExportError + '_ {
    move |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// One row per player with match totals
pub fn write_match_totals(snapshot: &MatchSnapshot<'_>, path: &Path) -> Result<(), ExportError> {
    let mut writer = open(path)?;
    let header = std::iter::once("Player").chain(STAT_COLUMNS);
    writer.write_record(header).map_err(csv_err(path))?;
    for player in Player::BOTH {
        let values = stat_values(&snapshot.match_stats[player.index()]).map(|v| v.to_string());
        let row = std::iter::once(snapshot.name(player).to_string()).chain(values);
        writer.write_record(row).map_err(csv_err(path))?;
    }
    writer.flush().map_err(|source| ExportError::io(path, source))
}

/// Two rows per set slot with points played
pub fn write_per_set_stats(snapshot: &MatchSnapshot<'_>, path: &Path) -> Result<(), ExportError> {
    let mut writer = open(path)?;
    let header = ["Set", "Player"].into_iter().chain(STAT_COLUMNS);
    writer.write_record(header).map_err(csv_err(path))?;
    for (i, pair) in snapshot.set_stats.iter().enumerate() {
        for player in Player::BOTH {
            let values = stat_values(&pair[player.index()]).map(|v| v.to_string());
            let row = [(i + 1).to_string(), snapshot.name(player).to_string()]
                .into_iter()
                .chain(values);
            writer.write_record(row).map_err(csv_err(path))?;
        }
    }
    writer.flush().map_err(|source| ExportError::io(path, source))
}

/// The point log, 1-based indices
pub fn write_points(snapshot: &MatchSnapshot<'_>, path: &Path) -> Result<(), ExportError> {
    let mut writer = open(path)?;
    writer.write_record(POINT_COLUMNS).map_err(csv_err(path))?;
    for entry in snapshot.log {
        let flags = &entry.significance;
        writer
            .write_record([
                (entry.index + 1).to_string(),
                (entry.set_index + 1).to_string(),
                (entry.game_index + 1).to_string(),
                yes_no(entry.in_tiebreak).to_string(),
                entry.server.label().to_string(),
                entry.serve_type.label().to_string(),
                entry.winner.label().to_string(),
                yes_no(flags.break_point).to_string(),
                yes_no(flags.game_point).to_string(),
                yes_no(flags.set_point).to_string(),
                yes_no(flags.match_point).to_string(),
                entry.description.clone(),
            ])
            .map_err(csv_err(path))?;
    }
    writer.flush().map_err(|source| ExportError::io(path, source))
}
