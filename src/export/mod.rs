//! Exports of a finished (or abandoned) match: text, JSON and CSV

pub mod snapshot;
pub mod summary;
pub mod tables;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::util::time::now_file_stamp;

pub use snapshot::{MatchSnapshot, MatchStatus};

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize match: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `<p1>_vs_<p2>_<stamp>` with characters unsafe in file names replaced
pub fn base_name(snapshot: &MatchSnapshot<'_>, stamp: &str) -> String {
    format!("{}_vs_{}_{}", snapshot.players[0], snapshot.players[1], stamp)
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' => '_',
            other => other,
        })
        .collect()
}

/// Write the summary, JSON and the three CSVs into `dir`
pub fn export_all(snapshot: &MatchSnapshot<'_>, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::io(dir, source))?;
    let base = base_name(snapshot, &now_file_stamp());
    let path = |suffix: &str| dir.join(format!("{base}{suffix}"));

    let txt = path(".txt");
    fs::write(&txt, summary::render(snapshot)).map_err(|source| ExportError::io(&txt, source))?;

    let json = path(".json");
    fs::write(&json, snapshot.to_json()?).map_err(|source| ExportError::io(&json, source))?;

    let totals = path("_match_totals.csv");
    tables::write_match_totals(snapshot, &totals)?;
    let per_set = path("_per_set_stats.csv");
    tables::write_per_set_stats(snapshot, &per_set)?;
    let points = path("_points.csv");
    tables::write_points(snapshot, &points)?;

    let written = vec![txt, json, totals, per_set, points];
    info!(match_id = %snapshot.match_id, files = written.len(), dir = %dir.display(), "Match exported");
    Ok(written)
}
