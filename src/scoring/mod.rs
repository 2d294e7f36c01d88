//! Match scoring core
//!
//! Point events go in through [`MatchController`]; the read-only
//! [`MatchState`] and its point log come out for rendering and export.

pub mod classifier;
pub mod event;
pub mod format;
pub mod history;
pub mod r#match;
pub mod player;
pub mod score;
pub mod stats;
pub mod tiebreak;

pub use event::{PointEvent, PointFinish, RallyOutcome, ReturnOutcome, ServeType};
pub use format::{DeciderKind, FormatConfig, FormatPreset};
pub use player::Player;
pub use r#match::{ApplyOutcome, MatchController, MatchError, MatchInfo, MatchState, PointLogEntry};
pub use score::SetRecord;
pub use stats::PlayerStats;
