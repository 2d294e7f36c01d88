//! Console command grammar
//!
//! One command per line. Points are entered as a compact spec:
//!
//! ```text
//! p ace1                 ace on a first serve
//! p df1                  double fault, first fault on record
//! p f2nd w2 net=1        second serve in, P2 rally winner, P1 came in
//! p 1st rue -- framed it return unforced error with a note
//! ```

use std::str::FromStr;

use crate::scoring::{Player, PointEvent, RallyOutcome, ReturnOutcome, ServeType};

/// Parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a point (commits a point opened with `begin`)
    Point(PointEvent),
    /// Open a point for entry; `undo` while open discards it and the previous point
    Begin,
    Undo,
    Stats(StatsView),
    Log,
    /// Choose who opens the deciding match tiebreak
    Server(Player),
    Export,
    /// Finish the match now
    End,
    Help,
    Quit,
}

/// Which stats table to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsView {
    /// Both players, match totals
    Match,
    /// One player, match totals
    Player(Player),
    /// Both players, one set (0-based)
    Set(usize),
}

/// Command parse errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {what}: {value:?}")]
    InvalidArgument { what: &'static str, value: String },
}

impl CommandError {
    fn invalid(what: &'static str, value: &str) -> Self {
        Self::InvalidArgument {
            what,
            value: value.to_string(),
        }
    }
}

pub const HELP: &str = "\
Commands:
  p, point <spec>     record a point
  begin               open a point (undo then also drops the previous point)
  undo                undo the last point
  stats [p1|p2|set N] match totals, one player, or one set
  log                 point-by-point log
  server <1|2>        who serves first in the match tiebreak
  export              write txt/json/csv files
  end                 end the match now
  help                this text
  quit                leave

Point spec:
  ace1 ace2 sw1 sw2 df df1
  <serve> <finish> [net=1|2] [-- note]
    serve:  1st 2nd f2nd (fault, then 2nd in) none
    finish: rw rue rfe (return winner / unforced / forced error)
            w1 w2 ue1 ue2 fe1 fe2 (rally, credited to P1 or P2)";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "p" | "point" => return parse_point(rest).map(Command::Point),
            "stats" | "s" => return parse_stats(rest).map(Command::Stats),
            "server" => {
                let arg = rest.split_whitespace().next().ok_or(CommandError::MissingArgument("player"))?;
                return parse_player(arg).map(Command::Server);
            }
            "begin" | "b" => Command::Begin,
            "undo" | "u" => Command::Undo,
            "log" | "l" => Command::Log,
            "export" | "x" => Command::Export,
            "end" => Command::End,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if rest.is_empty() {
            Ok(command)
        } else {
            Err(CommandError::invalid("argument", rest))
        }
    }
}

fn parse_player(token: &str) -> Result<Player, CommandError> {
    match token.to_ascii_lowercase().as_str() {
        "1" | "p1" => Ok(Player::One),
        "2" | "p2" => Ok(Player::Two),
        _ => Err(CommandError::invalid("player", token)),
    }
}

fn parse_stats(rest: &str) -> Result<StatsView, CommandError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(StatsView::Match),
        ["set", n] | [n] if n.parse::<usize>().is_ok() => match n.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(StatsView::Set(n - 1)),
            _ => Err(CommandError::invalid("set number", n)),
        },
        ["set"] => Err(CommandError::MissingArgument("set number")),
        [who] => parse_player(who).map(StatsView::Player),
        _ => Err(CommandError::invalid("stats view", rest)),
    }
}

/// Parse a point spec into an event
pub fn parse_point(rest: &str) -> Result<PointEvent, CommandError> {
    let (spec, note) = match rest.split_once("--") {
        Some((spec, note)) => (spec, Some(note.trim())),
        None => (rest, None),
    };
    let mut tokens = spec.split_whitespace();
    let first = tokens.next().ok_or(CommandError::MissingArgument("point spec"))?;

    let mut event = match first.to_ascii_lowercase().as_str() {
        "ace1" => PointEvent::ace(ServeType::First),
        "ace2" => PointEvent::ace(ServeType::Second),
        "sw1" => PointEvent::service_winner(ServeType::First),
        "sw2" => PointEvent::service_winner(ServeType::Second),
        "df" => PointEvent::double_fault(false),
        "df1" => PointEvent::double_fault(true),
        serve => {
            let (serve, fault) = parse_serve(serve)?;
            let finish = tokens.next().ok_or(CommandError::MissingArgument("point finish"))?;
            parse_finish(serve, fault, finish)?
        }
    };

    for token in tokens {
        match token.split_once('=') {
            Some(("net", who)) => event = event.with_net(parse_player(who)?),
            _ => return Err(CommandError::invalid("point option", token)),
        }
    }

    match note {
        Some(text) if !text.is_empty() => Ok(event.with_description(text)),
        _ => Ok(event),
    }
}

fn parse_serve(token: &str) -> Result<(ServeType, bool), CommandError> {
    match token {
        "1st" | "1" => Ok((ServeType::First, false)),
        "2nd" | "2" => Ok((ServeType::Second, false)),
        "f2nd" => Ok((ServeType::Second, true)),
        "none" | "-" => Ok((ServeType::None, false)),
        _ => Err(CommandError::invalid("serve", token)),
    }
}

fn parse_finish(serve: ServeType, fault: bool, token: &str) -> Result<PointEvent, CommandError> {
    let token = token.to_ascii_lowercase();
    let returned = |outcome| Ok(PointEvent::returned(serve, fault, outcome));
    match token.as_str() {
        "rw" => return returned(ReturnOutcome::Winner),
        "rue" => return returned(ReturnOutcome::UnforcedError),
        "rfe" => return returned(ReturnOutcome::ForcedError),
        _ => {}
    }

    let (kind, by) = if let Some(kind) = token.strip_suffix('1') {
        (kind, Player::One)
    } else if let Some(kind) = token.strip_suffix('2') {
        (kind, Player::Two)
    } else {
        return Err(CommandError::invalid("point finish", &token));
    };
    let outcome = match kind {
        "w" => RallyOutcome::Winner,
        "ue" => RallyOutcome::UnforcedError,
        "fe" => RallyOutcome::ForcedErrorDrawn,
        _ => return Err(CommandError::invalid("point finish", &token)),
    };
    Ok(PointEvent::rally(serve, fault, outcome, by))
}
