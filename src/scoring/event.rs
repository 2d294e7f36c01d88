//! Point events supplied by the caller
//!
//! A point is described by how it was served and how it finished. The winner
//! is derived from the finish, so stats and score can never disagree.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Serve in play when the point was decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeType {
    /// Not recorded
    #[default]
    None,
    First,
    Second,
}

impl ServeType {
    pub fn label(self) -> &'static str {
        match self {
            ServeType::None => "-",
            ServeType::First => "1st",
            ServeType::Second => "2nd",
        }
    }
}

/// Outcome of the return of serve, credited to the returner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnOutcome {
    Winner,
    UnforcedError,
    /// Error forced by the serve
    ForcedError,
}

/// Outcome of a rally, credited to the player it names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RallyOutcome {
    Winner,
    UnforcedError,
    /// The credited player forced the opponent into an error
    ForcedErrorDrawn,
}

/// How the point ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointFinish {
    DoubleFault,
    Ace,
    ServiceWinner,
    Return { outcome: ReturnOutcome },
    Rally { outcome: RallyOutcome, by: Player },
}

/// One point as reported by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEvent {
    pub serve: ServeType,
    /// A first-serve fault preceded the serve in play
    pub first_serve_fault: bool,
    pub finish: PointFinish,
    /// Player who came to the net during the point
    pub net: Option<Player>,
    /// Free-form text; generated from the event when absent
    pub description: Option<String>,
}

impl PointEvent {
    fn new(serve: ServeType, first_serve_fault: bool, finish: PointFinish) -> Self {
        Self {
            serve,
            first_serve_fault,
            finish,
            net: None,
            description: None,
        }
    }

    pub fn ace(serve: ServeType) -> Self {
        Self::new(serve, false, PointFinish::Ace)
    }

    pub fn service_winner(serve: ServeType) -> Self {
        Self::new(serve, false, PointFinish::ServiceWinner)
    }

    /// Double fault, optionally with the first fault on record
    pub fn double_fault(first_serve_fault: bool) -> Self {
        Self::new(ServeType::Second, first_serve_fault, PointFinish::DoubleFault)
    }

    pub fn returned(serve: ServeType, first_serve_fault: bool, outcome: ReturnOutcome) -> Self {
        Self::new(serve, first_serve_fault, PointFinish::Return { outcome })
    }

    pub fn rally(serve: ServeType, first_serve_fault: bool, outcome: RallyOutcome, by: Player) -> Self {
        Self::new(serve, first_serve_fault, PointFinish::Rally { outcome, by })
    }

    pub fn with_net(mut self, player: Player) -> Self {
        self.net = Some(player);
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Serve type recorded in the log; a double fault is always a second serve
    pub fn logged_serve(&self) -> ServeType {
        match self.finish {
            PointFinish::DoubleFault => ServeType::Second,
            _ => self.serve,
        }
    }

    /// Point winner given who served
    pub fn winner(&self, server: Player) -> Player {
        let returner = server.opponent();
        match self.finish {
            PointFinish::DoubleFault => returner,
            PointFinish::Ace | PointFinish::ServiceWinner => server,
            PointFinish::Return { outcome: ReturnOutcome::Winner } => returner,
            PointFinish::Return { .. } => server,
            PointFinish::Rally { outcome: RallyOutcome::UnforcedError, by } => by.opponent(),
            PointFinish::Rally { by, .. } => by,
        }
    }

    /// Description stored on the log entry
    pub fn describe(&self, server: Player) -> String {
        if let Some(text) = &self.description {
            return text.clone();
        }

        let mut text = String::new();
        if self.first_serve_fault {
            text.push_str("1st fault -> ");
        }
        let role = |p: Player| if p == server { "server" } else { "returner" };

        match self.finish {
            PointFinish::DoubleFault => text.push_str("double fault."),
            PointFinish::Ace => text.push_str(&Self::on_serve("Ace", self.serve)),
            PointFinish::ServiceWinner => text.push_str(&Self::on_serve("Service winner", self.serve)),
            PointFinish::Return { outcome } => {
                text.push_str(self.serve_in());
                text.push_str(match outcome {
                    ReturnOutcome::Winner => "Return winner.",
                    ReturnOutcome::UnforcedError => "Return UE.",
                    ReturnOutcome::ForcedError => "Return FE (drawn by server).",
                });
            }
            PointFinish::Rally { outcome, by } => {
                text.push_str(self.serve_in());
                text.push_str("Return in; ");
                let rally = match outcome {
                    RallyOutcome::Winner => format!("Rally: {} winner.", role(by)),
                    RallyOutcome::UnforcedError => format!("Rally: {} UE.", role(by)),
                    RallyOutcome::ForcedErrorDrawn => format!(
                        "Rally: {} FE (drawn by {}).",
                        role(by.opponent()),
                        role(by)
                    ),
                };
                text.push_str(&rally);
            }
        }
        text
    }

    fn serve_in(&self) -> &'static str {
        match self.serve {
            ServeType::None => "",
            ServeType::First => "1st in; ",
            ServeType::Second => "2nd in; ",
        }
    }

    fn on_serve(what: &str, serve: ServeType) -> String {
        match serve {
            ServeType::None => format!("{what}."),
            other => format!("{what} ({}).", other.label()),
        }
    }
}
