//! Per-player counters and point attribution

use serde::{Deserialize, Serialize};

use super::event::{PointEvent, PointFinish, RallyOutcome, ReturnOutcome, ServeType};
use super::player::Player;

/// Counters kept for one player, at match level and per set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    // Serve attempts
    pub first_serves_attempted: u32,
    pub first_serves_in: u32,
    pub second_serves_attempted: u32,
    pub second_serves_in: u32,

    // Serve results
    pub aces_first: u32,
    pub aces_second: u32,
    pub service_winners_first: u32,
    pub service_winners_second: u32,
    pub double_faults: u32,
    pub points_won_on_first_serve: u32,
    pub points_won_on_second_serve: u32,

    // Return
    pub return_points_won_vs_first: u32,
    pub return_points_won_vs_second: u32,
    pub return_winners: u32,
    pub return_unforced_errors: u32,
    pub return_forced_errors: u32,

    // Rally
    pub rally_winners: u32,
    pub unforced_errors: u32,
    pub forced_errors_drawn: u32,

    // Net
    pub net_points_won: u32,
    pub net_points_total: u32,

    /// Break point chances, counted for the returner
    pub break_points_total: u32,
    pub break_points_won: u32,

    // Totals
    pub points_won: u32,
    pub points_played: u32,
}

impl PlayerStats {
    pub fn aces(&self) -> u32 {
        self.aces_first + self.aces_second
    }

    pub fn service_winners(&self) -> u32 {
        self.service_winners_first + self.service_winners_second
    }
}

/// Credits one point to the match-level and current-set counters together
pub struct StatsAggregator<'a> {
    match_level: &'a mut [PlayerStats; 2],
    set_level: &'a mut [PlayerStats; 2],
}

impl<'a> StatsAggregator<'a> {
    pub fn new(match_level: &'a mut [PlayerStats; 2], set_level: &'a mut [PlayerStats; 2]) -> Self {
        Self {
            match_level,
            set_level,
        }
    }

    fn credit(&mut self, player: Player, update: impl Fn(&mut PlayerStats)) {
        update(&mut self.match_level[player.index()]);
        update(&mut self.set_level[player.index()]);
    }

    /// Attribute a completed point served by `server`
    pub fn record_point(&mut self, server: Player, event: &PointEvent, was_break_point: bool) {
        let returner = server.opponent();
        let winner = event.winner(server);
        let serve = event.logged_serve();

        self.record_serve(server, event);

        match event.finish {
            PointFinish::DoubleFault => self.credit(server, |s| s.double_faults += 1),
            PointFinish::Ace => self.credit(server, |s| match serve {
                ServeType::First => s.aces_first += 1,
                ServeType::Second => s.aces_second += 1,
                ServeType::None => {}
            }),
            PointFinish::ServiceWinner => self.credit(server, |s| match serve {
                ServeType::First => s.service_winners_first += 1,
                ServeType::Second => s.service_winners_second += 1,
                ServeType::None => {}
            }),
            PointFinish::Return { outcome } => {
                self.credit(returner, |s| match outcome {
                    ReturnOutcome::Winner => s.return_winners += 1,
                    ReturnOutcome::UnforcedError => s.return_unforced_errors += 1,
                    ReturnOutcome::ForcedError => s.return_forced_errors += 1,
                });
                if outcome == ReturnOutcome::ForcedError {
                    self.credit(server, |s| s.forced_errors_drawn += 1);
                }
            }
            PointFinish::Rally { outcome, by } => self.credit(by, |s| match outcome {
                RallyOutcome::Winner => s.rally_winners += 1,
                RallyOutcome::UnforcedError => s.unforced_errors += 1,
                RallyOutcome::ForcedErrorDrawn => s.forced_errors_drawn += 1,
            }),
        }

        // Serve-type split of points won; a double fault earns the returner nothing here
        if event.finish != PointFinish::DoubleFault {
            if winner == server {
                self.credit(server, |s| match serve {
                    ServeType::First => s.points_won_on_first_serve += 1,
                    ServeType::Second => s.points_won_on_second_serve += 1,
                    ServeType::None => {}
                });
            } else {
                self.credit(returner, |s| match serve {
                    ServeType::First => s.return_points_won_vs_first += 1,
                    ServeType::Second => s.return_points_won_vs_second += 1,
                    ServeType::None => {}
                });
            }
        }

        if let Some(at_net) = event.net {
            let won = at_net == winner;
            self.credit(at_net, |s| {
                s.net_points_total += 1;
                if won {
                    s.net_points_won += 1;
                }
            });
        }

        if was_break_point {
            let converted = winner == returner;
            self.credit(returner, |s| {
                s.break_points_total += 1;
                if converted {
                    s.break_points_won += 1;
                }
            });
        }

        self.credit(winner, |s| s.points_won += 1);
        for player in Player::BOTH {
            self.credit(player, |s| s.points_played += 1);
        }
    }

    fn record_serve(&mut self, server: Player, event: &PointEvent) {
        if event.first_serve_fault {
            self.credit(server, |s| s.first_serves_attempted += 1);
        }
        let landed = event.finish != PointFinish::DoubleFault;
        match event.logged_serve() {
            ServeType::First => self.credit(server, |s| {
                s.first_serves_attempted += 1;
                if landed {
                    s.first_serves_in += 1;
                }
            }),
            ServeType::Second => self.credit(server, |s| {
                s.second_serves_attempted += 1;
                if landed {
                    s.second_serves_in += 1;
                }
            }),
            ServeType::None => {}
        }
    }
}
