use rand::Rng;
use tracing::{debug, info};

use crate::rules::{InsolvencyPolicy, payout};
use crate::statistics::{PlayerStatistics, PlayerSummary};
use crate::types::{Color, Money, Seat, Spin, Wager};

/// How a player picks its bet each round.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Strategy {
    /// Base bet on a colour drawn uniformly from red, black and green.
    RandomColor,
    /// Base bet on green, every round.
    GreenHunter,
    /// Double the stake on the same colour after every loss, back to the base bet after a win.
    Martingale(Color),
}

impl Strategy {
    /// The strategy each seat at the table plays.
    pub fn for_seat(seat: Seat) -> Strategy {
        match seat {
            Seat::RandomBot => Strategy::RandomColor,
            Seat::GreenHunter => Strategy::GreenHunter,
            Seat::MartyRed => Strategy::Martingale(Color::Red),
            Seat::MartyBlack => Strategy::Martingale(Color::Black),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub seat: Seat,
    pub strategy: Strategy,
    bankroll: Money,
    base_bet: Money,
    /// Stake the strategy wants next round. Only moves for Martingale players.
    current_bet: Money,
    losing_streak: u32,
    stats: PlayerStatistics,
    stopped_at: Option<u32>,
}

impl Player {
    pub fn new(seat: Seat, bankroll: Money, base_bet: Money) -> Self {
        Player {
            seat,
            strategy: Strategy::for_seat(seat),
            bankroll,
            base_bet,
            current_bet: base_bet,
            losing_streak: 0,
            stats: PlayerStatistics::default(),
            stopped_at: None,
        }
    }

    pub fn bankroll(&self) -> Money {
        self.bankroll
    }

    pub fn current_bet(&self) -> Money {
        self.current_bet
    }

    pub fn losing_streak(&self) -> u32 {
        self.losing_streak
    }

    pub fn stats(&self) -> PlayerStatistics {
        self.stats
    }

    pub fn stopped_at(&self) -> Option<u32> {
        self.stopped_at
    }

    pub fn is_active(&self) -> bool {
        self.stopped_at.is_none()
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary { bankroll: self.bankroll, stats: self.stats, stopped_at: self.stopped_at }
    }

    /// Decide this round's stake and colour. Returns None once the player has stopped, and stops
    /// the player (remembering `round`) when the bankroll can no longer cover the bet.
    pub fn next_wager<R: Rng>(&mut self, round: u32, policy: InsolvencyPolicy, rng: &mut R) -> Option<Wager> {
        if !self.is_active() {
            return None;
        }

        let stake = match policy {
            _ if self.bankroll >= self.current_bet => self.current_bet,
            InsolvencyPolicy::AllIn if self.bankroll > 0 => self.bankroll,
            _ => {
                info!(player = %self.seat, round, bankroll = self.bankroll, required = self.current_bet,
                      "Player can no longer cover its bet");
                self.stopped_at = Some(round);
                return None;
            }
        };

        let target = match self.strategy {
            Strategy::RandomColor => Color::ALL[rng.gen_range(0..Color::ALL.len())],
            Strategy::GreenHunter => Color::Green,
            Strategy::Martingale(color) => color,
        };

        Some(Wager { stake, target })
    }

    /// Settle `wager` against `spin`. Returns the net change to the bankroll.
    pub fn apply_result(&mut self, wager: Wager, spin: Spin) -> i64 {
        debug_assert!(wager.stake <= self.bankroll, "Stake exceeds bankroll");
        self.bankroll -= wager.stake;

        let won = wager.target == spin.color;
        let returned = if won {
            wager.stake + wager.stake * payout(wager.target)
        } else {
            0
        };
        self.bankroll += returned;

        self.stats += PlayerStatistics {
            rounds_played: 1,
            wins: won as u32,
            wagered: wager.stake,
            returned,
        };

        if let Strategy::Martingale(_) = self.strategy {
            if won {
                self.losing_streak = 0;
                self.current_bet = self.base_bet;
            } else {
                self.losing_streak += 1;
                self.current_bet = self.current_bet.saturating_mul(2);
            }
        }

        let net = returned as i64 - wager.stake as i64;
        debug!(player = %self.seat, stake = wager.stake, target = %wager.target, %spin, net, bankroll = self.bankroll,
               "Settled wager");
        net
    }
}
