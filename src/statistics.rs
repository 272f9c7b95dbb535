use std::fmt::{Display, Formatter};

use derive_more::{Add, AddAssign};
use enum_map::EnumMap;
use strum::IntoEnumIterator;

use crate::rules::house_edge;
use crate::types::{Color, Money, POCKETS, Seat, Spin};

/// Running totals for one player.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Add, AddAssign)]
pub struct PlayerStatistics {
    pub rounds_played: u32,
    pub wins: u32,
    pub wagered: Money,
    /// Gross amount paid back on winning bets, stakes included.
    pub returned: Money,
}

impl PlayerStatistics {
    /// Fraction of played rounds that were won, 0 if the player never bet.
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds_played as f64
        }
    }

    /// Net result per unit wagered, or None if nothing was wagered.
    pub fn return_on_wagered(&self) -> Option<f64> {
        if self.wagered == 0 {
            None
        } else {
            Some((self.returned as f64 - self.wagered as f64) / self.wagered as f64)
        }
    }
}

/// How often each colour came up.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SpinTally {
    pub counts: EnumMap<Color, u64>,
}

impl SpinTally {
    pub fn record(&mut self, spin: Spin) {
        self.counts[spin.color] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Pearson's chi-squared statistic of the observed colours against a fair wheel.
    pub fn chi_squared(&self) -> f64 {
        let total = self.total() as f64;
        Color::iter()
            .map(|color| {
                let expected = total * color.pockets() as f64 / POCKETS as f64;
                let diff = self.counts[color] as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}

/// End-of-run state of one player.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSummary {
    pub bankroll: Money,
    pub stats: PlayerStatistics,
    /// Round in which the player could no longer cover its bet.
    pub stopped_at: Option<u32>,
}

pub struct SimulationReport {
    pub rounds: u32,
    pub starting_bankroll: Money,
    pub players: EnumMap<Seat, PlayerSummary>,
    pub tally: SpinTally,
}

impl SimulationReport {
    pub fn profit(&self, seat: Seat) -> i64 {
        self.players[seat].bankroll as i64 - self.starting_bankroll as i64
    }
}

impl Display for SimulationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 60;
        const TEXT_WIDTH: usize = 24;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;

        writeln!(f, "{}", "=".repeat(WIDTH))?;
        writeln!(f, "{:^WIDTH$}", format!("PLAYER STATISTICS ({} rounds)", self.rounds))?;
        writeln!(f, "{}", "=".repeat(WIDTH))?;

        for (seat, summary) in &self.players {
            writeln!(f)?;
            writeln!(f, "{}", seat.to_string().to_uppercase())?;
            writeln!(f, "{}", "-".repeat(WIDTH))?;
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "Rounds played", summary.stats.rounds_played)?;
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "Wins",
                     format!("{} ({:.1}%)", summary.stats.wins, summary.stats.win_rate() * 100.0))?;
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "Total profit/loss", format!("${:+}", self.profit(seat)))?;
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "Final balance", format!("${}", summary.bankroll))?;
            let roi = match summary.stats.return_on_wagered() {
                Some(r) => format!("{:+.2}%", r * 100.0),
                None => "n/a".to_string(),
            };
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "Return on wagered", roi)?;
            let stopped = match summary.stopped_at {
                Some(round) => format!("round {}", round),
                None => "active until end".to_string(),
            };
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "Stopped at", stopped)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        let total = self.tally.total().max(1) as f64;
        for (color, count) in &self.tally.counts {
            writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", format!("Spins landing {}", color),
                     format!("{} ({:.2}%)", count, *count as f64 / total * 100.0))?;
        }
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.3}", "Chi-squared (2 dof)", self.tally.chi_squared())?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "House edge", format!("{:.2}%", house_edge() * 100.0))?;
        write!(f, "{}", "=".repeat(WIDTH))
    }
}
