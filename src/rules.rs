use crate::types::{Color, Money, Pocket, POCKETS};

pub const STARTING_BANKROLL: Money = 1000;
pub const BASE_BET: Money = 10;

/// Largest bet or starting bankroll a table accepts. With at most 100_000 rounds this keeps every
/// bankroll and every running total of stakes and payouts well inside `i64`.
pub const MAX_AMOUNT: Money = 1_000_000_000;

/// Net profit per unit staked on a winning red or black bet.
pub const EVEN_MONEY_PAYOUT: Money = 1;
/// Net profit per unit staked on a winning green bet.
pub const GREEN_PAYOUT: Money = 35;

/// Red pockets of the European layout. Every other non-zero pocket is black.
pub const RED_POCKETS: [Pocket; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// What a player does when its bankroll no longer covers the stake its strategy asks for.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum InsolvencyPolicy {
    /// Stop wagering for the rest of the run.
    #[default]
    Stop,
    /// Stake whatever is left, and stop once the bankroll reaches zero.
    AllIn,
}

/// Net profit multiplier for a winning bet on `target`.
pub fn payout(target: Color) -> Money {
    match target {
        Color::Red | Color::Black => EVEN_MONEY_PAYOUT,
        Color::Green => GREEN_PAYOUT,
    }
}

/// Expected loss per unit staked for any bet this table offers. With one zero pocket every bet
/// pays as though the zero did not exist, so the edge is the same for red, black and green.
pub fn house_edge() -> f64 {
    1.0 / POCKETS as f64
}
