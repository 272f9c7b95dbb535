use std::fmt::{Display, Formatter};

use strum::{EnumCount, EnumIter};

/// A pocket on a single-zero wheel, 0 through 36.
pub type Pocket = u8;
pub const POCKETS: u8 = 37;
pub const GREEN_POCKET: Pocket = 0;

/// Whole units of currency. Every payout is an exact multiple of the stake.
pub type Money = u64;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, enum_map::Enum, EnumIter, EnumCount, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    pub const ALL: [Color; Color::COUNT] = [Color::Red, Color::Black, Color::Green];

    /// Number of pockets of this colour on the wheel.
    pub fn pockets(&self) -> u8 {
        match self {
            Color::Red | Color::Black => 18,
            Color::Green => 1,
        }
    }
}

/// The result of one spin of the wheel.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Spin {
    pub pocket: Pocket,
    pub color: Color,
}

impl Display for Spin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.pocket, self.color)
    }
}

/// The four players at the table, in the order their columns are exported.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, enum_map::Enum, EnumIter, EnumCount, strum::Display)]
pub enum Seat {
    RandomBot,
    GreenHunter,
    MartyRed,
    MartyBlack,
}

/// A bet placed by one player for one round.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Wager {
    pub stake: Money,
    pub target: Color,
}
