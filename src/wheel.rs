use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::rules::RED_POCKETS;
use crate::types::{Color, GREEN_POCKET, Pocket, POCKETS, Spin};

/// Anything that can produce a roulette result each round.
pub trait Spinner {
    fn spin(&mut self) -> Spin;
}

/// A fair single-zero wheel.
#[derive(Clone, Debug)]
pub struct Wheel<R: Rng = StdRng> {
    rng: R,
}

impl Wheel {
    /// A wheel seeded from OS entropy.
    pub fn new() -> Self {
        Wheel::from_rng(StdRng::from_entropy())
    }

    /// A wheel that always produces the same sequence of spins for the same `seed`.
    pub fn seeded(seed: u64) -> Self {
        Wheel::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Wheel::new()
    }
}

impl<R: Rng> Wheel<R> {
    pub fn from_rng(rng: R) -> Self {
        Wheel { rng }
    }
}

impl<R: Rng> Spinner for Wheel<R> {
    fn spin(&mut self) -> Spin {
        let pocket = self.rng.gen_range(0..POCKETS);
        Spin { pocket, color: color_of(pocket) }
    }
}

/// Colour of a pocket on the European layout.
pub fn color_of(pocket: Pocket) -> Color {
    if pocket == GREEN_POCKET {
        Color::Green
    } else if RED_POCKETS.contains(&pocket) {
        Color::Red
    } else {
        Color::Black
    }
}

/// A wheel that lands on a fixed list of pockets, starting over when the list runs out.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct RiggedWheel {
    pockets: Vec<Pocket>,
    next: usize,
}

#[cfg(test)]
impl RiggedWheel {
    pub fn new(pockets: Vec<Pocket>) -> Self {
        assert!(!pockets.is_empty(), "A rigged wheel needs at least one pocket");
        RiggedWheel { pockets, next: 0 }
    }
}

#[cfg(test)]
impl Spinner for RiggedWheel {
    fn spin(&mut self) -> Spin {
        let pocket = self.pockets[self.next % self.pockets.len()];
        self.next += 1;
        Spin { pocket, color: color_of(pocket) }
    }
}

/// Create a RiggedWheel that lands on the given pockets in order.
#[cfg(test)]
#[macro_export]
macro_rules! rigged {
    ( $( $pocket:expr ),* ) => {
        $crate::wheel::RiggedWheel::new(vec![$( $pocket ),*])
    };
}

#[cfg(test)]
mod tests {
    use enum_map::EnumMap;

    use crate::statistics::SpinTally;
    use crate::wheel::*;

    #[test]
    fn test_layout_colors() {
        let mut counts: EnumMap<Color, u8> = EnumMap::default();
        for pocket in 0..POCKETS {
            counts[color_of(pocket)] += 1;
        }
        assert_eq!(counts[Color::Red], 18);
        assert_eq!(counts[Color::Black], 18);
        assert_eq!(counts[Color::Green], 1);

        assert_eq!(color_of(0), Color::Green);
        assert_eq!(color_of(1), Color::Red);
        assert_eq!(color_of(2), Color::Black);
        assert_eq!(color_of(10), Color::Black);
        assert_eq!(color_of(19), Color::Red);
        assert_eq!(color_of(36), Color::Red);
    }

    #[test]
    fn test_seeded_wheels_agree() {
        let mut a = Wheel::seeded(2024);
        let mut b = Wheel::seeded(2024);
        for _ in 0..1000 {
            let spin = a.spin();
            assert_eq!(spin, b.spin());
            assert!(spin.pocket < POCKETS);
            assert_eq!(spin.color, color_of(spin.pocket));
        }
    }

    #[test]
    fn test_color_distribution() {
        // 37 * 10_000 spins, so the expected counts are 180_000 / 180_000 / 10_000.
        let mut wheel = Wheel::seeded(37);
        let mut tally = SpinTally::default();
        for _ in 0..370_000 {
            tally.record(wheel.spin());
        }

        assert_eq!(tally.total(), 370_000);
        // Chi-squared with 2 degrees of freedom, p = 0.001
        let chi_squared = tally.chi_squared();
        println!("Tally: {:?}  chi^2 = {}", tally, chi_squared);
        assert!(chi_squared < 13.816, "chi^2 = {}", chi_squared);
    }

    #[test]
    fn test_rigged_wheel_cycles() {
        let mut wheel = rigged![0, 1, 2];
        let colors: Vec<Color> = (0..6).map(|_| wheel.spin().color).collect();
        assert_eq!(colors, vec![Color::Green, Color::Red, Color::Black, Color::Green, Color::Red, Color::Black]);
    }
}
