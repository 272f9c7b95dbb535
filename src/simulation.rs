use enum_map::EnumMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::player::Player;
use crate::statistics::{SimulationReport, SpinTally};
use crate::types::{Money, Seat, Spin, Wager};
use crate::wheel::{Spinner, Wheel};

/// Mixed into the seed for the players' own random choices, so they draw from a different stream
/// than the wheel.
const BETTOR_SEED_SALT: u64 = 0x5EED_B0B5_CAFE_F00D;

/// Every player's bankroll after one round. Rounds are numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub bankrolls: EnumMap<Seat, Money>,
}

/// What happened during one round: where the ball landed and who bet what.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundDetail {
    pub round: u32,
    pub spin: Spin,
    /// None for players that had stopped wagering.
    pub wagers: EnumMap<Seat, Option<Wager>>,
}

/// All four players at one wheel, played round by round.
pub struct Simulation<S: Spinner = Wheel> {
    config: SimulationConfig,
    wheel: S,
    /// Source for the players' own decisions.
    rng: StdRng,
    players: EnumMap<Seat, Player>,
    records: Vec<RoundRecord>,
    details: Vec<RoundDetail>,
    tally: SpinTally,
}

impl Simulation {
    /// Set up a run on a fair wheel. With a seed in `config`, the wheel produces the same spins as
    /// `Wheel::seeded(seed)` and the whole run is reproducible.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let (wheel, rng) = match config.seed {
            Some(seed) => (Wheel::seeded(seed), StdRng::seed_from_u64(seed ^ BETTOR_SEED_SALT)),
            None => (Wheel::new(), StdRng::from_entropy()),
        };
        Simulation::with_wheel(config, wheel, rng)
    }
}

impl<S: Spinner> Simulation<S> {
    pub fn with_wheel(config: SimulationConfig, wheel: S, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let rounds = config.rounds as usize;
        Ok(Simulation {
            config,
            wheel,
            rng,
            players: EnumMap::from_fn(|seat| Player::new(seat, config.starting_bankroll, config.base_bet)),
            records: Vec::with_capacity(rounds),
            details: Vec::with_capacity(rounds),
            tally: SpinTally::default(),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn rounds_played(&self) -> u32 {
        self.records.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.rounds_played() >= self.config.rounds
    }

    /// Spin once and settle every player's bet. Returns None once the configured number of rounds
    /// has been played.
    pub fn play_round(&mut self) -> Option<RoundRecord> {
        if self.is_finished() {
            return None;
        }

        let round = self.rounds_played() + 1;
        if round == 1 {
            info!(rounds = self.config.rounds, base_bet = self.config.base_bet,
                  bankroll = self.config.starting_bankroll, seed = ?self.config.seed,
                  policy = ?self.config.insolvency, "Starting simulation");
        }

        let spin = self.wheel.spin();
        self.tally.record(spin);
        debug!(round, %spin, "Wheel stopped");

        let mut wagers: EnumMap<Seat, Option<Wager>> = EnumMap::default();
        for (seat, player) in self.players.iter_mut() {
            let wager = player.next_wager(round, self.config.insolvency, &mut self.rng);
            if let Some(w) = wager {
                player.apply_result(w, spin);
            }
            wagers[seat] = wager;
        }

        let record = RoundRecord {
            round,
            bankrolls: EnumMap::from_fn(|seat| self.players[seat].bankroll()),
        };
        self.records.push(record);
        self.details.push(RoundDetail { round, spin, wagers });

        if self.is_finished() {
            info!(rounds = round, "Simulation complete");
        }
        Some(record)
    }

    /// Play all remaining rounds.
    pub fn run(&mut self) -> &[RoundRecord] {
        while self.play_round().is_some() {}
        &self.records
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn details(&self) -> &[RoundDetail] {
        &self.details
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            rounds: self.rounds_played(),
            starting_bankroll: self.config.starting_bankroll,
            players: EnumMap::from_fn(|seat| self.players[seat].summary()),
            tally: self.tally.clone(),
        }
    }
}

impl<S: Spinner> Iterator for Simulation<S> {
    type Item = RoundRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.play_round()
    }
}
