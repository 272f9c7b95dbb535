use std::ops::RangeInclusive;

use thiserror::Error;

use crate::rules::{BASE_BET, InsolvencyPolicy, MAX_AMOUNT, STARTING_BANKROLL};
use crate::types::Money;

pub const ROUNDS_ALLOWED: RangeInclusive<u32> = 1..=100_000;
pub const DEFAULT_ROUNDS: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round count {rounds} is outside {min}..={max}")]
    RoundsOutOfRange { rounds: u32, min: u32, max: u32 },
    #[error("bet size must be positive")]
    ZeroBet,
    #[error("starting bankroll must be positive")]
    ZeroBankroll,
    #[error("{what} {value} exceeds the table limit of {max}")]
    AmountTooLarge { what: &'static str, value: Money, max: Money },
    #[error("bet size {bet} exceeds the starting bankroll {bankroll}")]
    BetExceedsBankroll { bet: Money, bankroll: Money },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rounds: u32,
    pub base_bet: Money,
    pub starting_bankroll: Money,
    /// Fixes every random draw of the run when set.
    pub seed: Option<u64>,
    pub insolvency: InsolvencyPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            rounds: DEFAULT_ROUNDS,
            base_bet: BASE_BET,
            starting_bankroll: STARTING_BANKROLL,
            seed: None,
            insolvency: InsolvencyPolicy::Stop,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ROUNDS_ALLOWED.contains(&self.rounds) {
            return Err(ConfigError::RoundsOutOfRange {
                rounds: self.rounds,
                min: *ROUNDS_ALLOWED.start(),
                max: *ROUNDS_ALLOWED.end(),
            });
        }
        if self.base_bet == 0 {
            return Err(ConfigError::ZeroBet);
        }
        if self.starting_bankroll == 0 {
            return Err(ConfigError::ZeroBankroll);
        }
        if self.starting_bankroll > MAX_AMOUNT {
            return Err(ConfigError::AmountTooLarge { what: "starting bankroll", value: self.starting_bankroll, max: MAX_AMOUNT });
        }
        if self.base_bet > MAX_AMOUNT {
            return Err(ConfigError::AmountTooLarge { what: "bet size", value: self.base_bet, max: MAX_AMOUNT });
        }
        if self.base_bet > self.starting_bankroll {
            return Err(ConfigError::BetExceedsBankroll { bet: self.base_bet, bankroll: self.starting_bankroll });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.rounds, 100);
        assert_eq!(config.base_bet, 10);
        assert_eq!(config.starting_bankroll, 1000);
    }

    #[test]
    fn test_invalid_configs() {
        let base = SimulationConfig::default();

        assert_eq!(
            SimulationConfig { rounds: 0, ..base }.validate(),
            Err(ConfigError::RoundsOutOfRange { rounds: 0, min: 1, max: 100_000 })
        );
        assert!(SimulationConfig { rounds: 100_001, ..base }.validate().is_err());
        assert_eq!(SimulationConfig { base_bet: 0, ..base }.validate(), Err(ConfigError::ZeroBet));
        assert_eq!(SimulationConfig { starting_bankroll: 0, ..base }.validate(), Err(ConfigError::ZeroBankroll));
        assert_eq!(
            SimulationConfig { base_bet: 2000, ..base }.validate(),
            Err(ConfigError::BetExceedsBankroll { bet: 2000, bankroll: 1000 })
        );

        assert!(SimulationConfig { rounds: 1, ..base }.validate().is_ok());
        assert!(SimulationConfig { base_bet: 1000, ..base }.validate().is_ok());
    }

    #[test]
    fn test_amounts_above_table_limit() {
        let base = SimulationConfig::default();

        assert_eq!(
            SimulationConfig { rounds: 1, base_bet: 10u64.pow(18), starting_bankroll: 10u64.pow(18), ..base }.validate(),
            Err(ConfigError::AmountTooLarge { what: "starting bankroll", value: 10u64.pow(18), max: MAX_AMOUNT })
        );
        assert_eq!(
            SimulationConfig { base_bet: 1, starting_bankroll: u64::MAX, ..base }.validate(),
            Err(ConfigError::AmountTooLarge { what: "starting bankroll", value: u64::MAX, max: MAX_AMOUNT })
        );
        assert_eq!(
            SimulationConfig { base_bet: MAX_AMOUNT + 1, starting_bankroll: MAX_AMOUNT, ..base }.validate(),
            Err(ConfigError::AmountTooLarge { what: "bet size", value: MAX_AMOUNT + 1, max: MAX_AMOUNT })
        );
        assert!(SimulationConfig { base_bet: MAX_AMOUNT, starting_bankroll: MAX_AMOUNT, ..base }.validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = SimulationConfig { rounds: 0, ..SimulationConfig::default() }.validate().unwrap_err();
        assert_eq!(err.to_string(), "round count 0 is outside 1..=100000");
    }
}
