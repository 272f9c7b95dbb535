//! Four betting strategies playing European roulette until the house edge catches up with them.

pub mod config;
pub mod export;
pub mod player;
pub mod rules;
pub mod simulation;
pub mod statistics;
pub mod types;
pub mod wheel;
