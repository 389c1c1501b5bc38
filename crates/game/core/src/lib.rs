//! Deterministic duel rules shared by the arena runtime and its frontends.
//!
//! `arena-core` defines the fighter archetypes, the armor mitigation policy and
//! the [`engine::Duel`] turn loop. Randomness is consumed through the injected
//! [`env::RandomSource`] capability and every observable effect is raised
//! through [`events::DuelObserver`], so the crate never prints or rolls dice on
//! its own.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod fighter;

pub use combat::{Mitigation, mitigate};
pub use config::DuelConfig;
pub use engine::{
    Duel, DuelError, DuelOutcome, DuelPair, DuelPhase, DuelReport, ExchangeOutcome,
    IllegalDuelStart,
};
pub use env::{PcgRandom, RandomSource, ScriptedRandom};
pub use error::{ArenaError, ErrorSeverity};
pub use events::{DuelEvent, DuelObserver, EventLog, NoopObserver};
pub use fighter::{
    Archetype, ArchetypeResource, ArchetypeState, BaseStats, DamageTaken, Fighter,
    FighterSnapshot, StatsError,
};
