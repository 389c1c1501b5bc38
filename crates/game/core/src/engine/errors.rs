//! Error types for the duel engine.

use crate::error::{ArenaError, ErrorSeverity};

/// Reasons a duel refuses to start. Checked before any fighter is touched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IllegalDuelStart {
    #[error("a duel needs exactly two fighters (got {supplied})")]
    WrongFighterCount { supplied: usize },

    #[error("{name} cannot enter a duel with {health} health")]
    AlreadyDefeated { name: String, health: f32 },
}

/// Errors surfaced while starting or advancing a duel.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelError {
    #[error("illegal duel start: {0}")]
    IllegalStart(#[from] IllegalDuelStart),

    #[error("duel already concluded")]
    AlreadyConcluded,

    #[error("duel still undecided after {limit} exchanges")]
    ExchangeLimit { limit: u32 },
}

impl ArenaError for DuelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IllegalStart(_) => ErrorSeverity::Validation,
            Self::AlreadyConcluded => ErrorSeverity::Recoverable,
            Self::ExchangeLimit { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IllegalStart(IllegalDuelStart::WrongFighterCount { .. }) => {
                "DUEL_WRONG_FIGHTER_COUNT"
            }
            Self::IllegalStart(IllegalDuelStart::AlreadyDefeated { .. }) => {
                "DUEL_FIGHTER_DEFEATED"
            }
            Self::AlreadyConcluded => "DUEL_ALREADY_CONCLUDED",
            Self::ExchangeLimit { .. } => "DUEL_EXCHANGE_LIMIT",
        }
    }
}
