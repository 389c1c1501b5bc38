//! Duel turn loop.
//!
//! A [`Duel`] owns exactly two fighter instances and alternates their attacks
//! in a fixed order until at least one of them is defeated. Every mutation
//! flows through [`Duel::step`], one exchange at a time; [`Duel::run`] simply
//! repeats it.

mod errors;

pub use errors::{DuelError, IllegalDuelStart};

use arrayvec::ArrayVec;
use tracing::debug;

use crate::config::DuelConfig;
use crate::env::RandomSource;
use crate::events::DuelObserver;
use crate::fighter::Fighter;

/// The pair of instances a session hands to a duel: empty, or exactly two.
pub type DuelPair = ArrayVec<Fighter, 2>;

/// Lifecycle of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelPhase {
    /// No fighters supplied yet.
    Idle,
    InProgress,
    Concluded,
}

/// How a duel ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelOutcome {
    /// `winner_slot` is the winner's position in the duel (0 opened every
    /// exchange). Names alone can collide.
    Victory {
        winner: String,
        loser: String,
        winner_slot: usize,
    },
    /// Both fighters ended at or below zero health.
    Draw,
}

impl DuelOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Victory { winner, .. } => Some(winner),
            Self::Draw => None,
        }
    }

    pub fn winner_slot(&self) -> Option<usize> {
        match self {
            Self::Victory { winner_slot, .. } => Some(*winner_slot),
            Self::Draw => None,
        }
    }
}

/// Result of a single exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Both fighters are still standing.
    Continue,
    Concluded(DuelOutcome),
}

/// Everything a finished duel hands back to its caller.
#[derive(Clone, Debug, PartialEq)]
pub struct DuelReport {
    pub outcome: DuelOutcome,
    pub exchanges: u32,
    pub fighters: [Fighter; 2],
}

impl DuelReport {
    pub fn winner(&self) -> Option<&Fighter> {
        self.fighters.get(self.outcome.winner_slot()?)
    }

    pub fn into_fighters(self) -> [Fighter; 2] {
        self.fighters
    }
}

/// One fight between two fighter instances.
///
/// The first fighter supplied opens every exchange. Turn order never changes
/// once the duel has started.
#[derive(Clone, Debug)]
pub struct Duel {
    fighters: [Fighter; 2],
    phase: DuelPhase,
    exchanges: u32,
    outcome: Option<DuelOutcome>,
    config: DuelConfig,
}

impl Duel {
    /// Starts a duel with the default configuration.
    pub fn new(fighters: impl IntoIterator<Item = Fighter>) -> Result<Self, DuelError> {
        Self::with_config(fighters, DuelConfig::default())
    }

    /// Starts a duel. Fails unless exactly two fighters with positive health
    /// are supplied.
    pub fn with_config(
        fighters: impl IntoIterator<Item = Fighter>,
        config: DuelConfig,
    ) -> Result<Self, DuelError> {
        let fighters: Vec<Fighter> = fighters.into_iter().collect();
        let fighters: [Fighter; 2] = fighters
            .try_into()
            .map_err(|rejected: Vec<Fighter>| IllegalDuelStart::WrongFighterCount {
                supplied: rejected.len(),
            })?;

        if let Some(defeated) = fighters.iter().find(|fighter| fighter.is_defeated()) {
            return Err(IllegalDuelStart::AlreadyDefeated {
                name: defeated.name().to_owned(),
                health: defeated.health(),
            }
            .into());
        }

        debug!(
            first = fighters[0].name(),
            second = fighters[1].name(),
            "duel started"
        );

        Ok(Self {
            fighters,
            phase: DuelPhase::InProgress,
            exchanges: 0,
            outcome: None,
            config,
        })
    }

    pub fn phase(&self) -> DuelPhase {
        self.phase
    }

    /// Exchanges started so far.
    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn outcome(&self) -> Option<&DuelOutcome> {
        self.outcome.as_ref()
    }

    /// Runs one exchange: the first fighter attacks, then the second
    /// counter-attacks. Stops mid-exchange as soon as anyone is defeated.
    pub fn step(
        &mut self,
        rng: &mut (impl RandomSource + ?Sized),
        observer: &mut (impl DuelObserver + ?Sized),
    ) -> Result<ExchangeOutcome, DuelError> {
        if self.phase == DuelPhase::Concluded {
            return Err(DuelError::AlreadyConcluded);
        }
        if self.exchanges >= self.config.max_exchanges {
            return Err(DuelError::ExchangeLimit {
                limit: self.config.max_exchanges,
            });
        }
        self.exchanges += 1;

        let [first, second] = &mut self.fighters;

        observer.on_turn(first);
        if !first.is_defeated() {
            first.attack(second, rng, observer);
        }
        if let Some(outcome) = self.check_conclusion(observer) {
            return Ok(ExchangeOutcome::Concluded(outcome));
        }

        let [first, second] = &mut self.fighters;

        observer.on_turn(second);
        if !second.is_defeated() {
            second.attack(first, rng, observer);
        }
        if let Some(outcome) = self.check_conclusion(observer) {
            return Ok(ExchangeOutcome::Concluded(outcome));
        }

        Ok(ExchangeOutcome::Continue)
    }

    /// Runs exchanges until the duel concludes.
    pub fn run(
        mut self,
        rng: &mut (impl RandomSource + ?Sized),
        observer: &mut (impl DuelObserver + ?Sized),
    ) -> Result<DuelReport, DuelError> {
        loop {
            if let ExchangeOutcome::Concluded(outcome) = self.step(rng, observer)? {
                return Ok(DuelReport {
                    outcome,
                    exchanges: self.exchanges,
                    fighters: self.fighters,
                });
            }
        }
    }

    fn check_conclusion(
        &mut self,
        observer: &mut (impl DuelObserver + ?Sized),
    ) -> Option<DuelOutcome> {
        let outcome = resolve_outcome(&self.fighters)?;

        debug!(?outcome, exchanges = self.exchanges, "duel concluded");

        let winner = outcome
            .winner_slot()
            .and_then(|slot| self.fighters.get(slot));
        observer.on_duel_concluded(winner);

        self.phase = DuelPhase::Concluded;
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }
}

/// Decides the outcome from current health, or `None` while both stand.
///
/// Both fighters down is an explicit draw; neither side is favored by the
/// order in which they are checked.
pub fn resolve_outcome(fighters: &[Fighter; 2]) -> Option<DuelOutcome> {
    let [first, second] = fighters;
    match (first.is_defeated(), second.is_defeated()) {
        (false, false) => None,
        (true, true) => Some(DuelOutcome::Draw),
        (false, true) => Some(DuelOutcome::Victory {
            winner: first.name().to_owned(),
            loser: second.name().to_owned(),
            winner_slot: 0,
        }),
        (true, false) => Some(DuelOutcome::Victory {
            winner: second.name().to_owned(),
            loser: first.name().to_owned(),
            winner_slot: 1,
        }),
    }
}
