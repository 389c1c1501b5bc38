//! Roster selection and duel lifecycle.
//!
//! A [`Session`] holds the read-only [`Roster`] and, between selection and the
//! end of a fight, the active pair of fighting copies. The pair is emptied as
//! soon as a duel is started, whatever its result.

use std::str::FromStr;

use arena_content::Roster;
use arena_core::{
    ArenaError, Archetype, Duel, DuelConfig, DuelObserver, DuelPair, DuelPhase, DuelReport,
    Fighter, PcgRandom, RandomSource,
};
use tracing::{info, warn};

use crate::error::{Result, RuntimeError, SelectionError};

/// Suffix appended to the second copy in a mirror match.
const MIRROR_SUFFIX: &str = ".1";

/// Session-level settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Seed for the session's random source. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Toss a coin to decide who opens. When off, the first pick opens.
    pub coin_toss: bool,
    pub duel: DuelConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            coin_toss: true,
            duel: DuelConfig::default(),
        }
    }
}

/// One arena session: a roster, a random source, and at most one pending duel.
pub struct Session<R = PcgRandom> {
    roster: Roster,
    active: DuelPair,
    rng: R,
    config: SessionConfig,
}

impl Session<PcgRandom> {
    /// Creates a session backed by a seeded PCG generator.
    pub fn new(roster: Roster, config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        info!(seed, fighters = roster.len(), "arena session opened");
        Self::with_rng(roster, config, PcgRandom::new(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Creates a session with an explicit random source.
    pub fn with_rng(roster: Roster, config: SessionConfig, rng: R) -> Self {
        Self {
            roster,
            active: DuelPair::new(),
            rng,
            config,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// `Idle` with no pending pair, `InProgress` once two fighters are picked.
    pub fn phase(&self) -> DuelPhase {
        if self.active.is_empty() {
            DuelPhase::Idle
        } else {
            DuelPhase::InProgress
        }
    }

    /// The pending fighting copies (empty or exactly two).
    pub fn active(&self) -> &[Fighter] {
        self.active.as_slice()
    }

    /// Turns user input into a zero-based roster index.
    ///
    /// Accepts a 1-based menu number or an archetype name.
    pub fn parse_selection(&self, input: &str) -> std::result::Result<usize, SelectionError> {
        let input = input.trim();
        let len = self.roster.len();

        if let Ok(number) = input.parse::<usize>() {
            if number == 0 || number > len {
                return Err(SelectionError::OutOfRange { index: number, len });
            }
            return Ok(number - 1);
        }

        Archetype::from_str(input)
            .ok()
            .and_then(|archetype| self.roster.position_of(archetype))
            .ok_or_else(|| SelectionError::Unrecognized(input.to_owned()))
    }

    /// Clones two templates (zero-based indices) into the active pair.
    ///
    /// Picking the same template twice names the second copy `<name>.1`. Any
    /// previously pending pair is discarded.
    pub fn select(
        &mut self,
        first: usize,
        second: usize,
    ) -> std::result::Result<&[Fighter], SelectionError> {
        let first = self.template(first)?.clone_named(None);
        let second_template = self.template(second)?;
        let second = if second_template.name() == first.name() {
            let mirror = format!("{}{}", first.name(), MIRROR_SUFFIX);
            second_template.clone_named(Some(&mirror))
        } else {
            second_template.clone_named(None)
        };

        info!(
            first = first.name(),
            second = second.name(),
            "fighters selected"
        );

        self.active.clear();
        self.active.push(first);
        self.active.push(second);
        Ok(self.active.as_slice())
    }

    /// Drops the pending pair without fighting.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Runs the pending duel to completion.
    ///
    /// The pair is taken out of the session before anything else happens, so
    /// the session is `Idle` again afterwards even when the duel fails.
    pub fn start_duel(
        &mut self,
        observer: &mut (impl DuelObserver + ?Sized),
    ) -> Result<DuelReport> {
        let mut pair = std::mem::take(&mut self.active);
        if pair.is_empty() {
            return Err(RuntimeError::NoActiveDuel);
        }

        if self.config.coin_toss && pair.len() == 2 && self.toss_coin() {
            pair.swap(0, 1);
        }
        info!(opener = pair[0].name(), "duel starting");

        let report = Duel::with_config(pair, self.config.duel.clone())
            .and_then(|duel| duel.run(&mut self.rng, observer))
            .inspect_err(|err| warn!(%err, code = err.error_code(), "duel aborted"))?;

        info!(
            winner = report.outcome.winner().unwrap_or("none"),
            exchanges = report.exchanges,
            "duel finished"
        );
        Ok(report)
    }

    /// Selects and fights in one call.
    pub fn fight(
        &mut self,
        first: usize,
        second: usize,
        observer: &mut (impl DuelObserver + ?Sized),
    ) -> Result<DuelReport> {
        self.select(first, second)?;
        self.start_duel(observer)
    }

    /// Lots are 1 or 2; drawing 2 hands the opening turn to the second pick.
    fn toss_coin(&mut self) -> bool {
        self.rng.next_int(1, 3) == 2
    }

    fn template(&self, index: usize) -> std::result::Result<&Fighter, SelectionError> {
        self.roster.get(index).ok_or(SelectionError::OutOfRange {
            index: index + 1,
            len: self.roster.len(),
        })
    }
}
