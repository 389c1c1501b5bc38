//! Fighter model.
//!
//! A [`Fighter`] is one record type for every archetype. The archetype-specific
//! behavior hangs off its [`ArchetypeState`], so the rules stay a closed,
//! exhaustive `match` rather than an open class hierarchy.
//!
//! # Lifecycle
//!
//! - Roster templates are created once and never mutated
//! - Duel instances come from [`Fighter::clone_named`] with zeroed extra state
//! - The duel engine mutates instances through [`Fighter::attack`] and
//!   [`Fighter::take_damage`], then the session discards them

mod archetype;
pub mod special;

pub use archetype::{Archetype, BaseStats};
pub use special::{ArchetypeResource, ArchetypeState};

use tracing::debug;

use crate::combat::mitigate;
use crate::env::RandomSource;
use crate::error::{ArenaError, ErrorSeverity};
use crate::events::DuelObserver;

/// Errors raised when building a fighter from explicit stats.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StatsError {
    #[error("{stat} must be a finite number")]
    NonFinite { stat: &'static str },

    #[error("{stat} must not be negative (got {value})")]
    Negative { stat: &'static str, value: f32 },

    #[error("starting health must be positive (got {0})")]
    NonPositiveHealth(f32),

    #[error("attack damage must be positive (got {0})")]
    NonPositiveDamage(f32),
}

impl ArenaError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "STATS_NON_FINITE",
            Self::Negative { .. } => "STATS_NEGATIVE",
            Self::NonPositiveHealth(_) => "STATS_NON_POSITIVE_HEALTH",
            Self::NonPositiveDamage(_) => "STATS_NON_POSITIVE_DAMAGE",
        }
    }
}

/// Result of a single [`Fighter::take_damage`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageTaken {
    /// Health lost after mitigation (zero when evaded).
    pub applied: f32,
    pub evaded: bool,
    /// Health regained by a rage heal triggered by this hit.
    pub healed: Option<f32>,
}

/// Read-only view of a fighter's current stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterSnapshot {
    pub name: String,
    pub archetype: Archetype,
    pub health: f32,
    pub armor: f32,
    pub attack_damage: f32,
    pub resource: Option<ArchetypeResource>,
}

/// A combatant: roster template or duel instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    name: String,
    base: BaseStats,
    health: f32,
    state: ArchetypeState,
}

impl Fighter {
    /// Creates a fighter with the archetype's default name and stats.
    pub fn new(archetype: Archetype) -> Self {
        Self {
            name: archetype.default_name().to_owned(),
            base: archetype.base_stats(),
            health: archetype.base_stats().health,
            state: ArchetypeState::fresh(archetype),
        }
    }

    /// Creates a fighter with explicit stats (e.g. from a roster file).
    pub fn with_stats(
        archetype: Archetype,
        name: impl Into<String>,
        base: BaseStats,
    ) -> Result<Self, StatsError> {
        base.validate()?;
        Ok(Self {
            name: name.into(),
            base,
            health: base.health,
            state: ArchetypeState::fresh(archetype),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.state.archetype()
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn armor(&self) -> f32 {
        self.base.armor
    }

    pub fn attack_damage(&self) -> f32 {
        self.base.attack_damage
    }

    pub fn base_stats(&self) -> BaseStats {
        self.base
    }

    pub fn state(&self) -> &ArchetypeState {
        &self.state
    }

    /// Health at or below zero means defeated. Health is never clamped.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Produces a fresh, independent fighter of the same archetype.
    ///
    /// Base stats are copied, health is reset to its starting value and the
    /// extra state is zeroed. `new_name` overrides the name; `None` keeps it.
    pub fn clone_named(&self, new_name: Option<&str>) -> Self {
        Self {
            name: new_name.unwrap_or(&self.name).to_owned(),
            base: self.base,
            health: self.base.health,
            state: ArchetypeState::fresh(self.archetype()),
        }
    }

    /// Attacks `opponent`, applying damage through [`Fighter::take_damage`].
    ///
    /// Depending on the archetype this is a plain hit, a double-damage hit, a
    /// double strike or a fireball. A double strike stops early when the first
    /// hit already defeated the opponent.
    pub fn attack(
        &mut self,
        opponent: &mut Fighter,
        rng: &mut (impl RandomSource + ?Sized),
        observer: &mut (impl DuelObserver + ?Sized),
    ) {
        let plan = self.state.plan_attack(self.base.attack_damage, rng);

        if plan.special {
            debug!(
                attacker = %self.name,
                archetype = %self.archetype(),
                damage = plan.damage,
                strikes = plan.strikes,
                "special attack"
            );
        }

        for strike in 0..plan.strikes {
            if strike > 0 && opponent.is_defeated() {
                break;
            }
            observer.on_attack(self, opponent, plan.damage, plan.special);
            opponent.take_damage(plan.damage, rng, observer);
        }

        self.state.after_attack();
    }

    /// Applies an incoming hit: evasion roll, armor mitigation, rage.
    pub fn take_damage(
        &mut self,
        amount: f32,
        rng: &mut (impl RandomSource + ?Sized),
        observer: &mut (impl DuelObserver + ?Sized),
    ) -> DamageTaken {
        if self.state.evades(rng) {
            debug!(defender = %self.name, "evaded");
            observer.on_damage_taken(self, 0.0, true);
            return DamageTaken {
                applied: 0.0,
                evaded: true,
                healed: None,
            };
        }

        let applied = mitigate(self.base.armor, amount).health_loss();
        self.health -= applied;
        observer.on_damage_taken(self, applied, false);

        let healed = self.state.absorb_hit();
        if let Some(amount) = healed {
            self.health += amount;
            debug!(fighter = %self.name, amount, health = self.health, "rage heal");
            observer.on_heal(self, amount);
        }

        DamageTaken {
            applied,
            evaded: false,
            healed,
        }
    }

    pub fn describe(&self) -> FighterSnapshot {
        FighterSnapshot {
            name: self.name.clone(),
            archetype: self.archetype(),
            health: self.health,
            armor: self.base.armor,
            attack_damage: self.base.attack_damage,
            resource: self.state.resource(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_health(&mut self, health: f32) {
        self.health = health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRandom;
    use crate::events::{DuelEvent, EventLog, NoopObserver};

    /// Unarmored punching bag with plenty of health.
    fn dummy() -> Fighter {
        Fighter::with_stats(
            Archetype::Gladiator,
            "Dummy",
            BaseStats::new(10_000.0, 0.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn defaults_match_archetype_table() {
        let shaman = Fighter::new(Archetype::Shaman);
        assert_eq!(shaman.name(), "Shaman");
        assert_eq!(shaman.health(), 100.0);
        assert_eq!(shaman.armor(), 20.0);
        assert_eq!(shaman.attack_damage(), 50.0);
        assert_eq!(shaman.state(), &ArchetypeState::Shaman { mana: 0 });
    }

    #[test]
    fn clone_is_independent_of_template() {
        let template = Fighter::new(Archetype::Gladiator);
        let mut copy = template.clone_named(None);
        let mut rng = ScriptedRandom::never();

        copy.take_damage(50.0, &mut rng, &mut NoopObserver);

        assert_eq!(copy.health(), 115.0);
        assert_eq!(template.health(), 150.0);
        assert_eq!(copy.name(), template.name());
    }

    #[test]
    fn clone_resets_health_and_extra_state() {
        let mut valkyrie = Fighter::new(Archetype::Valkyrie);
        let mut target = dummy();
        let mut rng = ScriptedRandom::never();
        valkyrie.attack(&mut target, &mut rng, &mut NoopObserver);
        valkyrie.set_health(3.0);

        let copy = valkyrie.clone_named(Some("Valkyrie.1"));
        assert_eq!(copy.name(), "Valkyrie.1");
        assert_eq!(copy.health(), 200.0);
        assert_eq!(copy.state(), &ArchetypeState::Valkyrie { attack_count: 0 });
    }

    #[test]
    fn mitigation_cases_reduce_health() {
        let mut rng = ScriptedRandom::never();
        let mut gladiator = Fighter::new(Archetype::Gladiator);

        assert_eq!(gladiator.take_damage(10.0, &mut rng, &mut NoopObserver).applied, 1.0);
        assert_eq!(gladiator.health(), 149.0);

        assert_eq!(gladiator.take_damage(20.0, &mut rng, &mut NoopObserver).applied, 5.0);
        assert_eq!(gladiator.health(), 144.0);

        let mut bag = dummy();
        assert_eq!(bag.take_damage(20.0, &mut rng, &mut NoopObserver).applied, 20.0);
        assert_eq!(bag.health(), 9_980.0);
    }

    #[test]
    fn health_goes_negative_without_clamping() {
        let mut shaman = Fighter::new(Archetype::Shaman);
        shaman.take_damage(500.0, &mut ScriptedRandom::never(), &mut NoopObserver);
        assert_eq!(shaman.health(), -380.0);
        assert!(shaman.is_defeated());
    }

    #[test]
    fn gladiator_double_damage() {
        let mut gladiator = Fighter::new(Archetype::Gladiator);
        let mut bag = dummy();
        let mut log = EventLog::new();

        gladiator.attack(&mut bag, &mut ScriptedRandom::always(), &mut log);
        gladiator.attack(&mut bag, &mut ScriptedRandom::never(), &mut log);

        assert_eq!(log.attacks_by("Gladiator"), vec![(70.0, true), (35.0, false)]);
        assert_eq!(bag.health(), 10_000.0 - 105.0);
    }

    #[test]
    fn valkyrie_cadence_against_unarmored_target() {
        let mut valkyrie = Fighter::new(Archetype::Valkyrie);
        let mut bag = dummy();
        let mut rng = ScriptedRandom::never();
        let mut dealt = Vec::new();

        for _ in 0..3 {
            let before = bag.health();
            valkyrie.attack(&mut bag, &mut rng, &mut NoopObserver);
            dealt.push(before - bag.health());
        }

        assert_eq!(dealt, vec![35.0, 35.0, 70.0]);
    }

    #[test]
    fn valkyrie_second_strike_skipped_when_first_defeats() {
        let mut valkyrie = Fighter::new(Archetype::Valkyrie);
        let mut target = Fighter::with_stats(
            Archetype::Gladiator,
            "Glass",
            BaseStats::new(500.0, 0.0, 1.0),
        )
        .unwrap();
        let mut rng = ScriptedRandom::never();
        let mut log = EventLog::new();

        valkyrie.attack(&mut target, &mut rng, &mut NoopObserver);
        valkyrie.attack(&mut target, &mut rng, &mut NoopObserver);
        target.set_health(30.0);
        valkyrie.attack(&mut target, &mut rng, &mut log);

        assert_eq!(log.attacks_by("Valkyrie").len(), 1);
        assert_eq!(target.health(), -5.0);
    }

    #[test]
    fn highlander_rage_heals_on_fourth_hit() {
        let mut highlander = Fighter::new(Archetype::Highlander);
        let mut rng = ScriptedRandom::never();
        let mut log = EventLog::new();

        for _ in 0..3 {
            highlander.take_damage(10.0, &mut rng, &mut log);
        }
        assert_eq!(highlander.state(), &ArchetypeState::Highlander { rage: 75 });
        let before_fourth = highlander.health();

        let taken = highlander.take_damage(10.0, &mut rng, &mut log);

        assert_eq!(taken.healed, Some(20.0));
        assert_eq!(highlander.health(), before_fourth - 10.0 + 20.0);
        assert_eq!(highlander.state(), &ArchetypeState::Highlander { rage: 0 });
        assert_eq!(
            log.events().last(),
            Some(&DuelEvent::Heal {
                fighter: "Highlander".into(),
                amount: 20.0
            })
        );
    }

    #[test]
    fn rage_heal_applies_after_a_lethal_hit() {
        let mut rng = ScriptedRandom::never();

        let mut survivor = Fighter::new(Archetype::Highlander);
        for _ in 0..3 {
            survivor.take_damage(10.0, &mut rng, &mut NoopObserver);
        }
        survivor.set_health(15.0);
        let taken = survivor.take_damage(30.0, &mut rng, &mut NoopObserver);
        assert_eq!(taken.healed, Some(20.0));
        assert_eq!(survivor.health(), 5.0);
        assert!(!survivor.is_defeated());

        let mut fallen = Fighter::new(Archetype::Highlander);
        for _ in 0..3 {
            fallen.take_damage(10.0, &mut rng, &mut NoopObserver);
        }
        fallen.set_health(15.0);
        fallen.take_damage(40.0, &mut rng, &mut NoopObserver);
        assert_eq!(fallen.health(), -5.0);
        assert!(fallen.is_defeated());
    }

    #[test]
    fn shaman_first_fireball_on_fourth_attack() {
        let mut shaman = Fighter::new(Archetype::Shaman);
        let mut bag = dummy();
        let mut rng = ScriptedRandom::never();
        let mut log = EventLog::new();
        let mut mana_before = Vec::new();

        for _ in 0..5 {
            if let Some(ArchetypeResource::Mana(mana)) = shaman.state().resource() {
                mana_before.push(mana);
            }
            shaman.attack(&mut bag, &mut rng, &mut log);
        }

        assert_eq!(mana_before, vec![0, 2, 4, 6, 2]);
        assert_eq!(
            log.attacks_by("Shaman"),
            vec![
                (50.0, false),
                (50.0, false),
                (50.0, false),
                (75.0, true),
                (50.0, false)
            ]
        );
        assert_eq!(shaman.state(), &ArchetypeState::Shaman { mana: 4 });
    }

    #[test]
    fn berserk_evasion_takes_nothing() {
        let mut berserk = Fighter::new(Archetype::Berserk);
        let mut log = EventLog::new();

        let taken = berserk.take_damage(100.0, &mut ScriptedRandom::always(), &mut log);
        assert!(taken.evaded);
        assert_eq!(berserk.health(), 170.0);

        let taken = berserk.take_damage(100.0, &mut ScriptedRandom::never(), &mut log);
        assert!(!taken.evaded);
        assert_eq!(berserk.health(), 80.0);

        assert_eq!(
            log.events()[0],
            DuelEvent::DamageTaken {
                defender: "Berserk".into(),
                amount: 0.0,
                evaded: true
            }
        );
    }

    #[test]
    fn describe_reports_resource() {
        let highlander = Fighter::new(Archetype::Highlander);
        let snapshot = highlander.describe();

        assert_eq!(snapshot.name, "Highlander");
        assert_eq!(snapshot.archetype, Archetype::Highlander);
        assert_eq!(snapshot.health, 300.0);
        assert_eq!(snapshot.resource, Some(ArchetypeResource::Rage(0)));
        assert_eq!(Fighter::new(Archetype::Berserk).describe().resource, None);
    }

    #[test]
    fn with_stats_rejects_zero_damage() {
        let err = Fighter::with_stats(
            Archetype::Gladiator,
            "Pacifist",
            BaseStats::new(100.0, 0.0, 0.0),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "STATS_NON_POSITIVE_DAMAGE");
    }

    #[test]
    fn with_stats_rejects_negative_armor() {
        let result = Fighter::with_stats(
            Archetype::Berserk,
            "Broken",
            BaseStats::new(100.0, -3.0, 10.0),
        );
        let err = result.unwrap_err();
        assert_eq!(err.error_code(), "STATS_NEGATIVE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
