//! Archetype-specific state and special abilities.
//!
//! Each variant carries only the extra state its archetype needs. The fighter
//! model asks the state for an [`AttackPlan`] before swinging and lets it react
//! after taking damage.

use crate::env::RandomSource;

use super::Archetype;

/// Percent chance (Gladiator) to deal double damage.
pub const DOUBLE_DAMAGE_CHANCE: i32 = 50;
pub const DOUBLE_DAMAGE_MULTIPLIER: f32 = 2.0;

/// Valkyrie strikes twice when her attack counter is a multiple of this.
pub const DOUBLE_STRIKE_CADENCE: u32 = 3;

pub const RAGE_PER_HIT: u32 = 25;
pub const MAX_RAGE: u32 = 100;
/// Health a Highlander regains when the rage bar fills.
pub const RAGE_HEAL: f32 = 20.0;

/// Mana a Shaman needs (and spends) for a fireball.
pub const FIREBALL_COST: u32 = 6;
pub const FIREBALL_MULTIPLIER: f32 = 1.5;
pub const MANA_PER_ATTACK: u32 = 2;

/// Percent chance (Berserk) to evade a hit.
pub const EVASION_CHANCE: i32 = 50;

/// Per-archetype extra state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArchetypeState {
    Gladiator,
    Valkyrie { attack_count: u32 },
    Highlander { rage: u32 },
    Shaman { mana: u32 },
    Berserk,
}

/// Archetype resource exposed in snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArchetypeResource {
    AttackCount(u32),
    Rage(u32),
    Mana(u32),
}

/// What an attack will do, decided before any damage lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AttackPlan {
    pub damage: f32,
    pub strikes: u8,
    pub special: bool,
}

impl AttackPlan {
    fn plain(damage: f32) -> Self {
        Self {
            damage,
            strikes: 1,
            special: false,
        }
    }
}

impl ArchetypeState {
    /// Zeroed state for a new fighter.
    pub const fn fresh(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Gladiator => Self::Gladiator,
            Archetype::Valkyrie => Self::Valkyrie { attack_count: 0 },
            Archetype::Highlander => Self::Highlander { rage: 0 },
            Archetype::Shaman => Self::Shaman { mana: 0 },
            Archetype::Berserk => Self::Berserk,
        }
    }

    pub const fn archetype(&self) -> Archetype {
        match self {
            Self::Gladiator => Archetype::Gladiator,
            Self::Valkyrie { .. } => Archetype::Valkyrie,
            Self::Highlander { .. } => Archetype::Highlander,
            Self::Shaman { .. } => Archetype::Shaman,
            Self::Berserk => Archetype::Berserk,
        }
    }

    pub const fn resource(&self) -> Option<ArchetypeResource> {
        match *self {
            Self::Valkyrie { attack_count } => Some(ArchetypeResource::AttackCount(attack_count)),
            Self::Highlander { rage } => Some(ArchetypeResource::Rage(rage)),
            Self::Shaman { mana } => Some(ArchetypeResource::Mana(mana)),
            Self::Gladiator | Self::Berserk => None,
        }
    }

    /// Decides the next attack and updates counters that are consumed by it.
    pub(crate) fn plan_attack(
        &mut self,
        attack_damage: f32,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> AttackPlan {
        match self {
            Self::Gladiator => {
                if rng.chance(DOUBLE_DAMAGE_CHANCE) {
                    AttackPlan {
                        damage: attack_damage * DOUBLE_DAMAGE_MULTIPLIER,
                        strikes: 1,
                        special: true,
                    }
                } else {
                    AttackPlan::plain(attack_damage)
                }
            }
            Self::Valkyrie { attack_count } => {
                *attack_count += 1;
                if *attack_count % DOUBLE_STRIKE_CADENCE == 0 {
                    AttackPlan {
                        damage: attack_damage,
                        strikes: 2,
                        special: true,
                    }
                } else {
                    AttackPlan::plain(attack_damage)
                }
            }
            Self::Shaman { mana } => {
                if *mana >= FIREBALL_COST {
                    // Floor at zero if the gate and the cost ever diverge.
                    *mana = mana.saturating_sub(FIREBALL_COST);
                    AttackPlan {
                        damage: attack_damage * FIREBALL_MULTIPLIER,
                        strikes: 1,
                        special: true,
                    }
                } else {
                    AttackPlan::plain(attack_damage)
                }
            }
            Self::Highlander { .. } | Self::Berserk => AttackPlan::plain(attack_damage),
        }
    }

    /// Bookkeeping once every strike of an attack has landed.
    pub(crate) fn after_attack(&mut self) {
        if let Self::Shaman { mana } = self {
            *mana += MANA_PER_ATTACK;
        }
    }

    /// Rolls for a full evasion. Only Berserks roll.
    pub(crate) fn evades(&self, rng: &mut (impl RandomSource + ?Sized)) -> bool {
        match self {
            Self::Berserk => rng.chance(EVASION_CHANCE),
            _ => false,
        }
    }

    /// Adds rage after a hit. Returns the heal to apply when the bar fills.
    pub(crate) fn absorb_hit(&mut self) -> Option<f32> {
        let Self::Highlander { rage } = self else {
            return None;
        };

        *rage += RAGE_PER_HIT;
        if *rage >= MAX_RAGE {
            *rage -= MAX_RAGE;
            Some(RAGE_HEAL)
        } else {
            None
        }
    }
}
