//! Archetype identities and their canonical base stats.

use super::StatsError;

/// Fighter archetype.
///
/// The set is closed: the duel engine and the fighter model match on it
/// exhaustively. Identity is fixed when a fighter is created.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    /// Chance to deal double damage.
    Gladiator,
    /// Strikes twice on every third attack.
    Valkyrie,
    /// Builds rage when hit and heals on a full bar.
    Highlander,
    /// Spends mana on fireballs.
    Shaman,
    /// Chance to evade a hit entirely.
    Berserk,
}

impl Archetype {
    /// Every archetype, in roster order.
    pub const ALL: [Archetype; 5] = [
        Archetype::Gladiator,
        Archetype::Valkyrie,
        Archetype::Highlander,
        Archetype::Shaman,
        Archetype::Berserk,
    ];

    /// Display name a freshly created fighter of this archetype carries.
    pub const fn default_name(&self) -> &'static str {
        match self {
            Self::Gladiator => "Gladiator",
            Self::Valkyrie => "Valkyrie",
            Self::Highlander => "Highlander",
            Self::Shaman => "Shaman",
            Self::Berserk => "Berserk",
        }
    }

    pub const fn base_stats(&self) -> BaseStats {
        match self {
            Self::Gladiator => BaseStats::new(150.0, 15.0, 35.0),
            Self::Valkyrie => BaseStats::new(200.0, 15.0, 35.0),
            Self::Highlander => BaseStats::new(300.0, 0.0, 45.0),
            Self::Shaman => BaseStats::new(100.0, 20.0, 50.0),
            Self::Berserk => BaseStats::new(170.0, 10.0, 40.0),
        }
    }
}

/// Stats a fighter starts every duel with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub health: f32,
    pub armor: f32,
    pub attack_damage: f32,
}

impl BaseStats {
    pub const fn new(health: f32, armor: f32, attack_damage: f32) -> Self {
        Self {
            health,
            armor,
            attack_damage,
        }
    }

    /// Checks the creation invariants: every stat finite and non-negative,
    /// health and attack damage strictly positive.
    pub fn validate(&self) -> Result<(), StatsError> {
        for (stat, value) in [
            ("health", self.health),
            ("armor", self.armor),
            ("attack_damage", self.attack_damage),
        ] {
            if !value.is_finite() {
                return Err(StatsError::NonFinite { stat });
            }
            if value < 0.0 {
                return Err(StatsError::Negative { stat, value });
            }
        }

        if self.health <= 0.0 {
            return Err(StatsError::NonPositiveHealth(self.health));
        }
        if self.attack_damage <= 0.0 {
            return Err(StatsError::NonPositiveDamage(self.attack_damage));
        }

        Ok(())
    }
}
