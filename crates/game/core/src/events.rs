//! Duel notifications for presentation layers.
//!
//! The rules never format text. They raise discrete notifications through
//! [`DuelObserver`]; a frontend renders them, a runtime logs them, and tests
//! record them with [`EventLog`].

use crate::fighter::{Fighter, FighterSnapshot};

/// Receiver of duel notifications. Every method defaults to a no-op.
pub trait DuelObserver {
    /// A fighter is about to act (its stats are shown before the half-turn).
    fn on_turn(&mut self, _fighter: &Fighter) {}

    /// `attacker` sent `damage` (pre-mitigation) at `opponent`.
    ///
    /// `special` is set for archetype effects: double damage, double strike,
    /// fireball.
    fn on_attack(&mut self, _attacker: &Fighter, _opponent: &Fighter, _damage: f32, _special: bool) {
    }

    /// `defender` lost `amount` health, or dodged the hit when `evaded`.
    fn on_damage_taken(&mut self, _defender: &Fighter, _amount: f32, _evaded: bool) {}

    fn on_heal(&mut self, _fighter: &Fighter, _amount: f32) {}

    /// The duel ended. `None` means nobody was left standing.
    fn on_duel_concluded(&mut self, _winner: Option<&Fighter>) {}
}

impl<O: DuelObserver + ?Sized> DuelObserver for &mut O {
    fn on_turn(&mut self, fighter: &Fighter) {
        (**self).on_turn(fighter)
    }

    fn on_attack(&mut self, attacker: &Fighter, opponent: &Fighter, damage: f32, special: bool) {
        (**self).on_attack(attacker, opponent, damage, special)
    }

    fn on_damage_taken(&mut self, defender: &Fighter, amount: f32, evaded: bool) {
        (**self).on_damage_taken(defender, amount, evaded)
    }

    fn on_heal(&mut self, fighter: &Fighter, amount: f32) {
        (**self).on_heal(fighter, amount)
    }

    fn on_duel_concluded(&mut self, winner: Option<&Fighter>) {
        (**self).on_duel_concluded(winner)
    }
}

/// Fans every notification out to both observers, left first.
impl<A: DuelObserver, B: DuelObserver> DuelObserver for (A, B) {
    fn on_turn(&mut self, fighter: &Fighter) {
        self.0.on_turn(fighter);
        self.1.on_turn(fighter);
    }

    fn on_attack(&mut self, attacker: &Fighter, opponent: &Fighter, damage: f32, special: bool) {
        self.0.on_attack(attacker, opponent, damage, special);
        self.1.on_attack(attacker, opponent, damage, special);
    }

    fn on_damage_taken(&mut self, defender: &Fighter, amount: f32, evaded: bool) {
        self.0.on_damage_taken(defender, amount, evaded);
        self.1.on_damage_taken(defender, amount, evaded);
    }

    fn on_heal(&mut self, fighter: &Fighter, amount: f32) {
        self.0.on_heal(fighter, amount);
        self.1.on_heal(fighter, amount);
    }

    fn on_duel_concluded(&mut self, winner: Option<&Fighter>) {
        self.0.on_duel_concluded(winner);
        self.1.on_duel_concluded(winner);
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DuelObserver for NoopObserver {}

/// Owned record of a single notification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelEvent {
    Turn(FighterSnapshot),
    Attack {
        attacker: String,
        opponent: String,
        damage: f32,
        special: bool,
    },
    DamageTaken {
        defender: String,
        amount: f32,
        evaded: bool,
    },
    Heal {
        fighter: String,
        amount: f32,
    },
    Concluded {
        winner: Option<String>,
    },
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    events: Vec<DuelEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DuelEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<DuelEvent> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Health actually lost by `defender`, summed over every recorded hit.
    pub fn damage_taken_by(&self, defender: &str) -> f32 {
        self.events
            .iter()
            .filter_map(|event| match event {
                DuelEvent::DamageTaken {
                    defender: name,
                    amount,
                    ..
                } if name == defender => Some(*amount),
                _ => None,
            })
            .sum()
    }

    /// Attacks launched by `attacker`, as `(damage, special)` pairs.
    pub fn attacks_by(&self, attacker: &str) -> Vec<(f32, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DuelEvent::Attack {
                    attacker: name,
                    damage,
                    special,
                    ..
                } if name == attacker => Some((*damage, *special)),
                _ => None,
            })
            .collect()
    }
}

impl DuelObserver for EventLog {
    fn on_turn(&mut self, fighter: &Fighter) {
        self.events.push(DuelEvent::Turn(fighter.describe()));
    }

    fn on_attack(&mut self, attacker: &Fighter, opponent: &Fighter, damage: f32, special: bool) {
        self.events.push(DuelEvent::Attack {
            attacker: attacker.name().to_owned(),
            opponent: opponent.name().to_owned(),
            damage,
            special,
        });
    }

    fn on_damage_taken(&mut self, defender: &Fighter, amount: f32, evaded: bool) {
        self.events.push(DuelEvent::DamageTaken {
            defender: defender.name().to_owned(),
            amount,
            evaded,
        });
    }

    fn on_heal(&mut self, fighter: &Fighter, amount: f32) {
        self.events.push(DuelEvent::Heal {
            fighter: fighter.name().to_owned(),
            amount,
        });
    }

    fn on_duel_concluded(&mut self, winner: Option<&Fighter>) {
        self.events.push(DuelEvent::Concluded {
            winner: winner.map(|fighter| fighter.name().to_owned()),
        });
    }
}
