//! Duel notifications as `tracing` records.

use arena_core::{DuelObserver, Fighter};
use tracing::{debug, info};

/// Logs every duel notification.
///
/// Hits land at `debug`, heals and the result at `info`. Pair it with a
/// rendering observer via the `(A, B)` fan-out impl.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DuelObserver for TracingObserver {
    fn on_turn(&mut self, fighter: &Fighter) {
        debug!(
            fighter = fighter.name(),
            health = fighter.health(),
            "turn"
        );
    }

    fn on_attack(&mut self, attacker: &Fighter, opponent: &Fighter, damage: f32, special: bool) {
        debug!(
            attacker = attacker.name(),
            opponent = opponent.name(),
            damage,
            special,
            "attack"
        );
    }

    fn on_damage_taken(&mut self, defender: &Fighter, amount: f32, evaded: bool) {
        debug!(
            defender = defender.name(),
            amount,
            evaded,
            health = defender.health(),
            "damage taken"
        );
    }

    fn on_heal(&mut self, fighter: &Fighter, amount: f32) {
        info!(
            fighter = fighter.name(),
            amount,
            health = fighter.health(),
            "healed"
        );
    }

    fn on_duel_concluded(&mut self, winner: Option<&Fighter>) {
        match winner {
            Some(winner) => info!(
                winner = winner.name(),
                health = winner.health(),
                "duel concluded"
            ),
            None => info!("duel concluded without a winner"),
        }
    }
}
