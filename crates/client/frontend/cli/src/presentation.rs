//! Text rendering of fighters and duel notifications.
use std::io::{self, Write};

use arena_core::{ArchetypeResource, DuelObserver, Fighter, FighterSnapshot};

const SEPARATOR_WIDTH: usize = 50;

/// Multi-line stat block for one fighter. Stats are shown as whole numbers.
pub fn render_snapshot(snapshot: &FighterSnapshot) -> String {
    let resource = match snapshot.resource {
        Some(ArchetypeResource::Rage(rage)) => format!("\n  Rage: {rage}"),
        Some(ArchetypeResource::Mana(mana)) => format!("\n  Mana: {mana}"),
        Some(ArchetypeResource::AttackCount(_)) | None => String::new(),
    };

    format!(
        "{}:\n  Health: {:.0}\n  Armor: {:.0}\n  Damage: {:.0}{resource}",
        snapshot.name, snapshot.health, snapshot.armor, snapshot.attack_damage
    )
}

/// Prints duel notifications as they happen.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// surfaced by [`ConsoleRenderer::finish`].
pub struct ConsoleRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(text).and_then(|_| self.out.write_all(b"\n")) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> DuelObserver for ConsoleRenderer<W> {
    fn on_turn(&mut self, fighter: &Fighter) {
        let separator = "#".repeat(SEPARATOR_WIDTH);
        let block = render_snapshot(&fighter.describe());
        self.line(format_args!("{separator}\n{block}"));
    }

    fn on_attack(&mut self, attacker: &Fighter, opponent: &Fighter, damage: f32, special: bool) {
        if special {
            self.line(format_args!(
                "{} unleashes a special attack on {} for {damage} damage!",
                attacker.name(),
                opponent.name()
            ));
        } else {
            self.line(format_args!(
                "{} attacks {} for {damage} damage.",
                attacker.name(),
                opponent.name()
            ));
        }
    }

    fn on_damage_taken(&mut self, defender: &Fighter, amount: f32, evaded: bool) {
        if evaded {
            self.line(format_args!("{}: I dodged that one!", defender.name()));
        } else {
            self.line(format_args!("{} loses {amount} health.", defender.name()));
        }
    }

    fn on_heal(&mut self, fighter: &Fighter, amount: f32) {
        self.line(format_args!(
            "{}: I feel a surge of strength! (+{amount} health)",
            fighter.name()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Archetype, NoopObserver, ScriptedRandom};

    #[test]
    fn snapshot_shows_whole_numbers_and_resource() {
        let mut highlander = Fighter::new(Archetype::Highlander);
        highlander.take_damage(10.0, &mut ScriptedRandom::never(), &mut NoopObserver);

        assert_eq!(
            render_snapshot(&highlander.describe()),
            "Highlander:\n  Health: 290\n  Armor: 0\n  Damage: 45\n  Rage: 25"
        );
        assert_eq!(
            render_snapshot(&Fighter::new(Archetype::Valkyrie).describe()),
            "Valkyrie:\n  Health: 200\n  Armor: 15\n  Damage: 35"
        );
    }

    #[test]
    fn renders_attacks_and_evasions() {
        let mut buffer = Vec::new();
        let mut renderer = ConsoleRenderer::new(&mut buffer);
        let mut gladiator = Fighter::new(Archetype::Gladiator);
        let mut berserk = Fighter::new(Archetype::Berserk);

        gladiator.attack(&mut berserk, &mut ScriptedRandom::new(vec![1, 1]), &mut renderer);
        renderer.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Gladiator unleashes a special attack on Berserk for 70 damage!\n\
             Berserk: I dodged that one!\n"
        );
    }
}
