use arena_core::{
    Archetype, BaseStats, Duel, DuelConfig, DuelOutcome, EventLog, Fighter, NoopObserver,
    PcgRandom, ScriptedRandom,
};

/// Well above what any canonical pairing needs; a stalemate would blow past it.
const EXCHANGE_BOUND: u32 = 200;

fn pairing(first: Archetype, second: Archetype) -> [Fighter; 2] {
    let a = Fighter::new(first);
    let b = if first == second {
        Fighter::new(second).clone_named(Some(&format!("{}.1", second.default_name())))
    } else {
        Fighter::new(second)
    };
    [a, b]
}

#[test]
fn every_pairing_terminates_within_bound() {
    for seed in 0..16u64 {
        for first in Archetype::ALL {
            for second in Archetype::ALL {
                let duel = Duel::with_config(
                    pairing(first, second),
                    DuelConfig::with_max_exchanges(EXCHANGE_BOUND),
                )
                .unwrap();

                let report = duel
                    .run(&mut PcgRandom::new(seed), &mut NoopObserver)
                    .unwrap_or_else(|err| panic!("{first} vs {second} (seed {seed}): {err}"));

                assert!(report.exchanges <= EXCHANGE_BOUND);
                assert!(report.fighters.iter().any(Fighter::is_defeated));
            }
        }
    }
}

#[test]
fn every_pairing_terminates_without_specials() {
    for first in Archetype::ALL {
        for second in Archetype::ALL {
            let report = Duel::new(pairing(first, second))
                .unwrap()
                .run(&mut ScriptedRandom::never(), &mut NoopObserver)
                .unwrap();

            assert_ne!(report.outcome, DuelOutcome::Draw, "{first} vs {second}");
        }
    }
}

#[test]
fn armor_matching_damage_still_ends_the_duel() {
    let stats = BaseStats::new(100.0, 20.0, 20.0);
    let first = Fighter::with_stats(Archetype::Gladiator, "Gladiator", stats).unwrap();
    let second = first.clone_named(Some("Gladiator.1"));

    let report = Duel::new([first, second])
        .unwrap()
        .run(&mut ScriptedRandom::never(), &mut NoopObserver)
        .unwrap();

    // Every landed hit grazes for 1, so the opener finishes it on exchange 100.
    assert_eq!(report.exchanges, 100);
    assert_eq!(report.outcome.winner(), Some("Gladiator"));
    assert_eq!(report.fighters[1].health(), 0.0);
}

#[test]
fn berserk_beats_gladiator_whoever_opens() {
    for order in [
        [Archetype::Gladiator, Archetype::Berserk],
        [Archetype::Berserk, Archetype::Gladiator],
    ] {
        let report = Duel::new(pairing(order[0], order[1]))
            .unwrap()
            .run(&mut ScriptedRandom::never(), &mut NoopObserver)
            .unwrap();

        assert_eq!(report.outcome.winner(), Some("Berserk"));
        assert_eq!(report.exchanges, 6);
    }
}

#[test]
fn duel_never_touches_templates() {
    let roster: Vec<Fighter> = Archetype::ALL.into_iter().map(Fighter::new).collect();
    let pristine = roster.clone();

    let duel = Duel::new([roster[1].clone_named(None), roster[3].clone_named(None)]).unwrap();
    duel.run(&mut PcgRandom::new(99), &mut NoopObserver).unwrap();

    assert_eq!(roster, pristine);
}

#[test]
fn same_seed_replays_same_duel() {
    let replay = |seed| {
        let mut log = EventLog::new();
        let report = Duel::new(pairing(Archetype::Valkyrie, Archetype::Berserk))
            .unwrap()
            .run(&mut PcgRandom::new(seed), &mut log)
            .unwrap();
        (report, log.into_events())
    };

    assert_eq!(replay(1234), replay(1234));
}
