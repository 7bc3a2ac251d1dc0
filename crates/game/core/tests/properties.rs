use arena_core::{
    ActorId, Archetype, AttackCommand, AttackStyle, Character, CombatError, CommandInvoker,
    DefenseStyle, GameCommand, HealCommand, PowerAttackSequence, Roster, Stats, execute_turn,
};
use proptest::prelude::*;

fn character(name: &str, stats: Stats, attack: AttackStyle, defense: DefenseStyle) -> Character {
    Character::builder()
        .name(name)
        .archetype(Archetype::Warrior)
        .stats(stats)
        .attack_style(attack)
        .defense_style(defense)
        .build()
        .unwrap()
}

fn warrior(name: &str) -> Character {
    character(
        name,
        Stats::full(150, 40, 30, 0).unwrap(),
        AttackStyle::Melee,
        DefenseStyle::HeavyArmor,
    )
}

fn attack_style() -> impl Strategy<Value = AttackStyle> {
    prop_oneof![
        Just(AttackStyle::Melee),
        Just(AttackStyle::Magic),
        Just(AttackStyle::Ranged),
    ]
}

fn defense_style() -> impl Strategy<Value = DefenseStyle> {
    prop_oneof![Just(DefenseStyle::Standard), Just(DefenseStyle::HeavyArmor)]
}

/// Valid stats at full health and mana.
fn full_stats() -> impl Strategy<Value = Stats> {
    (1..=500i32, 0..=200i32, 0..=200i32, 0..=200i32).prop_map(
        |(max_health, attack_power, defense, max_mana)| {
            Stats::full(max_health, attack_power, defense, max_mana).unwrap()
        },
    )
}

#[derive(Clone, Debug)]
enum Mutation {
    Damage(i32),
    Heal(i32),
    SetHealth(i32),
    UseMana(i32),
    RestoreMana(i32),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        any::<i32>().prop_map(Mutation::Damage),
        any::<i32>().prop_map(Mutation::Heal),
        any::<i32>().prop_map(Mutation::SetHealth),
        any::<i32>().prop_map(Mutation::UseMana),
        any::<i32>().prop_map(Mutation::RestoreMana),
    ]
}

proptest! {
    #[test]
    fn stats_stay_in_bounds_after_any_mutation(
        stats in full_stats(),
        defense in defense_style(),
        mutations in proptest::collection::vec(mutation(), 0..32),
    ) {
        let mut subject = character("Subject", stats, AttackStyle::Melee, defense);

        for mutation in mutations {
            match mutation {
                Mutation::Damage(amount) => subject.take_damage(amount),
                Mutation::Heal(amount) => subject.heal(amount),
                Mutation::SetHealth(value) => subject.set_health(value),
                Mutation::UseMana(amount) => {
                    let before = subject.stats().mana();
                    if subject.use_mana(amount).is_err() {
                        prop_assert_eq!(subject.stats().mana(), before);
                    }
                }
                Mutation::RestoreMana(amount) => subject.restore_mana(amount),
            }

            let current = subject.stats();
            prop_assert!((0..=current.max_health()).contains(&current.health()));
            prop_assert!((0..=current.max_mana()).contains(&current.mana()));
        }
    }

    #[test]
    fn heavy_armor_lets_a_quarter_through(
        incoming in 1..=1_000_000i32,
        defense in 0..=1_000_000i32,
    ) {
        let stats = Stats::full(100, 0, defense, 0).unwrap();
        let tank = character("Tank", stats, AttackStyle::Melee, DefenseStyle::HeavyArmor);

        let result = tank.defend(incoming);
        prop_assert!(result >= incoming / 4);
        prop_assert!(result <= incoming);
    }

    #[test]
    fn standard_defense_is_never_negative(incoming in any::<i32>(), defense in 0..=i32::MAX) {
        let stats = Stats::full(100, 0, defense, 0).unwrap();
        let guard = character("Guard", stats, AttackStyle::Melee, DefenseStyle::Standard);

        prop_assert!(guard.defend(incoming) >= 0);
    }

    #[test]
    fn attack_command_round_trip_from_full_health(
        attacker_stats in full_stats(),
        target_stats in full_stats(),
        attack in attack_style(),
        defense in defense_style(),
    ) {
        let mut roster = Roster::new();
        let challenger = character("Attacker", attacker_stats, attack, DefenseStyle::Standard);
        let attacker = roster.spawn(challenger);
        let target = roster.spawn(character("Target", target_stats, AttackStyle::Melee, defense));
        let before = roster.get(target).unwrap().stats().health();

        let mut command = AttackCommand::new(&roster, attacker, target).unwrap();
        match command.execute(&mut roster) {
            Ok(()) => {
                command.undo(&mut roster).unwrap();
                prop_assert_eq!(roster.get(target).unwrap().stats().health(), before);
            }
            Err(error) => {
                prop_assert!(
                    matches!(error, CombatError::InsufficientMana { .. }),
                    "unexpected error: {}",
                    error
                );
                prop_assert_eq!(roster.get(target).unwrap().stats().health(), before);
            }
        }
    }

    #[test]
    fn heal_command_round_trip_is_exact(
        stats in full_stats(),
        missing in 0..=500i32,
        amount in 0..=10_000i32,
    ) {
        let mut roster = Roster::new();
        let mut hero = character("Hero", stats, AttackStyle::Melee, DefenseStyle::Standard);
        hero.set_health(stats.max_health() - missing);
        let hero = roster.spawn(hero);
        let before = roster.get(hero).unwrap().stats().health();

        let mut command = HealCommand::new(&roster, hero, amount).unwrap();
        command.execute(&mut roster).unwrap();
        prop_assert!(roster.get(hero).unwrap().stats().health() <= stats.max_health());
        command.undo(&mut roster).unwrap();

        prop_assert_eq!(roster.get(hero).unwrap().stats().health(), before);
    }

    #[test]
    fn recoil_never_drives_health_negative(health in 0..=150i32) {
        let mut attacker = warrior("Attacker");
        let mut defender = warrior("Defender");
        attacker.set_health(health);

        let mut sequence = PowerAttackSequence::new();
        execute_turn(&mut sequence, &mut attacker, &mut defender).unwrap();

        prop_assert_eq!(attacker.stats().health(), (health - 15).max(0));
    }
}

#[test]
fn magic_without_mana_leaves_target_unchanged() {
    let mut roster = Roster::new();
    let mage = roster.spawn(character(
        "LowManaMage",
        Stats::full(80, 60, 10, 100).unwrap(),
        AttackStyle::Magic,
        DefenseStyle::Standard,
    ));
    let tank = roster.spawn(warrior("Tank"));

    while roster.get(mage).unwrap().stats().mana() > 5 {
        roster.get_mut(mage).unwrap().use_mana(10).unwrap();
    }
    assert_eq!(roster.get(mage).unwrap().stats().mana(), 0);

    let mut invoker = CommandInvoker::new();
    let command = AttackCommand::new(&roster, mage, tank).unwrap();
    let error = invoker.execute(command, &mut roster).unwrap_err();

    assert!(error.to_string().contains("Not enough mana"));
    assert_eq!(roster.get(tank).unwrap().stats().health(), 150);
    assert!(invoker.is_empty());
}

#[test]
fn invoker_reverses_three_commands_in_lifo_order() {
    let mut roster = Roster::new();
    let attacker = roster.spawn(warrior("Attacker"));
    let target = roster.spawn(warrior("Target"));
    let health = |roster: &Roster, id: ActorId| roster.get(id).unwrap().stats().health();

    let mut invoker = CommandInvoker::new();
    let command = AttackCommand::new(&roster, attacker, target).unwrap();
    invoker.execute(command, &mut roster).unwrap();
    let after_c1 = health(&roster, target);
    invoker
        .execute(HealCommand::new(&roster, target, 7).unwrap(), &mut roster)
        .unwrap();
    let after_c2 = health(&roster, target);
    let command = AttackCommand::new(&roster, target, attacker).unwrap();
    invoker.execute(command, &mut roster).unwrap();
    let attacker_after_c3 = health(&roster, attacker);
    assert!(attacker_after_c3 < 150);

    let undone = invoker.undo(&mut roster).unwrap().unwrap();
    assert_eq!(undone.description(), "Target attacks Attacker");
    assert_eq!(health(&roster, attacker), 150);
    assert_eq!(health(&roster, target), after_c2);

    let undone = invoker.undo(&mut roster).unwrap().unwrap();
    assert_eq!(undone.description(), "Heal Target for 7 HP");
    assert_eq!(health(&roster, target), after_c1);

    assert_eq!(invoker.len(), 1);
    assert_eq!(
        invoker.history()[0].description(),
        "Attacker attacks Target"
    );
}
