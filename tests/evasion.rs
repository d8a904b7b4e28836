extern crate nat20_spell_defense;

mod tests {
    use hecs::{Entity, World};
    use nat20_spell_defense::{
        components::{
            resistance::ResistVerdict,
            saving_throw::{SaveCategory, SaveQualifier, SaveRoll, SaveVerdict},
        },
        engine::event::EventKind,
        systems,
        test_utils::fixtures,
    };
    use rstest::rstest;

    #[rstest]
    #[case(SaveVerdict::Succeeded, 0)]
    #[case(SaveVerdict::Failed, 15)]
    fn rogue_evasion(#[case] verdict: SaveVerdict, #[case] expected: u32) {
        let mut game_state = fixtures::game_state::fixed(verdict, ResistVerdict::NotResisted);
        let rogue = fixtures::creatures::rogue(&mut game_state.world);

        let damage = systems::evasion::reflex_adjusted_damage(
            &mut game_state,
            rogue,
            30,
            18,
            SaveQualifier::Fire,
            None,
        );
        assert_eq!(damage, expected);
    }

    #[rstest]
    #[case(SaveVerdict::Succeeded, 0)]
    #[case(SaveVerdict::Failed, 15)]
    fn monk_improved_evasion(#[case] verdict: SaveVerdict, #[case] expected: u32) {
        let mut game_state = fixtures::game_state::fixed(verdict, ResistVerdict::NotResisted);
        let monk = fixtures::creatures::monk(&mut game_state.world);

        let damage = systems::evasion::reflex_adjusted_damage(
            &mut game_state,
            monk,
            31,
            18,
            SaveQualifier::Electricity,
            None,
        );
        assert_eq!(damage, expected);
    }

    #[rstest]
    #[case(SaveVerdict::Succeeded)]
    #[case(SaveVerdict::Failed)]
    fn no_feats_halves(#[case] verdict: SaveVerdict) {
        let mut game_state = fixtures::game_state::fixed(verdict, ResistVerdict::NotResisted);
        let goblin = fixtures::creatures::goblin(&mut game_state.world);

        let damage = systems::evasion::reflex_adjusted_damage(
            &mut game_state,
            goblin,
            21,
            14,
            SaveQualifier::All,
            None,
        );
        assert_eq!(damage, 10);
        assert!(matches!(
            game_state.events().last().map(|event| &event.kind),
            Some(EventKind::ReflexDamageAdjusted {
                raw: 21,
                adjusted: 10,
                ..
            })
        ));
    }

    #[test]
    fn placeable_takes_full_damage_without_a_roll() {
        let mut game_state = fixtures::game_state::fixed(
            SaveVerdict::Succeeded,
            ResistVerdict::NotResisted,
        );
        let door = fixtures::placeables::door(&mut game_state.world);

        let damage = systems::evasion::reflex_adjusted_damage(
            &mut game_state,
            door,
            40,
            20,
            SaveQualifier::Fire,
            None,
        );
        assert_eq!(damage, 40);
        assert!(game_state.events().is_empty());
    }

    #[test]
    fn reflex_roll_uses_clamped_difficulty_and_opponent() {
        let mut game_state = fixtures::game_state::seeded(0);
        let wizard = fixtures::creatures::wizard(&mut game_state.world);
        let rogue = fixtures::creatures::rogue(&mut game_state.world);
        game_state.set_save_roller(
            move |_: &World, roll: &SaveRoll| {
                assert_eq!(roll.category, SaveCategory::Reflex);
                assert_eq!(roll.difficulty.value(), 1);
                assert_eq!(roll.opponent, wizard);
                SaveVerdict::Succeeded
            },
        );

        let damage = systems::evasion::reflex_adjusted_damage(
            &mut game_state,
            rogue,
            12,
            -5,
            SaveQualifier::Acid,
            Some(wizard),
        );
        assert_eq!(damage, 0);
    }

    #[test]
    fn seeded_default_roller_is_bounded() {
        let mut game_state = fixtures::game_state::seeded(77);
        let targets: Vec<Entity> = vec![
            fixtures::creatures::rogue(&mut game_state.world),
            fixtures::creatures::monk(&mut game_state.world),
            fixtures::creatures::goblin(&mut game_state.world),
        ];

        for target in targets {
            for _ in 0..20 {
                let damage = systems::evasion::reflex_adjusted_damage(
                    &mut game_state,
                    target,
                    50,
                    15,
                    SaveQualifier::Fire,
                    None,
                );
                assert!(damage == 0 || damage == 25, "unexpected damage {}", damage);
            }
        }
    }
}
