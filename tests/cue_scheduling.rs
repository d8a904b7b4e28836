extern crate nat20_spell_defense;

mod tests {
    use hecs::{Entity, World};
    use nat20_spell_defense::{
        components::{
            cue::Cue,
            resistance::ResistVerdict,
            saving_throw::{SaveCategory, SaveQualifier, SaveRequest, SaveVerdict},
            spell::SpellCast,
        },
        engine::{event::EventKind, time::RecordingCueSink},
        registry, systems,
        test_utils::{fixtures, logging},
    };
    use uom::si::{f32::Time, time::second};

    fn seconds(value: f32) -> Time {
        Time::new::<second>(value)
    }

    #[test]
    fn zero_delay_verdict_is_ready_before_the_cue() {
        logging::init_tracing();
        let mut game_state =
            fixtures::game_state::fixed(SaveVerdict::Succeeded, ResistVerdict::NotResisted);
        let goblin = fixtures::creatures::goblin(&mut game_state.world);
        let mut sink = RecordingCueSink::default();

        let resolution = systems::saving_throw::resolve_saving_throw(
            &mut game_state,
            &SaveRequest::new(goblin, SaveCategory::Fortitude, 10),
        );

        // Verdict is usable immediately, the cue has not rendered yet
        assert!(resolution.succeeded);
        assert_eq!(game_state.cue_scheduler.pending(), 1);
        assert!(!game_state
            .events()
            .iter()
            .any(|event| matches!(event.kind, EventKind::CueApplied { .. })));

        game_state.advance_time(&mut sink, seconds(0.0));
        assert_eq!(sink.applied, vec![(goblin, Cue::FortitudeSave)]);
        assert!(matches!(
            game_state.events().last().map(|event| &event.kind),
            Some(EventKind::CueApplied {
                cue: Cue::FortitudeSave,
                ..
            })
        ));
    }

    #[test]
    fn resistance_then_save_flow() {
        let mut game_state =
            fixtures::game_state::fixed(SaveVerdict::Failed, ResistVerdict::NotResisted);
        let wizard = fixtures::creatures::wizard(&mut game_state.world);
        let goblin = fixtures::creatures::goblin(&mut game_state.world);
        let mut sink = RecordingCueSink::default();

        let cast = SpellCast::new(
            wizard,
            goblin,
            registry::spells::FINGER_OF_DEATH_ID.clone(),
            7,
        );
        systems::spells::signal_spell_cast_at(&mut game_state, &cast);

        let resist = systems::spell_resistance::resolve_spell_resistance(
            &mut game_state,
            &cast,
            seconds(0.0),
        );
        assert!(!resist.is_resisted());

        let save = systems::saving_throw::resolve_saving_throw(
            &mut game_state,
            &SaveRequest::new(goblin, SaveCategory::Fortitude, 25)
                .with_qualifier(SaveQualifier::Death)
                .with_opponent(wizard)
                .with_spell(cast.spell.clone())
                .with_delay(seconds(0.5)),
        );
        assert!(!save.succeeded);
        assert_eq!(save.cue, Some(Cue::Death));

        game_state.advance_time(&mut sink, seconds(0.5));
        assert_eq!(sink.applied, vec![(goblin, Cue::Death)]);

        assert!(matches!(
            game_state.events().first().map(|event| &event.kind),
            Some(EventKind::SpellCastAt(logged)) if logged == &cast
        ));
    }

    #[test]
    fn cue_for_removed_defender_is_dropped() {
        let mut game_state =
            fixtures::game_state::fixed(SaveVerdict::Failed, ResistVerdict::NotResisted);
        let goblin = fixtures::creatures::goblin(&mut game_state.world);
        let mut sink = RecordingCueSink::default();

        systems::saving_throw::resolve_saving_throw(
            &mut game_state,
            &SaveRequest::new(goblin, SaveCategory::Fortitude, 25)
                .with_qualifier(SaveQualifier::Death)
                .with_delay(seconds(1.0)),
        );
        assert_eq!(game_state.cue_scheduler.pending(), 1);

        game_state.world.despawn(goblin).unwrap();
        let applied = game_state.advance_time(&mut sink, seconds(5.0));

        assert!(applied.is_empty());
        assert!(sink.applied.is_empty());
        assert_eq!(game_state.cue_scheduler.pending(), 0);
    }

    #[test]
    fn unrelated_resolutions_fire_by_due_time() {
        let mut game_state =
            fixtures::game_state::fixed(SaveVerdict::Succeeded, ResistVerdict::ResistedByMantle);
        let wizard = fixtures::creatures::wizard(&mut game_state.world);
        let rogue = fixtures::creatures::rogue(&mut game_state.world);
        let monk = fixtures::creatures::monk(&mut game_state.world);

        let mut applied: Vec<(Entity, Cue)> = Vec::new();
        let mut sink = |_: &mut World, target: Entity, cue: Cue| applied.push((target, cue));

        systems::saving_throw::resolve_saving_throw(
            &mut game_state,
            &SaveRequest::new(rogue, SaveCategory::Reflex, 15).with_delay(seconds(1.0)),
        );
        systems::spell_resistance::resolve_spell_resistance(
            &mut game_state,
            &SpellCast::new(wizard, monk, registry::spells::WEIRD_ID.clone(), 9),
            seconds(0.2),
        );

        game_state.advance_time(&mut sink, seconds(2.0));
        assert_eq!(
            applied,
            vec![(monk, Cue::SpellMantle), (rogue, Cue::ReflexSave)]
        );
    }

    #[test]
    fn harmless_cast_is_signalled_as_such() {
        let mut game_state =
            fixtures::game_state::fixed(SaveVerdict::Succeeded, ResistVerdict::NotResisted);
        let wizard = fixtures::creatures::wizard(&mut game_state.world);
        let goblin = fixtures::creatures::goblin(&mut game_state.world);

        let cast = SpellCast::new(wizard, goblin, registry::spells::WEIRD_ID.clone(), 9).harmless();
        systems::spells::signal_spell_cast_at(&mut game_state, &cast);

        assert!(matches!(
            game_state.events().first().map(|event| &event.kind),
            Some(EventKind::SpellCastAt(logged)) if !logged.harmful
        ));
    }

    #[test]
    fn events_are_filtered_by_target_and_drained() {
        let mut game_state =
            fixtures::game_state::fixed(SaveVerdict::Succeeded, ResistVerdict::NotResisted);
        let rogue = fixtures::creatures::rogue(&mut game_state.world);
        let goblin = fixtures::creatures::goblin(&mut game_state.world);
        let mut sink = RecordingCueSink::default();

        systems::saving_throw::resolve_saving_throw(
            &mut game_state,
            &SaveRequest::new(rogue, SaveCategory::Reflex, 15),
        );
        systems::saving_throw::resolve_saving_throw(
            &mut game_state,
            &SaveRequest::new(goblin, SaveCategory::Will, 15),
        );
        game_state.advance_time(&mut sink, seconds(0.0));

        // Resolved, scheduled and applied for each defender
        assert_eq!(game_state.events_for(rogue).count(), 3);
        assert_eq!(game_state.events_for(goblin).count(), 3);
        assert!(game_state.events_for(rogue).all(|event| event.target() == Some(rogue)));

        let drained = game_state.drain_events();
        assert_eq!(drained.len(), 6);
        assert!(game_state.events().is_empty());
        assert_eq!(game_state.events_for(rogue).count(), 0);
    }
}
