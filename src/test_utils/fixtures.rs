pub mod creatures {
    use hecs::{Entity, World};

    use crate::{
        components::{
            creature::{CasterLevel, Creature},
            feat::KnownFeats,
            resistance::{MagicImmunity, SpellMantle, SpellResistance},
            saving_throw::{SaveCategory, SaveImmunities, SaveQualifier, SavingThrowBonuses},
        },
        registry,
    };

    pub fn wizard(world: &mut World) -> Entity {
        world.spawn((
            "Wizard".to_string(),
            Creature,
            CasterLevel(12),
            SavingThrowBonuses::new()
                .with(SaveCategory::Fortitude, 4)
                .with(SaveCategory::Reflex, 5)
                .with(SaveCategory::Will, 9),
        ))
    }

    pub fn goblin(world: &mut World) -> Entity {
        world.spawn((
            "Goblin".to_string(),
            Creature,
            SavingThrowBonuses::new()
                .with(SaveCategory::Fortitude, 3)
                .with(SaveCategory::Reflex, 1),
        ))
    }

    pub fn rogue(world: &mut World) -> Entity {
        world.spawn((
            "Rogue".to_string(),
            Creature,
            SavingThrowBonuses::new().with(SaveCategory::Reflex, 8),
            KnownFeats::new([registry::feats::EVASION_ID.clone()]),
        ))
    }

    pub fn monk(world: &mut World) -> Entity {
        world.spawn((
            "Monk".to_string(),
            Creature,
            SavingThrowBonuses::new()
                .with(SaveCategory::Fortitude, 7)
                .with(SaveCategory::Reflex, 7)
                .with(SaveCategory::Will, 7),
            KnownFeats::new([
                registry::feats::EVASION_ID.clone(),
                registry::feats::IMPROVED_EVASION_ID.clone(),
            ]),
        ))
    }

    /// Immune to death effects and poison, with high spell resistance.
    pub fn lich(world: &mut World) -> Entity {
        world.spawn((
            "Lich".to_string(),
            Creature,
            SpellResistance(25),
            SaveImmunities::new([SaveQualifier::Death, SaveQualifier::Poison]),
        ))
    }

    pub fn globed_mage(world: &mut World) -> Entity {
        world.spawn((
            "Globed Mage".to_string(),
            Creature,
            MagicImmunity { max_spell_level: 4 },
        ))
    }

    pub fn mantled_mage(world: &mut World) -> Entity {
        world.spawn(("Mantled Mage".to_string(), Creature, SpellMantle))
    }
}

pub mod placeables {
    use hecs::{Entity, World};

    use crate::components::resistance::SpellMantle;

    pub fn door(world: &mut World) -> Entity {
        world.spawn(("Door".to_string(),))
    }

    /// Not a creature, so the mantle is never consulted.
    pub fn warded_chest(world: &mut World) -> Entity {
        world.spawn(("Warded Chest".to_string(), SpellMantle))
    }
}

pub mod rollers {
    use std::{cell::Cell, rc::Rc};

    use hecs::World;

    use crate::components::{
        resistance::ResistVerdict,
        saving_throw::{SaveRoll, SaveVerdict},
        spell::SpellCast,
    };

    pub fn always_save(verdict: SaveVerdict) -> impl FnMut(&World, &SaveRoll) -> SaveVerdict {
        move |_: &World, _: &SaveRoll| verdict
    }

    pub fn always_resist(
        verdict: ResistVerdict,
    ) -> impl FnMut(&World, &SpellCast) -> ResistVerdict {
        move |_: &World, _: &SpellCast| verdict
    }

    /// Resistance roller that counts how often it was consulted.
    pub fn counting_resist(
        verdict: ResistVerdict,
        calls: Rc<Cell<u32>>,
    ) -> impl FnMut(&World, &SpellCast) -> ResistVerdict {
        move |_: &World, _: &SpellCast| {
            calls.set(calls.get() + 1);
            verdict
        }
    }
}

pub mod game_state {
    use crate::{
        components::{resistance::ResistVerdict, saving_throw::SaveVerdict},
        engine::{config::DefenseConfig, game_state::GameState},
    };

    use super::rollers;

    pub fn fixed(save: SaveVerdict, resist: ResistVerdict) -> GameState {
        GameState::with_rollers(
            DefenseConfig::default(),
            rollers::always_save(save),
            rollers::always_resist(resist),
        )
    }

    pub fn seeded(seed: u64) -> GameState {
        GameState::with_seed(DefenseConfig::default(), seed)
    }
}
