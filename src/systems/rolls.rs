use hecs::World;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::components::{
    creature::CasterLevel,
    resistance::{MagicImmunity, ResistVerdict, SpellMantle, SpellResistance},
    saving_throw::{SaveImmunities, SaveQualifier, SaveRoll, SaveVerdict, SavingThrowBonuses},
    spell::SpellCast,
};

pub static D20_CRITICAL_SUCCESS: u8 = 20;
pub static D20_CRITICAL_FAILURE: u8 = 1;

/// The host's roll-saving-throw capability.
pub trait SavingThrowRoller {
    fn roll_saving_throw(&mut self, world: &World, roll: &SaveRoll) -> SaveVerdict;
}

impl<F> SavingThrowRoller for F
where
    F: FnMut(&World, &SaveRoll) -> SaveVerdict,
{
    fn roll_saving_throw(&mut self, world: &World, roll: &SaveRoll) -> SaveVerdict {
        (self)(world, roll)
    }
}

/// The host's roll-spell-resistance capability.
pub trait SpellResistanceRoller {
    fn check_spell_resistance(&mut self, world: &World, cast: &SpellCast) -> ResistVerdict;
}

impl<F> SpellResistanceRoller for F
where
    F: FnMut(&World, &SpellCast) -> ResistVerdict,
{
    fn check_spell_resistance(&mut self, world: &World, cast: &SpellCast) -> ResistVerdict {
        (self)(world, cast)
    }
}

/// 1d20 + category bonus against the difficulty. A natural 1 always fails and a
/// natural 20 always succeeds. Immunity to the qualifier skips the roll.
#[derive(Debug, Clone)]
pub struct D20SavingThrowRoller {
    rng: StdRng,
}

impl D20SavingThrowRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl SavingThrowRoller for D20SavingThrowRoller {
    fn roll_saving_throw(&mut self, world: &World, roll: &SaveRoll) -> SaveVerdict {
        // `All` is the absence of a qualifier, nothing can be immune to it
        if roll.qualifier != SaveQualifier::All
            && world
                .get::<&SaveImmunities>(roll.defender)
                .is_ok_and(|immunities| immunities.contains(&roll.qualifier))
        {
            return SaveVerdict::Immune;
        }

        let bonus = world
            .get::<&SavingThrowBonuses>(roll.defender)
            .map(|bonuses| bonuses.get(&roll.category))
            .unwrap_or(0);
        let d20 = self.rng.random_range(1..=20) as u8;
        let total = d20 as i32 + bonus;

        let verdict = if d20 == D20_CRITICAL_FAILURE {
            SaveVerdict::Failed
        } else if d20 == D20_CRITICAL_SUCCESS || total >= roll.difficulty.value() as i32 {
            SaveVerdict::Succeeded
        } else {
            SaveVerdict::Failed
        };

        debug!(
            "{:?} rolled {} (1d20) + {} = {} vs {} {}: {}",
            roll.defender, d20, bonus, total, roll.difficulty, roll.category, verdict
        );
        verdict
    }
}

/// Mantle first, then globe immunity, then a 1d20 + caster level roll against
/// the defender's spell resistance.
#[derive(Debug, Clone)]
pub struct D20SpellResistanceRoller {
    rng: StdRng,
}

impl D20SpellResistanceRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl SpellResistanceRoller for D20SpellResistanceRoller {
    fn check_spell_resistance(&mut self, world: &World, cast: &SpellCast) -> ResistVerdict {
        let defender = cast.target;

        if world.get::<&SpellMantle>(defender).is_ok() {
            return ResistVerdict::ResistedByMantle;
        }

        if let Ok(globe) = world.get::<&MagicImmunity>(defender) {
            if cast.spell_level <= globe.max_spell_level {
                return ResistVerdict::ResistedByImmunity;
            }
        }

        let Ok(resistance) = world.get::<&SpellResistance>(defender).map(|sr| sr.0) else {
            return ResistVerdict::NotResisted;
        };

        let caster_level = world
            .get::<&CasterLevel>(cast.caster)
            .map(|level| level.0)
            .unwrap_or(0);
        let d20 = self.rng.random_range(1..=20) as u32;
        let total = d20 + caster_level as u32;

        debug!(
            "{:?} rolled {} (1d20) + {} = {} vs spell resistance {} of {:?}",
            cast.caster, d20, caster_level, total, resistance, defender
        );

        if total >= resistance as u32 {
            ResistVerdict::NotResisted
        } else {
            ResistVerdict::ResistedBySR
        }
    }
}
