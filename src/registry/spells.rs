use std::{collections::HashSet, sync::LazyLock};

use crate::components::id::SpellId;

pub static WEIRD_ID: LazyLock<SpellId> = LazyLock::new(|| SpellId::from_str("spell.weird"));

pub static FINGER_OF_DEATH_ID: LazyLock<SpellId> =
    LazyLock::new(|| SpellId::from_str("spell.finger_of_death"));

pub static HORRID_WILTING_ID: LazyLock<SpellId> =
    LazyLock::new(|| SpellId::from_str("spell.horrid_wilting"));

/// Spells that always show the death cue on a failed save, whatever the qualifier.
/// Used as the default for `DefenseConfig::lethal_spells`.
pub fn default_lethal_spells() -> HashSet<SpellId> {
    HashSet::from([
        WEIRD_ID.clone(),
        FINGER_OF_DEATH_ID.clone(),
        HORRID_WILTING_ID.clone(),
    ])
}
