use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::components::{
    resistance::ResistVerdict,
    saving_throw::{SaveCategory, SaveVerdict},
};

/// Visual/audio acknowledgement of a resolved check. Applying one is instant and
/// has no mechanical effect; hosts map each variant onto their own assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    FortitudeSave,
    ReflexSave,
    WillSave,
    Death,
    MagicResistance,
    Globe,
    SpellMantle,
}

impl Cue {
    pub fn successful_save(category: SaveCategory) -> Option<Cue> {
        match category {
            SaveCategory::Fortitude => Some(Cue::FortitudeSave),
            SaveCategory::Reflex => Some(Cue::ReflexSave),
            SaveCategory::Will => Some(Cue::WillSave),
            SaveCategory::Other(_) => None,
        }
    }

    /// Cue for a save verdict. `lethal` is true when the save was against a death
    /// effect or the spell is in the always-lethal set; it only matters on failure.
    pub fn for_save(category: SaveCategory, verdict: SaveVerdict, lethal: bool) -> Option<Cue> {
        match verdict {
            SaveVerdict::Succeeded => Cue::successful_save(category),
            SaveVerdict::Immune => Some(Cue::MagicResistance),
            SaveVerdict::Failed if lethal => Some(Cue::Death),
            SaveVerdict::Failed => None,
        }
    }

    pub fn for_resistance(verdict: ResistVerdict) -> Option<Cue> {
        match verdict {
            ResistVerdict::NotResisted => None,
            ResistVerdict::ResistedBySR => Some(Cue::MagicResistance),
            ResistVerdict::ResistedByImmunity => Some(Cue::Globe),
            ResistVerdict::ResistedByMantle => Some(Cue::SpellMantle),
        }
    }
}
