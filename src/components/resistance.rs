use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::components::cue::Cue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistVerdict {
    NotResisted,
    /// Beaten by the defender's spell resistance roll.
    ResistedBySR,
    /// Blocked outright by a globe-style magic immunity.
    ResistedByImmunity,
    /// Absorbed by a spell mantle.
    ResistedByMantle,
}

impl ResistVerdict {
    pub fn is_resisted(&self) -> bool {
        !matches!(self, ResistVerdict::NotResisted)
    }
}

impl Display for ResistVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Spell resistance score. The caster must roll 1d20 + caster level of at least
/// this value to get through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellResistance(pub u8);

/// Globe-style immunity to every spell up to and including `max_spell_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicImmunity {
    pub max_spell_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellMantle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResistResolution {
    pub verdict: ResistVerdict,
    pub cue: Option<Cue>,
}

impl ResistResolution {
    pub fn not_resisted() -> Self {
        Self {
            verdict: ResistVerdict::NotResisted,
            cue: None,
        }
    }

    pub fn is_resisted(&self) -> bool {
        self.verdict.is_resisted()
    }
}
