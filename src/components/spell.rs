use hecs::Entity;

use crate::components::id::SpellId;

/// Typed record of a spell being cast at a target. Callers build one and hand it
/// to the resolvers directly; nothing is dispatched through a global table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellCast {
    pub caster: Entity,
    pub target: Entity,
    pub spell: SpellId,
    pub spell_level: u8,
    pub harmful: bool,
}

impl SpellCast {
    pub fn new(caster: Entity, target: Entity, spell: SpellId, spell_level: u8) -> Self {
        Self {
            caster,
            target,
            spell,
            spell_level,
            harmful: true,
        }
    }

    pub fn harmless(mut self) -> Self {
        self.harmful = false;
        self
    }
}
