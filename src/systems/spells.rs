use tracing::debug;

use crate::{
    components::{id::SpellId, spell::SpellCast},
    engine::{
        event::{EventId, EventKind},
        game_state::GameState,
    },
    systems,
};

/// Records that `cast.caster` cast `cast.spell` at `cast.target`, so whatever
/// consumes the event log can react.
pub fn signal_spell_cast_at(game_state: &mut GameState, cast: &SpellCast) -> EventId {
    debug!(
        "{} cast {} at {} (harmful: {})",
        systems::helpers::name(&game_state.world, cast.caster),
        cast.spell,
        systems::helpers::name(&game_state.world, cast.target),
        cast.harmful
    );
    game_state.log_event(EventKind::SpellCastAt(cast.clone()))
}

pub fn is_lethal_spell(game_state: &GameState, spell: &SpellId) -> bool {
    game_state.config.is_lethal_spell(spell)
}
