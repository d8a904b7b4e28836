use tracing::debug;
use uom::si::f32::Time;

use crate::{
    components::{
        cue::Cue,
        resistance::ResistResolution,
        spell::SpellCast,
    },
    engine::{event::EventKind, game_state::GameState},
    systems,
};

/// Checks whether `cast.target` shrugs off the spell through spell resistance,
/// a globe-style immunity or a mantle, and schedules the matching cue after
/// `delay`. Non-creatures (doors, placeables) never resist and the caster's
/// check is not rolled for them.
pub fn resolve_spell_resistance(
    game_state: &mut GameState,
    cast: &SpellCast,
    delay: Time,
) -> ResistResolution {
    if !systems::helpers::is_creature(&game_state.world, cast.target) {
        debug!(
            "{} is not a creature, skipping spell resistance",
            systems::helpers::name(&game_state.world, cast.target)
        );
        return ResistResolution::not_resisted();
    }

    let verdict = game_state.check_spell_resistance(cast);
    let cue = Cue::for_resistance(verdict);

    debug!(
        "{} vs {} ({}): {}",
        cast.spell,
        systems::helpers::name(&game_state.world, cast.target),
        systems::helpers::name(&game_state.world, cast.caster),
        verdict
    );

    let resolved = game_state.log_event(EventKind::SpellResistanceResolved {
        attacker: cast.caster,
        defender: cast.target,
        verdict,
    });

    if let Some(cue) = cue {
        game_state.schedule_cue(cast.target, cue, delay, resolved);
    }

    ResistResolution { verdict, cue }
}

/// Same as `resolve_spell_resistance` with the configured default delay.
pub fn resolve_spell_resistance_default(
    game_state: &mut GameState,
    cast: &SpellCast,
) -> ResistResolution {
    let delay = game_state.config.default_resist_delay();
    resolve_spell_resistance(game_state, cast, delay)
}
