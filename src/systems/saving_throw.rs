use tracing::debug;

use crate::{
    components::{
        cue::Cue,
        saving_throw::{SaveDifficulty, SaveRequest, SaveResolution, SaveRoll, SaveVerdict},
    },
    engine::{event::EventKind, game_state::GameState},
    systems,
};

/// The boolean handed back to spell handlers. `Immune` is deliberately folded
/// into `false`: the handler must still apply its effect link so the target's
/// own immunity resists it, even though the cue shown is the immunity cue.
pub fn save_succeeded(verdict: SaveVerdict) -> bool {
    match verdict {
        SaveVerdict::Succeeded => true,
        SaveVerdict::Failed | SaveVerdict::Immune => false,
    }
}

/// Whether a failed save should show the death cue.
pub fn is_lethal(game_state: &GameState, request: &SaveRequest) -> bool {
    request.qualifier.is_death()
        || request
            .spell
            .as_ref()
            .is_some_and(|spell| systems::spells::is_lethal_spell(game_state, spell))
}

/// Rolls `request.defender`'s save and schedules the matching cue after
/// `request.delay`. The verdict is returned straight away; the cue only
/// renders once the game state's clock is advanced.
pub fn resolve_saving_throw(game_state: &mut GameState, request: &SaveRequest) -> SaveResolution {
    let difficulty = SaveDifficulty::new(request.difficulty);
    let opponent = request.opponent.unwrap_or(request.defender);

    let roll = SaveRoll {
        defender: request.defender,
        category: request.category,
        difficulty,
        qualifier: request.qualifier,
        opponent,
    };
    let verdict = game_state.roll_saving_throw(&roll);
    let succeeded = save_succeeded(verdict);
    let cue = Cue::for_save(request.category, verdict, is_lethal(game_state, request));

    debug!(
        "{} {} save ({}, {}) vs {}: {} -> succeeded: {}, cue: {:?}",
        systems::helpers::name(&game_state.world, request.defender),
        request.category,
        request.qualifier,
        difficulty,
        systems::helpers::name(&game_state.world, opponent),
        verdict,
        succeeded,
        cue
    );

    let resolved = game_state.log_event(EventKind::SavingThrowResolved {
        defender: request.defender,
        opponent,
        category: request.category,
        qualifier: request.qualifier,
        difficulty,
        verdict,
        succeeded,
    });

    if let Some(cue) = cue {
        game_state.schedule_cue(request.defender, cue, request.delay, resolved);
    }

    SaveResolution {
        succeeded,
        verdict,
        cue,
        difficulty,
    }
}
