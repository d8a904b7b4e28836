use hecs::Entity;
use tracing::debug;

use crate::{
    components::saving_throw::{
        SaveCategory, SaveDifficulty, SaveQualifier, SaveRoll, SaveVerdict,
    },
    engine::{event::EventKind, game_state::GameState},
    systems,
};

/// Final damage from a reflex-avoidable effect.
///
/// - Failed save: half damage (with or without Improved Evasion).
/// - Any other outcome with Evasion or Improved Evasion: no damage.
/// - Any other outcome without either feat: half damage.
///
/// Halving truncates, so 21 becomes 10.
pub fn adjust_damage(
    raw: u32,
    outcome: SaveVerdict,
    has_evasion: bool,
    has_improved_evasion: bool,
) -> u32 {
    match outcome {
        SaveVerdict::Failed => raw / 2,
        SaveVerdict::Succeeded | SaveVerdict::Immune if has_evasion || has_improved_evasion => 0,
        SaveVerdict::Succeeded | SaveVerdict::Immune => raw / 2,
    }
}

/// Rolls a Reflex save for `target` and scales `damage` by the outcome and the
/// target's evasion feats. Non-creatures take the full damage without rolling.
pub fn reflex_adjusted_damage(
    game_state: &mut GameState,
    target: Entity,
    damage: u32,
    difficulty: i32,
    qualifier: SaveQualifier,
    opponent: Option<Entity>,
) -> u32 {
    if !systems::helpers::is_creature(&game_state.world, target) {
        return damage;
    }

    let roll = SaveRoll {
        defender: target,
        category: SaveCategory::Reflex,
        difficulty: SaveDifficulty::new(difficulty),
        qualifier,
        opponent: opponent.unwrap_or(target),
    };
    let verdict = game_state.roll_saving_throw(&roll);

    let has_evasion = systems::feats::has_evasion(&game_state.world, target);
    let has_improved_evasion = systems::feats::has_improved_evasion(&game_state.world, target);
    let adjusted = adjust_damage(damage, verdict, has_evasion, has_improved_evasion);

    debug!(
        "{} reflex {}: {} damage -> {} (evasion: {}, improved evasion: {})",
        systems::helpers::name(&game_state.world, target),
        verdict,
        damage,
        adjusted,
        has_evasion,
        has_improved_evasion
    );

    game_state.log_event(EventKind::ReflexDamageAdjusted {
        target,
        raw: damage,
        adjusted,
    });

    adjusted
}
