use hecs::{Entity, World};

use crate::{
    components::{feat::KnownFeats, id::FeatId},
    registry,
};

pub fn knows_feat(world: &World, entity: Entity, feat: &FeatId) -> bool {
    world
        .get::<&KnownFeats>(entity)
        .is_ok_and(|feats| feats.contains(feat))
}

pub fn has_evasion(world: &World, entity: Entity) -> bool {
    knows_feat(world, entity, &registry::feats::EVASION_ID)
}

pub fn has_improved_evasion(world: &World, entity: Entity) -> bool {
    knows_feat(world, entity, &registry::feats::IMPROVED_EVASION_ID)
}
