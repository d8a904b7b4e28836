use hecs::{Entity, World};

use crate::components::creature::Creature;

pub fn is_creature(world: &World, entity: Entity) -> bool {
    world.get::<&Creature>(entity).is_ok()
}

/// Display name for logging. Entities carry their name as a `String` component.
pub fn name(world: &World, entity: Entity) -> String {
    world
        .get::<&String>(entity)
        .map(|name| name.to_string())
        .unwrap_or_else(|_| format!("{:?}", entity))
}
