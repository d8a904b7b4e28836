/// Marks an entity as a creature. Only creatures roll spell resistance or
/// dodge reflex damage; doors and placeables lack this component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Creature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CasterLevel(pub u8);
