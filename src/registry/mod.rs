pub mod feats;
pub mod spells;
