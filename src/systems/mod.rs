pub mod evasion;
pub mod feats;
pub mod helpers;
pub mod rolls;
pub mod saving_throw;
pub mod spell_resistance;
pub mod spells;
