pub mod creature;
pub mod cue;
pub mod feat;
pub mod id;
pub mod resistance;
pub mod saving_throw;
pub mod spell;
