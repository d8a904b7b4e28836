pub mod config;
pub mod event;
pub mod game_state;
pub mod time;
