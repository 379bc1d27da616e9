pub mod config;
pub mod event;
pub mod player;
pub mod ui;
pub mod util;
