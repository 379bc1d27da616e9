pub mod app;
pub mod catalog;
pub mod components;
pub mod input;
pub mod layout;
pub mod message;
pub mod state;
pub mod toast;
pub mod tui;
pub mod util;
