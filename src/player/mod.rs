pub mod commands;
pub mod config;
pub mod error;
pub mod observer;
pub mod progress;
pub mod simulator;
pub mod state;
pub mod ticker;
pub mod track;

pub use commands::{PlayerCommand, SkipDirection};
pub use config::{PlayerConfig, SeekPolicy};
pub use error::PlayerError;
pub use observer::PlaybackObserver;
pub use progress::{Progress, format_time};
pub use simulator::PlaybackSimulator;
pub use state::{PlaybackState, PlayerStatus, TICK_INTERVAL, TICK_STEP};
pub use track::Track;
