use crate::player::Track;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Playback
    TrackChanged(Track),
    PlaybackProgress { current_time: f64, fraction: f64 },
    PlaybackStateChanged(bool),

    // UI feedback
    Notify(String),
}
