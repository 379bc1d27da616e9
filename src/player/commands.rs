use crate::player::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    TogglePlay,
    /// Fraction of the track, filtered through the configured [`SeekPolicy`](crate::player::config::SeekPolicy).
    Seek(f64),
    Skip(SkipDirection),
    SelectTrack(Track),
}
