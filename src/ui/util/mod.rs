pub mod handler;

/// Pulsing dot shown next to the card that is playing.
///
/// `frame` is the UI frame counter; the pulse advances every three frames.
pub fn get_active_track_icon(is_playing: bool, frame: u64) -> &'static str {
    if !is_playing {
        return "•";
    }

    match (frame / 3) % 6 {
        0 | 5 => "·",
        1 | 4 => "•",
        _ => "●",
    }
}
