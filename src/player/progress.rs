/// What the UI needs to redraw the seek bar after a tick or a control call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub current_time: f64,
    pub fraction: f64,
}

impl Progress {
    pub fn new(current_time: f64, fraction: f64) -> Self {
        Self {
            current_time,
            fraction,
        }
    }

    /// Value for a 0..=100 range control.
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    pub fn formatted(&self) -> String {
        format_time(self.current_time)
    }
}

/// Formats seconds as `MM:SS`.
///
/// There is no hours field, so anything past 99:59 just widens the minutes.
pub fn format_time(seconds: f64) -> String {
    // NaN.max(0.0) is 0.0
    let total_seconds = seconds.max(0.0).floor() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
