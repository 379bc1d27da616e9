use std::time::Duration;

use crate::player::error::PlayerError;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub duration: Duration,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: f64,
    ) -> Result<Self, PlayerError> {
        Ok(Self {
            title: title.into(),
            artist: artist.into(),
            duration: duration_from_secs(duration_secs)?,
        })
    }
}

/// Converts a caller-supplied length in seconds into a non-zero [`Duration`].
///
/// Rejects zero, negative, NaN and infinite values, as well as values so small
/// they would round down to zero nanoseconds.
pub fn duration_from_secs(secs: f64) -> Result<Duration, PlayerError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(PlayerError::InvalidDuration(secs));
    }

    match Duration::try_from_secs_f64(secs) {
        Ok(duration) if !duration.is_zero() => Ok(duration),
        _ => Err(PlayerError::InvalidDuration(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_durations() {
        let track = Track::new("Blinding Lights", "The Weeknd", 200.5).unwrap();
        assert_eq!(track.duration, Duration::from_millis(200_500));
        assert_eq!(track.title, "Blinding Lights");
    }

    #[test]
    fn rejects_non_positive_and_non_finite_durations() {
        for secs in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e-12] {
            assert!(
                matches!(duration_from_secs(secs), Err(PlayerError::InvalidDuration(_))),
                "{secs} should be rejected"
            );
        }
    }
}
