use std::time::Duration;

use crate::player::error::PlayerError;

/// What a seek from the UI does with a fraction outside `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekPolicy {
    /// Pin to the nearest bound, and ignore NaN.
    #[default]
    Clamp,
    /// Surface [`PlayerError::OutOfRange`].
    Reject,
}

impl SeekPolicy {
    /// Returns the fraction to seek to, or `None` when the input should be ignored.
    pub fn apply(self, fraction: f64) -> Result<Option<f64>, PlayerError> {
        match self {
            SeekPolicy::Clamp if fraction.is_nan() => Ok(None),
            SeekPolicy::Clamp => Ok(Some(fraction.clamp(0.0, 1.0))),
            SeekPolicy::Reject if (0.0..=1.0).contains(&fraction) => Ok(Some(fraction)),
            SeekPolicy::Reject => Err(PlayerError::OutOfRange(fraction)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub default_duration: Duration,
    pub seek_policy: SeekPolicy,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            // 3:33
            default_duration: Duration::from_secs(213),
            seek_policy: SeekPolicy::Clamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pins_to_bounds() {
        assert_eq!(SeekPolicy::Clamp.apply(-0.5), Ok(Some(0.0)));
        assert_eq!(SeekPolicy::Clamp.apply(1.5), Ok(Some(1.0)));
        assert_eq!(SeekPolicy::Clamp.apply(0.25), Ok(Some(0.25)));
        assert_eq!(SeekPolicy::Clamp.apply(f64::NAN), Ok(None));
    }

    #[test]
    fn reject_surfaces_out_of_range() {
        assert_eq!(SeekPolicy::Reject.apply(1.0), Ok(Some(1.0)));
        assert_eq!(
            SeekPolicy::Reject.apply(1.01),
            Err(PlayerError::OutOfRange(1.01))
        );
        assert!(SeekPolicy::Reject.apply(f64::NAN).is_err());
    }
}
