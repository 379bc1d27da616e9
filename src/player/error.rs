use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("Invalid track duration: {0} (must be a positive number of seconds)")]
    InvalidDuration(f64),

    #[error("Seek fraction out of range: {0} (expected 0.0..=1.0)")]
    OutOfRange(f64),
}
