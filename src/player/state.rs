use std::time::Duration;

use crate::player::progress::Progress;

/// Cadence of the playback tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// How far playback advances on each tick.
pub const TICK_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    #[default]
    Paused,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// The track reached its end, rewound to zero and paused.
    Wrapped,
    /// Nothing to do because playback is paused.
    Idle,
}

/// Position, length and play/pause status of the simulated track.
///
/// Mutation is crate-private: only the simulator may flip the status,
/// because it also owns the tick source that must follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    status: PlayerStatus,
    position: Duration,
    duration: Duration,
}

impl PlaybackState {
    pub fn new(duration: Duration) -> Self {
        Self {
            status: PlayerStatus::Paused,
            position: Duration::ZERO,
            duration,
        }
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.position.as_secs_f64()
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.current_time(), self.fraction())
    }

    pub(crate) fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.duration
    }

    pub(crate) fn advance(&mut self, step: Duration) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }

        if self.position + step >= self.duration {
            self.position = Duration::ZERO;
            self.status = PlayerStatus::Paused;
            TickOutcome::Wrapped
        } else {
            self.position += step;
            TickOutcome::Advanced
        }
    }

    /// Moves to `fraction` of the track. `fraction` must already be in `0.0..=1.0`.
    ///
    /// Landing on the very end while playing is treated as the track ending,
    /// so the playing invariant `position < duration` survives. Returns `true`
    /// in that case.
    pub(crate) fn seek_to(&mut self, fraction: f64) -> bool {
        debug_assert!((0.0..=1.0).contains(&fraction));

        let target = self.duration.mul_f64(fraction).min(self.duration);
        if self.is_playing() && target >= self.duration {
            self.position = Duration::ZERO;
            self.status = PlayerStatus::Paused;
            return true;
        }

        self.position = target;
        false
    }

    pub(crate) fn rewind(&mut self) {
        self.position = Duration::ZERO;
    }

    pub(crate) fn load(&mut self, duration: Duration) {
        self.duration = duration;
        self.position = Duration::ZERO;
        self.status = PlayerStatus::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playing(duration_ms: u64) -> PlaybackState {
        let mut state = PlaybackState::new(Duration::from_millis(duration_ms));
        state.set_status(PlayerStatus::Playing);
        state
    }

    #[test]
    fn paused_state_does_not_advance() {
        let mut state = PlaybackState::new(Duration::from_secs(10));
        assert_eq!(state.advance(TICK_STEP), TickOutcome::Idle);
        assert_eq!(state.position(), Duration::ZERO);
    }

    #[test]
    fn hundred_ticks_end_a_ten_second_track() {
        let mut state = playing(10_000);

        for _ in 0..99 {
            assert_eq!(state.advance(TICK_STEP), TickOutcome::Advanced);
        }
        assert_eq!(state.position(), Duration::from_millis(9_900));

        assert_eq!(state.advance(TICK_STEP), TickOutcome::Wrapped);
        assert_eq!(state.status(), PlayerStatus::Paused);
        assert_eq!(state.position(), Duration::ZERO);
    }

    #[test]
    fn seek_to_end_while_playing_ends_the_track() {
        let mut state = playing(10_000);
        assert!(state.seek_to(1.0));
        assert!(!state.is_playing());
        assert_eq!(state.position(), Duration::ZERO);
    }

    #[test]
    fn seek_to_end_while_paused_parks_at_end() {
        let mut state = PlaybackState::new(Duration::from_secs(10));
        assert!(!state.seek_to(1.0));
        assert!(state.at_end());
        assert_eq!(state.fraction(), 1.0);
    }

    #[test]
    fn load_resets_position_and_plays() {
        let mut state = playing(10_000);
        state.seek_to(0.5);
        state.load(Duration::from_secs(30));
        assert!(state.is_playing());
        assert_eq!(state.position(), Duration::ZERO);
        assert_eq!(state.duration(), Duration::from_secs(30));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Tick,
        Toggle,
        Seek(f64),
        Rewind,
        Load(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => Just(Op::Tick),
            1 => Just(Op::Toggle),
            1 => (0.0f64..=1.0).prop_map(Op::Seek),
            1 => Just(Op::Rewind),
            1 => (1u64..20_000).prop_map(Op::Load),
        ]
    }

    proptest! {
        #[test]
        fn position_stays_below_duration_while_playing(
            duration_ms in 1u64..20_000,
            ops in proptest::collection::vec(op(), 0..400),
        ) {
            let mut state = PlaybackState::new(Duration::from_millis(duration_ms));

            for op in ops {
                match op {
                    Op::Tick => {
                        state.advance(TICK_STEP);
                    }
                    Op::Toggle => {
                        if state.is_playing() {
                            state.set_status(PlayerStatus::Paused);
                        } else {
                            if state.at_end() {
                                state.rewind();
                            }
                            state.set_status(PlayerStatus::Playing);
                        }
                    }
                    Op::Seek(fraction) => {
                        state.seek_to(fraction);
                    }
                    Op::Rewind => state.rewind(),
                    Op::Load(ms) => state.load(Duration::from_millis(ms)),
                }

                if state.is_playing() {
                    prop_assert!(state.position() < state.duration());
                    prop_assert!(state.fraction() < 1.0);
                }
                prop_assert!((0.0..=1.0).contains(&state.fraction()));
            }
        }

        #[test]
        fn load_always_starts_from_zero(duration_ms in 1u64..1_000_000) {
            let mut state = PlaybackState::new(Duration::from_secs(213));
            state.load(Duration::from_millis(duration_ms));
            prop_assert!(state.is_playing());
            prop_assert_eq!(state.position(), Duration::ZERO);
            prop_assert_eq!(state.duration(), Duration::from_millis(duration_ms));
        }
    }
}
