use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, error, info};

use crate::player::{
    commands::{PlayerCommand, SkipDirection},
    config::{PlayerConfig, SeekPolicy},
    error::PlayerError,
    observer::PlaybackObserver,
    progress::Progress,
    state::{PlaybackState, PlayerStatus, TICK_INTERVAL, TICK_STEP, TickOutcome},
    ticker::{TickRuntime, Ticker},
    track::Track,
};

struct Inner {
    state: PlaybackState,
    track: Option<Track>,
    ticker: Option<Ticker>,
    // Bumped whenever the tick source is replaced or stopped, so a tick that
    // raced with a cancellation can tell it is stale.
    generation: u64,
}

struct Shared {
    inner: Mutex<Inner>,
    observer: Box<dyn PlaybackObserver>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify_progress(&self, state: &PlaybackState) {
        self.observer
            .on_tick(state.current_time(), state.fraction());
    }

    fn tick(&self, generation: u64) -> ControlFlow<()> {
        let mut inner = self.lock();
        if inner.generation != generation {
            return ControlFlow::Break(());
        }

        match inner.state.advance(TICK_STEP) {
            TickOutcome::Advanced => {
                self.notify_progress(&inner.state);
                ControlFlow::Continue(())
            }
            TickOutcome::Wrapped => {
                inner.generation += 1;
                inner.ticker = None;
                info!(
                    title = inner.track.as_ref().map(|t| t.title.as_str()),
                    "track ended"
                );
                self.notify_progress(&inner.state);
                self.observer.on_state_change(false);
                ControlFlow::Break(())
            }
            TickOutcome::Idle => ControlFlow::Break(()),
        }
    }
}

/// Simulated playback of a single track.
///
/// While playing, a [`Ticker`] advances the position by [`TICK_STEP`] every
/// [`TICK_INTERVAL`]. Reaching the end rewinds to zero and pauses; there is no
/// queue to advance to. At most one ticker is alive at any time.
///
/// Ticks run on the tokio runtime the simulator was created in. Created
/// outside of one, it starts a single-worker runtime of its own.
pub struct PlaybackSimulator {
    shared: Arc<Shared>,
    config: PlayerConfig,
    runtime: Option<TickRuntime>,
}

impl PlaybackSimulator {
    pub fn new(config: PlayerConfig, observer: impl PlaybackObserver + 'static) -> Self {
        let inner = Inner {
            state: PlaybackState::new(config.default_duration),
            track: None,
            ticker: None,
            generation: 0,
        };

        let runtime = match TickRuntime::current_or_owned() {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                error!("Cannot start a runtime for playback ticks: {e}");
                None
            }
        };

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                observer: Box::new(observer),
            }),
            config,
            runtime,
        }
    }

    pub fn handle_command(&self, cmd: PlayerCommand) -> Result<(), PlayerError> {
        match cmd {
            PlayerCommand::TogglePlay => {
                self.toggle_play();
                Ok(())
            }
            PlayerCommand::Seek(fraction) => {
                if let Some(fraction) = self.config.seek_policy.apply(fraction)? {
                    self.seek_within(fraction);
                }
                Ok(())
            }
            PlayerCommand::Skip(direction) => {
                self.skip(direction);
                Ok(())
            }
            PlayerCommand::SelectTrack(track) => {
                self.load_track(track);
                Ok(())
            }
        }
    }

    /// Flips between playing and paused and returns whether it is now playing.
    pub fn toggle_play(&self) -> bool {
        let mut inner = self.shared.lock();

        let now_playing = if inner.state.is_playing() {
            inner.state.set_status(PlayerStatus::Paused);
            self.stop_ticking(&mut inner);
            info!(position = inner.state.current_time(), "Paused");
            false
        } else {
            if inner.state.at_end() {
                inner.state.rewind();
                self.shared.notify_progress(&inner.state);
            }
            inner.state.set_status(PlayerStatus::Playing);
            self.start_ticking(&mut inner);
            info!(position = inner.state.current_time(), "Playing...");
            true
        };

        self.shared.observer.on_state_change(now_playing);
        now_playing
    }

    /// Moves to `fraction` of the current track without touching play state.
    ///
    /// Seeking to `1.0` while playing counts as the track ending.
    pub fn seek(&self, fraction: f64) -> Result<(), PlayerError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PlayerError::OutOfRange(fraction));
        }

        self.seek_within(fraction);
        Ok(())
    }

    /// Like [`seek`](Self::seek) but pins the fraction into range and ignores NaN.
    pub fn seek_clamped(&self, fraction: f64) {
        if let Ok(Some(fraction)) = SeekPolicy::Clamp.apply(fraction) {
            self.seek_within(fraction);
        }
    }

    fn seek_within(&self, fraction: f64) {
        let mut inner = self.shared.lock();
        let ended = inner.state.seek_to(fraction);
        debug!(fraction, position = inner.state.current_time(), "seek");

        self.shared.notify_progress(&inner.state);
        if ended {
            self.stop_ticking(&mut inner);
            self.shared.observer.on_state_change(false);
        }
    }

    /// Rewinds to the start. Both directions do the same thing since there is
    /// no track list to move through.
    pub fn skip(&self, direction: SkipDirection) {
        let mut inner = self.shared.lock();
        inner.state.rewind();
        match direction {
            SkipDirection::Previous => info!("Playing previous track"),
            SkipDirection::Next => info!("Playing next track"),
        }
        self.shared.notify_progress(&inner.state);
    }

    /// Starts playing a new track of `duration_secs` from the beginning.
    pub fn select_track(
        &self,
        duration_secs: f64,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Result<(), PlayerError> {
        let track = Track::new(title, artist, duration_secs)?;
        self.load_track(track);
        Ok(())
    }

    fn load_track(&self, track: Track) {
        let mut inner = self.shared.lock();
        info!(
            title = track.title.as_str(),
            artist = track.artist.as_str(),
            "Now playing: {} by {}",
            track.title,
            track.artist
        );

        inner.state.load(track.duration);
        self.shared.observer.on_track_change(&track);
        inner.track = Some(track);
        self.start_ticking(&mut inner);

        self.shared.notify_progress(&inner.state);
        self.shared.observer.on_state_change(true);
    }

    fn start_ticking(&self, inner: &mut Inner) {
        inner.generation += 1;
        let generation = inner.generation;
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);

        let Some(runtime) = self.runtime.as_ref().and_then(TickRuntime::handle) else {
            error!("No runtime to drive playback ticks");
            inner.ticker = None;
            return;
        };

        // Replacing the old handle aborts it.
        inner.ticker = Some(Ticker::spawn(runtime, TICK_INTERVAL, move || {
            match shared.upgrade() {
                Some(shared) => shared.tick(generation),
                None => ControlFlow::Break(()),
            }
        }));
    }

    fn stop_ticking(&self, inner: &mut Inner) {
        inner.generation += 1;
        inner.ticker = None;
    }

    pub fn snapshot(&self) -> PlaybackState {
        self.shared.lock().state.clone()
    }

    pub fn status(&self) -> PlayerStatus {
        self.shared.lock().state.status()
    }

    pub fn is_playing(&self) -> bool {
        self.shared.lock().state.is_playing()
    }

    pub fn current_time(&self) -> f64 {
        self.shared.lock().state.current_time()
    }

    pub fn duration_secs(&self) -> f64 {
        self.shared.lock().state.duration_secs()
    }

    pub fn progress(&self) -> Progress {
        self.shared.lock().state.progress()
    }

    pub fn current_track(&self) -> Option<Track> {
        self.shared.lock().track.clone()
    }

    /// Whether a tick source is currently alive.
    pub fn is_ticking(&self) -> bool {
        self.shared
            .lock()
            .ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}

impl Drop for PlaybackSimulator {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        inner.generation += 1;
        inner.ticker = None;
    }
}
