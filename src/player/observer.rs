use flume::Sender;

use crate::{event::events::Event, player::track::Track};

/// Receives playback notifications from a [`PlaybackSimulator`](crate::player::simulator::PlaybackSimulator).
///
/// Callbacks run while the simulator holds its state lock, so they must return
/// quickly and must not call back into the simulator.
pub trait PlaybackObserver: Send + Sync {
    fn on_tick(&self, current_time: f64, fraction: f64);

    fn on_state_change(&self, _is_playing: bool) {}

    /// Fired when a new track is loaded, ahead of the progress reset for it.
    fn on_track_change(&self, _track: &Track) {}
}

impl PlaybackObserver for Sender<Event> {
    fn on_tick(&self, current_time: f64, fraction: f64) {
        let _ = self.send(Event::PlaybackProgress {
            current_time,
            fraction,
        });
    }

    fn on_state_change(&self, is_playing: bool) {
        let _ = self.send(Event::PlaybackStateChanged(is_playing));
    }

    fn on_track_change(&self, track: &Track) {
        let _ = self.send(Event::TrackChanged(track.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlaybackSimulator, PlayerConfig};

    #[tokio::test(start_paused = true)]
    async fn track_change_precedes_its_progress_reset() {
        let (tx, rx) = flume::unbounded();
        let player = PlaybackSimulator::new(PlayerConfig::default(), tx);

        player.seek(0.5).unwrap();
        player.select_track(30.0, "Chill Hits", "Various").unwrap();

        let events: Vec<Event> = rx.drain().collect();
        assert_eq!(
            events,
            vec![
                Event::PlaybackProgress {
                    current_time: 106.5,
                    fraction: 0.5,
                },
                Event::TrackChanged(Track::new("Chill Hits", "Various", 30.0).unwrap()),
                Event::PlaybackProgress {
                    current_time: 0.0,
                    fraction: 0.0,
                },
                Event::PlaybackStateChanged(true),
            ]
        );
    }
}
