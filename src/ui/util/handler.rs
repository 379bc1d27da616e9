use std::time::Instant;

use ratatui::crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        catalog::{BADGES, PLAYER_CONTROLS},
        input::InputHandler,
        message::AppMessage,
        state::Hit,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event and applies it along with anything
    /// queued on the event channel. Returns whether the frame needs redrawing.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        let drained = Self::drain_actions(app);
        Ok(should_render || drained > 0)
    }

    /// Applies everything the simulator and the toast surface have queued.
    pub fn drain_actions(app: &mut App) -> usize {
        let mut handled = 0;
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::Resize(..) => {
                tui.clear()?;
            }
            other => return Ok(Self::handle_terminal_event(app, other)),
        }

        Ok(true)
    }

    /// Terminal events that do not need the terminal itself.
    pub fn handle_terminal_event(app: &mut App, evt: TerminalEvent) -> bool {
        match evt {
            TerminalEvent::Init => {
                debug!("terminal ready");
                true
            }
            TerminalEvent::FocusLost => {
                app.has_focus = false;
                false
            }
            TerminalEvent::FocusGained | TerminalEvent::Resize(..) => {
                app.has_focus = true;
                true
            }
            TerminalEvent::Key(key) => {
                Self::handle_key_event(app, key);
                true
            }
            TerminalEvent::Mouse(mouse) => {
                Self::handle_mouse_event(app, mouse);
                true
            }
            TerminalEvent::Tick => {
                app.state.frame = app.state.frame.wrapping_add(1);
                app.toasts.prune(Instant::now());
                app.has_focus
            }
        }
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::TrackChanged(track) => {
                app.playback.duration_secs = track.duration.as_secs_f64();
                app.playback.track = Some(track);
            }
            Event::PlaybackProgress {
                current_time,
                fraction,
            } => {
                app.playback.current_time = current_time;
                app.playback.fraction = fraction;
            }
            Event::PlaybackStateChanged(is_playing) => {
                app.playback.is_playing = is_playing;
            }
            Event::Notify(message) => {
                app.toasts.push(message);
            }
        }
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt, &app.state) {
            app.update(msg);
        }
    }

    pub fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        // The search prompt is modal; a click anywhere closes it and goes no further.
        if app.state.is_searching() {
            if let MouseEventKind::Down(_) = evt.kind {
                app.update(AppMessage::CancelSearch);
            }
            return;
        }

        let hit = app.regions.hit(evt.column, evt.row);

        match evt.kind {
            MouseEventKind::Moved => {
                let hovered = match hit {
                    Some(Hit::Card(i)) => Some(i),
                    _ => None,
                };
                if hovered != app.state.hovered_card {
                    app.update(AppMessage::HoverCard(hovered));
                }
            }
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(Hit::Nav(i)) => app.update(AppMessage::Navigate(i)),
                Some(Hit::Badge(i)) => {
                    if let Some(badge) = BADGES.get(i) {
                        app.update(AppMessage::Badge(*badge));
                    }
                }
                Some(Hit::Card(i)) => app.update(AppMessage::PlayCard(i)),
                Some(Hit::Control(i)) => {
                    if let Some(control) = PLAYER_CONTROLS.get(i) {
                        app.update(AppMessage::Control(*control));
                    }
                }
                Some(Hit::SeekBar(fraction)) => {
                    app.state.dragging_seek = true;
                    app.update(AppMessage::SeekTo(fraction));
                }
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) if app.state.dragging_seek => {
                if let Some(fraction) = app.regions.seek_fraction(evt.column) {
                    app.update(AppMessage::SeekTo(fraction));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => app.state.dragging_seek = false,
            _ => {}
        }
    }
}
