use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    event::events::Event,
    player::{PlaybackSimulator, PlayerCommand, SkipDirection},
    ui::{
        catalog::{
            BADGES, Badge, CARDS, NAV_OPTIONS, PLAYER_CONTROLS, PlayerControl, SEARCH_NAV_INDEX,
            USER_MENU_MESSAGE,
        },
        components::cards::COLUMNS,
        layout::AppLayout,
        message::{AppMessage, Direction},
        state::{Focus, HitRegions, PlaybackView, UiState},
        toast::ToastQueue,
        tui,
        util::handler::EventHandler,
    },
};

pub struct App {
    pub config: AppConfig,
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub player: PlaybackSimulator,
    pub state: UiState,
    pub playback: PlaybackView,
    pub toasts: ToastQueue,
    pub regions: HitRegions,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let player = PlaybackSimulator::new(config.player.clone(), event_tx.clone());
        let progress = player.progress();
        let duration_secs = player.duration_secs();
        let toasts = ToastQueue::new(config.ui.toast_lifetime, config.ui.toast_slide);

        Self {
            config,
            event_rx,
            event_tx,
            player,
            state: UiState::new(),
            playback: PlaybackView {
                track: None,
                duration_secs,
                current_time: progress.current_time,
                fraction: progress.fraction,
                is_playing: false,
            },
            toasts,
            regions: HitRegions::default(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.config.ui.frame_rate)?.mouse(self.config.ui.mouse);
        tui.enter()?;

        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    /// Hands a message to the toast surface.
    pub fn notify(&self, message: impl Into<String>) {
        let _ = self.event_tx.send(Event::Notify(message.into()));
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => {
                self.player.toggle_play();
            }
            AppMessage::Control(control) => self.handle_control(control),
            AppMessage::SeekTo(fraction) => self.seek(fraction),
            AppMessage::SeekBy(delta) => {
                let fraction = self.player.progress().fraction + delta;
                self.seek(fraction);
            }
            AppMessage::UserMenu => self.notify(USER_MENU_MESSAGE),
            AppMessage::Navigate(index) => self.navigate(index),
            AppMessage::FocusNext => self.state.focus = self.state.focus.next(),
            AppMessage::FocusPrevious => self.state.focus = self.state.focus.previous(),
            AppMessage::Move(direction) => self.move_cursor(direction),
            AppMessage::Activate => self.activate(),
            AppMessage::PlayCard(index) => self.play_card(index),
            AppMessage::HoverCard(hovered) => self.state.hovered_card = hovered,
            AppMessage::Badge(badge) => self.press_badge(badge),
            AppMessage::SearchInput(c) => {
                if let Some(input) = self.state.search_input.as_mut() {
                    input.push(c);
                }
            }
            AppMessage::SearchBackspace => {
                if let Some(input) = self.state.search_input.as_mut() {
                    input.pop();
                }
            }
            AppMessage::SubmitSearch => {
                let query = self.state.search_input.take().unwrap_or_default();
                let query = query.trim();
                if !query.is_empty() {
                    info!("Searching for: {query}");
                    self.notify(format!("Searching for \"{query}\"..."));
                }
            }
            AppMessage::CancelSearch => self.state.search_input = None,
        }
    }

    fn handle_control(&mut self, control: PlayerControl) {
        match control {
            PlayerControl::Shuffle => info!("Shuffle toggled"),
            PlayerControl::Previous => self.player.skip(SkipDirection::Previous),
            PlayerControl::PlayPause => {
                self.player.toggle_play();
            }
            PlayerControl::Next => self.player.skip(SkipDirection::Next),
            PlayerControl::Repeat => info!("Repeat mode toggled"),
        }
    }

    fn seek(&mut self, fraction: f64) {
        if let Err(e) = self.player.handle_command(PlayerCommand::Seek(fraction)) {
            warn!("Ignoring seek: {e}");
        }
    }

    fn navigate(&mut self, index: usize) {
        let Some(option) = NAV_OPTIONS.get(index) else {
            return;
        };

        self.state.active_nav = index;
        self.state.sidebar_cursor = index;
        info!("Navigating to: {}", option.label);

        if index == SEARCH_NAV_INDEX {
            self.state.search_input = Some(String::new());
        }
    }

    fn play_card(&mut self, index: usize) {
        let Some(card) = CARDS.get(index) else {
            return;
        };

        info!("Playing: {} - {}", card.title, card.info);
        match self
            .player
            .select_track(card.duration_secs, card.title, card.info)
        {
            Ok(()) => {
                self.state.now_playing_card = Some(index);
                self.state.card_cursor = index;
            }
            Err(e) => warn!("Cannot play {}: {e}", card.title),
        }
    }

    fn press_badge(&mut self, badge: Badge) {
        info!("Button clicked: {}", badge.label());
        self.notify(badge.message());
    }

    fn move_cursor(&mut self, direction: Direction) {
        let len = self.state.focused_len();
        let step = |cursor: usize, delta: isize| -> usize {
            (cursor as isize + delta).clamp(0, len as isize - 1) as usize
        };

        match (self.state.focus, direction) {
            (Focus::Sidebar, Direction::Up) => {
                self.state.sidebar_cursor = step(self.state.sidebar_cursor, -1)
            }
            (Focus::Sidebar, Direction::Down) => {
                self.state.sidebar_cursor = step(self.state.sidebar_cursor, 1)
            }
            (Focus::Badges, Direction::Left) => {
                self.state.badge_cursor = step(self.state.badge_cursor, -1)
            }
            (Focus::Badges, Direction::Right) => {
                self.state.badge_cursor = step(self.state.badge_cursor, 1)
            }
            (Focus::Cards, Direction::Left) => {
                self.state.card_cursor = step(self.state.card_cursor, -1)
            }
            (Focus::Cards, Direction::Right) => {
                self.state.card_cursor = step(self.state.card_cursor, 1)
            }
            (Focus::Cards, Direction::Up) => {
                self.state.card_cursor = step(self.state.card_cursor, -(COLUMNS as isize))
            }
            (Focus::Cards, Direction::Down) => {
                self.state.card_cursor = step(self.state.card_cursor, COLUMNS as isize)
            }
            (Focus::Controls, Direction::Left) => {
                self.state.control_cursor = step(self.state.control_cursor, -1)
            }
            (Focus::Controls, Direction::Right) => {
                self.state.control_cursor = step(self.state.control_cursor, 1)
            }
            _ => {}
        }
    }

    fn activate(&mut self) {
        match self.state.focus {
            Focus::Sidebar => self.update(AppMessage::Navigate(self.state.sidebar_cursor)),
            Focus::Badges => {
                if let Some(badge) = BADGES.get(self.state.badge_cursor) {
                    self.update(AppMessage::Badge(*badge));
                }
            }
            Focus::Cards => self.update(AppMessage::PlayCard(self.state.card_cursor)),
            Focus::Controls => {
                if let Some(control) = PLAYER_CONTROLS.get(self.state.control_cursor) {
                    self.update(AppMessage::Control(*control));
                }
            }
            Focus::SeekBar => self.update(AppMessage::TogglePlayPause),
        }
    }
}
