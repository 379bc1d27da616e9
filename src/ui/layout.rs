use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        catalog::{BADGES, CARDS, NAV_OPTIONS},
        components::{
            badges::BadgeRow, cards::CardGrid, controls::PlayerControlsWidget,
            progress::ProgressWidget, search::SearchPrompt, sidebar::Sidebar, toast::ToastStack,
            track_info::TrackInfo,
        },
        state::{Focus, HitRegions},
        util::get_active_track_icon,
    },
    util::colors,
};

const SIDEBAR_WIDTH: u16 = 24;
const PLAYER_HEIGHT: u16 = 5;
const TRACK_INFO_WIDTH: u16 = 28;

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let app = self.app;
        let state = &app.state;
        let focus_cursor = |focus: Focus, cursor: usize| (state.focus == focus).then_some(cursor);
        let mut regions = HitRegions::default();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(PLAYER_HEIGHT)])
            .split(area);

        let main_area = chunks[0];
        let player_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title("playdeck")
            .title_alignment(Alignment::Center);
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));

        let sidebar_inner = sidebar_block.inner(sidebar_area).inner(ratatui::layout::Margin {
            horizontal: 0,
            vertical: 1,
        });
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        f.render_widget(
            Sidebar::new(
                &NAV_OPTIONS,
                state.active_nav,
                focus_cursor(Focus::Sidebar, state.sidebar_cursor),
            ),
            sidebar_inner,
        );
        regions.nav = Sidebar::item_areas(sidebar_inner, NAV_OPTIONS.len());

        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content_inner);

        f.render_widget(
            BadgeRow::new(&BADGES, focus_cursor(Focus::Badges, state.badge_cursor)),
            content_chunks[0],
        );
        regions.badges = BadgeRow::badge_areas(content_chunks[0], &BADGES);

        let heading = NAV_OPTIONS
            .get(state.active_nav)
            .map_or("", |option| option.heading);
        f.render_widget(
            Line::styled(
                format!(" {heading}"),
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            content_chunks[1],
        );

        let icon = get_active_track_icon(app.playback.is_playing, state.frame);
        f.render_widget(CardGrid::new(&CARDS, state, icon), content_chunks[2]);
        regions.cards = CardGrid::card_areas(content_chunks[2], CARDS.len());

        let player_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let player_inner = player_block.inner(player_area);
        f.render_widget(player_block, player_area);

        let player_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1)])
            .split(player_inner);

        let top_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(TRACK_INFO_WIDTH),
                Constraint::Min(1),
                Constraint::Length(TRACK_INFO_WIDTH),
            ])
            .split(player_rows[0]);

        let track_info = match &app.playback.track {
            Some(track) => TrackInfo::new(&track.title, Some(track.artist.as_str())),
            None => TrackInfo::new("No track", None),
        };
        f.render_widget(track_info, top_row[0]);

        f.render_widget(
            PlayerControlsWidget::new(
                app.playback.is_playing,
                focus_cursor(Focus::Controls, state.control_cursor),
            ),
            top_row[1],
        );
        regions.controls = PlayerControlsWidget::button_areas(top_row[1]);

        f.render_widget(
            ProgressWidget::new(
                app.playback.current_time,
                app.playback.fraction,
                app.playback.duration_secs,
                state.focus == Focus::SeekBar,
            ),
            player_rows[1],
        );
        regions.seek_bar = Some(ProgressWidget::bar_area(player_rows[1]));

        let now = Instant::now();
        let toasts = app
            .toasts
            .visible(now)
            .map(|(toast, phase)| (toast.message.as_str(), phase.visible_ratio()))
            .collect();
        f.render_widget(ToastStack::new(toasts), area);

        if let Some(input) = &state.search_input {
            f.render_widget(SearchPrompt::new(input), area);
        }

        app.regions = regions;
    }
}
