use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::{
    ui::catalog::{PlayerControl, PLAYER_CONTROLS},
    util::colors,
};

const BUTTON_WIDTH: u16 = 5;

/// Shuffle, previous, play/pause, next and repeat, centred in one row.
pub struct PlayerControlsWidget {
    is_playing: bool,
    cursor: Option<usize>,
}

impl PlayerControlsWidget {
    pub fn new(is_playing: bool, cursor: Option<usize>) -> Self {
        Self { is_playing, cursor }
    }

    pub fn button_areas(area: Rect) -> Vec<Rect> {
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
        Layout::horizontal([Constraint::Length(BUTTON_WIDTH); PLAYER_CONTROLS.len()])
            .flex(Flex::Center)
            .split(row)
            .to_vec()
    }

    fn style_for(&self, control: PlayerControl) -> Style {
        match control {
            // Full emphasis while playing, dimmed while paused.
            PlayerControl::PlayPause if self.is_playing => Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
            PlayerControl::PlayPause => Style::default()
                .fg(colors::MUTED)
                .add_modifier(Modifier::DIM),
            _ => Style::default().fg(colors::MUTED),
        }
    }
}

impl Widget for PlayerControlsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (control, slot)) in PLAYER_CONTROLS
            .iter()
            .zip(Self::button_areas(area))
            .enumerate()
        {
            let mut style = self.style_for(*control);
            if self.cursor == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let icon = Span::styled(format!(" {} ", control.icon(self.is_playing)), style);
            let x = slot.x + slot.width.saturating_sub(icon.width() as u16) / 2;
            buf.set_span(x, slot.y, &icon, slot.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn play_icon_follows_state() {
        let area = Rect::new(0, 0, 40, 1);

        let mut paused = Buffer::empty(area);
        PlayerControlsWidget::new(false, None).render(area, &mut paused);
        assert!(row(&paused, 0).contains('▶'));

        let mut playing = Buffer::empty(area);
        PlayerControlsWidget::new(true, None).render(area, &mut playing);
        assert!(row(&playing, 0).contains('⏸'));
    }

    #[test]
    fn buttons_are_centred() {
        let areas = PlayerControlsWidget::button_areas(Rect::new(0, 0, 45, 3));
        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0].x, 10);
        assert_eq!(areas[0].y, 1);
        assert_eq!(areas[4].right(), 35);
    }
}
