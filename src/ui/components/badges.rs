use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{ui::catalog::Badge, util::colors};

pub struct BadgeRow<'a> {
    badges: &'a [Badge],
    cursor: Option<usize>,
}

impl<'a> BadgeRow<'a> {
    pub fn new(badges: &'a [Badge], cursor: Option<usize>) -> Self {
        Self { badges, cursor }
    }

    pub fn badge_areas(area: Rect, badges: &[Badge]) -> Vec<Rect> {
        Layout::horizontal(
            badges
                .iter()
                .map(|b| Constraint::Length(b.label().len() as u16 + 4)),
        )
        .flex(Flex::Start)
        .spacing(1)
        .split(area)
        .to_vec()
    }
}

impl Widget for BadgeRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (badge, slot)) in self
            .badges
            .iter()
            .zip(Self::badge_areas(area, self.badges))
            .enumerate()
        {
            let focused = self.cursor == Some(i);
            let (border_style, text_style) = if focused {
                (
                    Style::default().fg(colors::PRIMARY),
                    Style::default()
                        .fg(colors::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(colors::NEUTRAL),
                    Style::default().fg(colors::MUTED),
                )
            };

            Paragraph::new(badge.label())
                .style(text_style)
                .centered()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_set(border::ROUNDED)
                        .border_style(border_style),
                )
                .render(slot, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::BADGES;

    #[test]
    fn badges_are_laid_out_left_to_right() {
        let areas = BadgeRow::badge_areas(Rect::new(0, 0, 100, 3), &BADGES);
        assert_eq!(areas.len(), BADGES.len());
        assert_eq!(areas[0].x, 0);
        assert_eq!(areas[0].width, "Create playlist".len() as u16 + 4);
        assert!(areas.windows(2).all(|w| w[0].right() < w[1].x));
    }
}
