use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    player::format_time,
    ui::{catalog::Card, state::UiState},
    util::colors,
};

pub const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 5;
// One spare row above each card so a lifted card has somewhere to rise to.
const SLOT_HEIGHT: u16 = CARD_HEIGHT + 1;

pub struct CardGrid<'a> {
    cards: &'a [Card],
    state: &'a UiState,
    playing_icon: &'a str,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: &'a [Card], state: &'a UiState, playing_icon: &'a str) -> Self {
        Self {
            cards,
            state,
            playing_icon,
        }
    }

    /// Resting position of each card. Cards that do not fit are left out.
    pub fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
        let width = area.width / COLUMNS as u16;
        if width == 0 {
            return Vec::new();
        }

        (0..count)
            .map(|i| {
                let col = (i % COLUMNS) as u16;
                let row = (i / COLUMNS) as u16;
                Rect::new(
                    area.x + col * width,
                    area.y + row * SLOT_HEIGHT + 1,
                    width.saturating_sub(1),
                    CARD_HEIGHT,
                )
            })
            .take_while(|r| r.bottom() <= area.bottom())
            .collect()
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (card, rest)) in self
            .cards
            .iter()
            .zip(Self::card_areas(area, self.cards.len()))
            .enumerate()
        {
            let lifted = self.state.is_card_lifted(i);
            let slot = if lifted {
                Rect { y: rest.y - 1, ..rest }
            } else {
                rest
            };

            let border_style = if lifted {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };

            let mut title = vec![Span::styled(
                card.title,
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )];
            if self.state.now_playing_card == Some(i) {
                title.insert(
                    0,
                    Span::styled(
                        format!("{} ", self.playing_icon),
                        Style::default().fg(colors::PRIMARY),
                    ),
                );
            }

            let body = vec![
                Line::from(title),
                Line::styled(card.info, Style::default().fg(colors::MUTED)),
                Line::styled(
                    format_time(card.duration_secs),
                    Style::default().fg(colors::NEUTRAL),
                ),
            ];

            Paragraph::new(body)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(colors::SURFACE))
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
    use crate::ui::catalog::CARDS;
    use crate::ui::state::Focus;

    #[test]
    fn grid_wraps_after_three_columns() {
        let areas = CardGrid::card_areas(Rect::new(0, 0, 90, 12), CARDS.len());
        assert_eq!(areas.len(), 6);
        assert_eq!(areas[0], Rect::new(0, 1, 29, 5));
        assert_eq!(areas[3], Rect::new(0, 7, 29, 5));
    }

    #[test]
    fn cards_outside_the_area_are_dropped() {
        let areas = CardGrid::card_areas(Rect::new(0, 0, 90, 8), CARDS.len());
        assert_eq!(areas.len(), 3);
    }

    #[test]
    fn lifted_card_moves_up_one_row() {
        let area = Rect::new(0, 0, 90, 12);
        let mut state = UiState::new();
        state.focus = Focus::Sidebar;
        state.hovered_card = Some(1);

        let mut buf = Buffer::empty(area);
        CardGrid::new(&CARDS, &state, "•").render(area, &mut buf);

        // Card 0 rests on row 1, card 1 is hovered and drawn from row 0.
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), "╭");
        assert_eq!(buf[(30, 0)].symbol(), "╭");
        assert_eq!(buf[(30, 1)].symbol(), "│");
    }
}
