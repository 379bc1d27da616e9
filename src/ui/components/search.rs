use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::{ui::catalog::SEARCH_PROMPT, util::colors};

/// Modal prompt for a search query.
pub struct SearchPrompt<'a> {
    input: &'a str,
}

impl<'a> SearchPrompt<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn popup_area(area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(row);
        popup
    }
}

impl Widget for SearchPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        Clear.render(popup, buf);

        let text = if self.input.is_empty() {
            Line::from(Span::styled(SEARCH_PROMPT, Style::default().fg(colors::NEUTRAL)))
        } else {
            Line::from(vec![
                Span::styled(self.input, Style::default().fg(colors::TEXT)),
                Span::styled("▏", Style::default().fg(colors::PRIMARY)),
            ])
        };

        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(colors::PRIMARY))
                    .title(" Search "),
            )
            .style(Style::default().bg(colors::SURFACE))
            .render(popup, buf);
    }
}
