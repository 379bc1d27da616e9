use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;

/// Toasts stacked in the top-right corner. Each entry carries the share of
/// its width that has slid into view.
pub struct ToastStack<'a> {
    toasts: Vec<(&'a str, f64)>,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: Vec<(&'a str, f64)>) -> Self {
        Self { toasts }
    }

    pub fn toast_area(area: Rect, index: usize, message: &str, visible: f64) -> Option<Rect> {
        let full_width = (message.width() as u16 + 4).min(area.width.saturating_sub(MARGIN));
        let width = (full_width as f64 * visible.clamp(0.0, 1.0)).round() as u16;
        let y = area.y + MARGIN + index as u16 * TOAST_HEIGHT;
        if width == 0 || y + TOAST_HEIGHT > area.bottom() {
            return None;
        }

        let right = area.right().saturating_sub(MARGIN);
        Some(Rect::new(right - width, y, width, TOAST_HEIGHT))
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (message, visible)) in self.toasts.into_iter().enumerate() {
            let Some(slot) = Self::toast_area(area, i, message, visible) else {
                continue;
            };

            Clear.render(slot, buf);
            Paragraph::new(message)
                .style(
                    Style::default()
                        .fg(colors::TEXT)
                        .bg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_set(border::ROUNDED)
                        .border_style(Style::default().fg(colors::SECONDARY).bg(colors::PRIMARY)),
                )
                .render(slot, buf);
        }
    }
}
