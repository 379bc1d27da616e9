use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

pub struct TrackInfo<'a> {
    title: &'a str,
    artist: Option<&'a str>,
}

impl<'a> TrackInfo<'a> {
    pub fn new(title: &'a str, artist: Option<&'a str>) -> Self {
        Self { title, artist }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + ch.to_string().width() + 1 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

impl Widget for TrackInfo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(1) as usize;
        let mut lines = vec![Line::styled(
            truncate(self.title, width),
            Style::default()
                .fg(colors::TEXT)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(artist) = self.artist {
            lines.push(Line::styled(
                truncate(artist, width),
                Style::default().fg(colors::MUTED),
            ));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
