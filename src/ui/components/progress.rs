use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::{player::format_time, ui::components::gauge::SeekGauge, util::colors};

const TIME_WIDTH: u16 = 7;

/// Current time, seek bar and total time on one line.
pub struct ProgressWidget {
    current_time: f64,
    fraction: f64,
    duration_secs: f64,
    focused: bool,
}

impl ProgressWidget {
    pub fn new(current_time: f64, fraction: f64, duration_secs: f64, focused: bool) -> Self {
        Self {
            current_time,
            fraction,
            duration_secs,
            focused,
        }
    }

    fn split(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(TIME_WIDTH),
                Constraint::Min(1),
                Constraint::Length(TIME_WIDTH),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Where the bar itself lands inside `area`, for hit testing.
    pub fn bar_area(area: Rect) -> Rect {
        let bar = Self::split(area)[1];
        Rect::new(bar.x, area.y + area.height / 2, bar.width, area.height.min(1))
    }
}

impl Widget for ProgressWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let [current, _, total] = Self::split(area);
        let row = area.y + area.height / 2;
        let label_style = Style::default().fg(colors::MUTED);

        let current_label = Span::styled(format_time(self.current_time), label_style);
        buf.set_span(current.x + 1, row, &current_label, current.width.saturating_sub(1));

        let total_label = Span::styled(format_time(self.duration_secs), label_style);
        buf.set_span(total.x + 1, row, &total_label, total.width.saturating_sub(1));

        let played = if self.focused {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT)
        };

        SeekGauge::default()
            .ratio(self.fraction)
            .use_unicode(true)
            .played_style(played)
            .remaining_style(Style::default().fg(colors::NEUTRAL))
            .render(Self::bar_area(area), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_time_labels() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        ProgressWidget::new(65.0, 65.0 / 213.0, 213.0, false).render(area, &mut buf);

        let text: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(text.starts_with(" 01:05"));
        assert!(text.trim_end().ends_with("03:33"));
    }

    #[test]
    fn bar_sits_between_labels() {
        let bar = ProgressWidget::bar_area(Rect::new(0, 10, 40, 3));
        assert_eq!(bar, Rect::new(TIME_WIDTH, 11, 40 - 2 * TIME_WIDTH, 1));
    }
}
