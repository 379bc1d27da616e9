use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::{ui::catalog::NavOption, util::colors};

pub struct Sidebar<'a> {
    items: &'a [NavOption],
    active_index: usize,
    cursor: Option<usize>,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: &'a [NavOption], active_index: usize, cursor: Option<usize>) -> Self {
        Self {
            items,
            active_index,
            cursor,
        }
    }

    /// One row per option, starting at the top of `area`.
    pub fn item_areas(area: Rect, count: usize) -> Vec<Rect> {
        (0..count as u16)
            .map(|i| Rect::new(area.x, area.y + i * 2, area.width, 1))
            .filter(|r| r.y < area.bottom())
            .collect()
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (item, row)) in self
            .items
            .iter()
            .zip(Self::item_areas(area, self.items.len()))
            .enumerate()
        {
            let mut style = if i == self.active_index {
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::MUTED)
            };
            if self.cursor == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let marker = if i == self.active_index {
                Span::styled("▌", Style::default().fg(colors::PRIMARY))
            } else {
                Span::raw(" ")
            };

            Line::from(vec![
                marker,
                Span::styled(format!(" {}  {}", item.icon, item.label), style),
            ])
            .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::NAV_OPTIONS;

    #[test]
    fn only_the_active_option_is_marked() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&NAV_OPTIONS, 1, None).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 2)].symbol(), "▌");
        assert_eq!(buf[(0, 4)].symbol(), " ");
    }

    #[test]
    fn item_areas_are_clipped_to_height() {
        let rows = Sidebar::item_areas(Rect::new(0, 0, 10, 3), 3);
        assert_eq!(rows.len(), 2);
    }
}
