use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    widgets::{Block, Widget},
};

/// A one-line range control: the played part fills from the left with
/// eighth-block precision.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeekGauge<'a> {
    block: Option<Block<'a>>,
    ratio: f64,
    use_unicode: bool,
    played_style: Style,
    remaining_style: Style,
}

impl<'a> SeekGauge<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Out-of-range ratios are clamped; the gauge only ever draws.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self
    }

    pub const fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }

    pub fn played_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.played_style = style.into();
        self
    }

    pub fn remaining_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.remaining_style = style.into();
        self
    }
}

fn get_unicode_block(frac: f64) -> &'static str {
    match (frac * 8.0).round() as u16 {
        0 => " ",
        1 => symbols::block::ONE_EIGHTH,
        2 => symbols::block::ONE_QUARTER,
        3 => symbols::block::THREE_EIGHTHS,
        4 => symbols::block::HALF,
        5 => symbols::block::FIVE_EIGHTHS,
        6 => symbols::block::THREE_QUARTERS,
        7 => symbols::block::SEVEN_EIGHTHS,
        _ => symbols::block::FULL,
    }
}

impl Widget for SeekGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(ref block) = self.block {
            block.render(area, buf);
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        if inner.is_empty() {
            return;
        }

        let played_pos = inner.width as f64 * self.ratio;

        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                let pos = (x - inner.left()) as f64;

                let (symbol, style) = if pos + 1.0 <= played_pos {
                    (symbols::block::FULL, self.played_style)
                } else if pos < played_pos && self.use_unicode {
                    (get_unicode_block(played_pos - pos), self.played_style)
                } else {
                    (symbols::line::HORIZONTAL, self.remaining_style)
                };

                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_fg(style.fg.unwrap_or_default())
                    .set_bg(style.bg.unwrap_or_default());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn fills_played_share() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        SeekGauge::default().ratio(0.5).render(area, &mut buf);
        assert_eq!(line(&buf), "█████─────");
    }

    #[test]
    fn partial_cell_uses_eighth_blocks() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        SeekGauge::default()
            .ratio(0.375)
            .use_unicode(true)
            .render(area, &mut buf);
        assert_eq!(line(&buf), "█▌──");
    }

    #[test]
    fn clamps_out_of_range_ratio() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        SeekGauge::default().ratio(7.0).render(area, &mut buf);
        assert_eq!(line(&buf), "████");
    }
}
