use ratatui::layout::Rect;

use crate::{
    player::Track,
    ui::catalog::{BADGES, CARDS, NAV_OPTIONS, PLAYER_CONTROLS, PlayerControl},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Badges,
    #[default]
    Cards,
    Controls,
    SeekBar,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Sidebar,
        Focus::Badges,
        Focus::Cards,
        Focus::Controls,
        Focus::SeekBar,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Last rendered value of the simulator, fed by its notifications.
///
/// Every field comes from the event channel so a frame never pairs a new
/// track's length with the previous track's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackView {
    pub track: Option<Track>,
    pub duration_secs: f64,
    pub current_time: f64,
    pub fraction: f64,
    pub is_playing: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub focus: Focus,
    pub active_nav: usize,
    pub sidebar_cursor: usize,
    pub badge_cursor: usize,
    pub card_cursor: usize,
    pub hovered_card: Option<usize>,
    pub control_cursor: usize,
    pub now_playing_card: Option<usize>,
    pub search_input: Option<String>,
    pub dragging_seek: bool,
    pub frame: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            control_cursor: PLAYER_CONTROLS
                .iter()
                .position(|c| *c == PlayerControl::PlayPause)
                .unwrap_or(0),
            ..Self::default()
        }
    }

    pub fn is_card_lifted(&self, index: usize) -> bool {
        self.hovered_card == Some(index)
            || (self.focus == Focus::Cards && self.card_cursor == index)
    }

    pub fn is_searching(&self) -> bool {
        self.search_input.is_some()
    }

    /// Number of entries in the currently focused region.
    pub fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Sidebar => NAV_OPTIONS.len(),
            Focus::Badges => BADGES.len(),
            Focus::Cards => CARDS.len(),
            Focus::Controls => PLAYER_CONTROLS.len(),
            Focus::SeekBar => 1,
        }
    }
}

/// Screen areas from the last frame, for mouse hit testing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitRegions {
    pub nav: Vec<Rect>,
    pub badges: Vec<Rect>,
    pub cards: Vec<Rect>,
    pub controls: Vec<Rect>,
    pub seek_bar: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Nav(usize),
    Badge(usize),
    Card(usize),
    Control(usize),
    /// Fraction along the seek bar.
    SeekBar(f64),
}

impl HitRegions {
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = ratatui::layout::Position::new(column, row);
        let find = |rects: &[Rect]| rects.iter().position(|r| r.contains(position));

        if let Some(i) = find(&self.nav) {
            return Some(Hit::Nav(i));
        }
        if let Some(i) = find(&self.badges) {
            return Some(Hit::Badge(i));
        }
        if let Some(i) = find(&self.cards) {
            return Some(Hit::Card(i));
        }
        if let Some(i) = find(&self.controls) {
            return Some(Hit::Control(i));
        }
        self.seek_bar
            .filter(|bar| bar.contains(position))
            .map(|bar| Hit::SeekBar(Self::fraction_along(bar, column)))
    }

    /// Fraction along the seek bar even if the pointer has left it while dragging.
    pub fn seek_fraction(&self, column: u16) -> Option<f64> {
        self.seek_bar.map(|bar| Self::fraction_along(bar, column))
    }

    fn fraction_along(bar: Rect, column: u16) -> f64 {
        if bar.width <= 1 {
            return 0.0;
        }
        let offset = column.saturating_sub(bar.x) as f64;
        (offset / (bar.width - 1) as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::SeekBar.next(), Focus::Sidebar);
        assert_eq!(Focus::Sidebar.previous(), Focus::SeekBar);
        assert_eq!(Focus::Cards.next().previous(), Focus::Cards);
    }

    #[test]
    fn hovered_or_focused_card_is_lifted() {
        let mut state = UiState::new();
        state.card_cursor = 2;
        assert!(state.is_card_lifted(2));

        state.focus = Focus::Sidebar;
        assert!(!state.is_card_lifted(2));

        state.hovered_card = Some(4);
        assert!(state.is_card_lifted(4));
    }

    #[test]
    fn hit_testing_maps_seek_bar_to_fraction() {
        let regions = HitRegions {
            cards: vec![Rect::new(0, 0, 10, 5)],
            seek_bar: Some(Rect::new(10, 20, 11, 1)),
            ..HitRegions::default()
        };

        assert_eq!(regions.hit(3, 3), Some(Hit::Card(0)));
        assert_eq!(regions.hit(10, 20), Some(Hit::SeekBar(0.0)));
        assert_eq!(regions.hit(15, 20), Some(Hit::SeekBar(0.5)));
        assert_eq!(regions.hit(20, 20), Some(Hit::SeekBar(1.0)));
        assert_eq!(regions.hit(50, 50), None);
        assert_eq!(regions.seek_fraction(99), Some(1.0));
    }
}
