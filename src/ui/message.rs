use crate::ui::catalog::{Badge, PlayerControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,
    Control(PlayerControl),
    SeekTo(f64),
    SeekBy(f64),
    UserMenu,

    // Navigation
    Navigate(usize),
    FocusNext,
    FocusPrevious,
    Move(Direction),
    Activate,

    // Content
    PlayCard(usize),
    HoverCard(Option<usize>),
    Badge(Badge),

    // Search prompt
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
}
