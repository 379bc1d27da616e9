use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{
    catalog::{PlayerControl, SEARCH_NAV_INDEX},
    message::{AppMessage, Direction},
    state::{Focus, UiState},
};

pub const SEEK_STEP: f64 = 0.05;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &UiState) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        if state.is_searching() {
            return match key.code {
                KeyCode::Enter => Some(AppMessage::SubmitSearch),
                KeyCode::Esc => Some(AppMessage::CancelSearch),
                KeyCode::Backspace => Some(AppMessage::SearchBackspace),
                KeyCode::Char(c) => Some(AppMessage::SearchInput(c)),
                _ => None,
            };
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char('n'), _) => Some(AppMessage::Control(PlayerControl::Next)),
            (KeyCode::Char('p'), _) => Some(AppMessage::Control(PlayerControl::Previous)),
            (KeyCode::Char('s'), _) => Some(AppMessage::Control(PlayerControl::Shuffle)),
            (KeyCode::Char('r'), _) => Some(AppMessage::Control(PlayerControl::Repeat)),
            (KeyCode::Char('u'), _) => Some(AppMessage::UserMenu),
            (KeyCode::Char('/'), _) => Some(AppMessage::Navigate(SEARCH_NAV_INDEX)),
            (KeyCode::Char('1'), _) => Some(AppMessage::Navigate(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::Navigate(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::Navigate(2)),
            (KeyCode::Left, KeyModifiers::SHIFT) => Some(AppMessage::SeekBy(-SEEK_STEP)),
            (KeyCode::Right, KeyModifiers::SHIFT) => Some(AppMessage::SeekBy(SEEK_STEP)),
            (KeyCode::Left, _) if state.focus == Focus::SeekBar => {
                Some(AppMessage::SeekBy(-SEEK_STEP))
            }
            (KeyCode::Right, _) if state.focus == Focus::SeekBar => {
                Some(AppMessage::SeekBy(SEEK_STEP))
            }
            (KeyCode::Tab, _) => Some(AppMessage::FocusNext),
            (KeyCode::BackTab, _) => Some(AppMessage::FocusPrevious),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(AppMessage::Move(Direction::Up)),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                Some(AppMessage::Move(Direction::Down))
            }
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => {
                Some(AppMessage::Move(Direction::Left))
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
                Some(AppMessage::Move(Direction::Right))
            }
            (KeyCode::Enter, _) => Some(AppMessage::Activate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_playback() {
        let state = UiState::new();
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' ')), &state),
            Some(AppMessage::TogglePlayPause)
        );
    }

    #[test]
    fn arrows_seek_only_on_seek_bar() {
        let mut state = UiState::new();
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Right), &state),
            Some(AppMessage::Move(Direction::Right))
        );

        state.focus = Focus::SeekBar;
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Right), &state),
            Some(AppMessage::SeekBy(SEEK_STEP))
        );
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT), &state),
            Some(AppMessage::SeekBy(-SEEK_STEP))
        );
    }

    #[test]
    fn search_prompt_captures_text() {
        let mut state = UiState::new();
        state.search_input = Some(String::new());

        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' ')), &state),
            Some(AppMessage::SearchInput(' '))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q')), &state),
            Some(AppMessage::SearchInput('q'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &state),
            Some(AppMessage::CancelSearch)
        );
        assert_eq!(
            InputHandler::handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &state
            ),
            Some(AppMessage::Quit)
        );
    }
}
