//! Event Handling - Keyboard and mouse input processing

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

use super::section::Section;

/// Actions that can be triggered by user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Activate a section control
    Select(Section),
    ToggleCollapsed,
    /// Left click at (column, row)
    Click { column: u16, row: u16 },
    /// Hand the key to the mounted collaborator
    Forward(KeyEvent),
    None,
}

/// Map a key to an action.
///
/// `captures_input` is true while the mounted collaborator takes raw text,
/// in which case single-letter shortcuts are forwarded instead.
pub fn handle_key_event(key: KeyEvent, captures_input: bool) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    // Global keybindings (work in any state)
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Action::Quit,
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => return Action::ToggleCollapsed,
        (KeyModifiers::ALT, KeyCode::Char('1')) => return Action::Select(Section::Portfolio),
        (KeyModifiers::ALT, KeyCode::Char('2')) => return Action::Select(Section::Ai),
        _ => {}
    }

    if captures_input {
        return Action::Forward(key);
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => Action::Quit,
        (KeyModifiers::NONE, KeyCode::Char('1')) => Action::Select(Section::Portfolio),
        (KeyModifiers::NONE, KeyCode::Char('2')) => Action::Select(Section::Ai),
        (KeyModifiers::NONE, KeyCode::Char('c')) => Action::ToggleCollapsed,
        _ => Action::Forward(key),
    }
}

/// Map a terminal event to an action
pub fn handle_event(event: Event, captures_input: bool) -> Action {
    match event {
        Event::Key(key) => handle_key_event(key, captures_input),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Action::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => Action::None,
        },
        _ => Action::None,
    }
}

/// Poll for a terminal event with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        return Ok(Some(event::read()?));
    }
    Ok(None)
}
