//! Mapping from terminal events to shell inputs.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input the shell acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellInput {
    /// Left button pressed at a terminal cell.
    Click { column: u16, row: u16 },
    Quit,
    Resize { width: u16, height: u16 },
}

/// Map a terminal event; `None` for anything the shell ignores.
pub fn map_event(event: &Event) -> Option<ShellInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            Some(ShellInput::Quit)
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Some(ShellInput::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Option<ShellInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ShellInput::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
