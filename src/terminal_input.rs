//! Terminal key bindings
//!
//! Space and Up jump, `q`, Esc and Ctrl-C quit, every other key press is
//! [`Action::Other`]. Key releases are dropped so a tap counts once on
//! terminals that report them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::Action;

/// What the terminal host should do with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Quit,
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(' ') | KeyCode::Up => Command::Play(Action::Jump),
        _ => Command::Play(Action::Other),
    };
    Some(command)
}
