// keymap.rs - Key press to command resolution

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::mode::Focus;

/// Resolve a key press for the focused pane. Global bindings win over pane bindings.
pub fn key_to_command(key_event: KeyEvent, focus: Focus) -> Option<Command> {
    if let Some(cmd) = global_command(key_event, focus) {
        return Some(cmd);
    }

    let plain = !key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match focus {
        Focus::Tree => match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
            KeyCode::Right | KeyCode::Char('l') => Some(Command::Expand),
            KeyCode::Left | KeyCode::Char('h') => Some(Command::Collapse),
            KeyCode::Enter => Some(Command::Activate),
            KeyCode::Char('q') if plain => Some(Command::Quit),
            _ => None,
        },
        Focus::Editor => match key_event.code {
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Home => Some(Command::LineStart),
            KeyCode::End => Some(Command::LineEnd),
            KeyCode::PageUp => Some(Command::PageUp),
            KeyCode::PageDown => Some(Command::PageDown),
            KeyCode::Enter => Some(Command::Newline),
            KeyCode::Backspace => Some(Command::DeleteBackward),
            KeyCode::Delete => Some(Command::DeleteForward),
            KeyCode::Char(c) if plain => Some(Command::InsertChar(c)),
            _ => None,
        },
        Focus::Search => match key_event.code {
            KeyCode::Up => Some(Command::SelectPrev),
            KeyCode::Down => Some(Command::SelectNext),
            KeyCode::Enter => Some(Command::Activate),
            KeyCode::Backspace => Some(Command::DeleteBackward),
            KeyCode::Char(c) if plain => Some(Command::InsertChar(c)),
            _ => None,
        },
    }
}

fn global_command(key_event: KeyEvent, focus: Focus) -> Option<Command> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('q') if ctrl => Some(Command::Quit),
        KeyCode::Char('s') if ctrl => Some(Command::SaveFile),
        KeyCode::Char('p') if ctrl => Some(Command::ActivateSearch),
        KeyCode::Esc => Some(Command::CancelSearch),
        KeyCode::Tab if focus != Focus::Search => Some(Command::CycleFocus),
        _ => None,
    }
}
