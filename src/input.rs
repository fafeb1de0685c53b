//! Keyboard input handling and event processing.

use crate::app::{App, UiMode};
use crate::config::KeyConfig;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Next,
    Previous,
    SeekForward,
    SeekBack,
    Shuffle,
    Repeat,
    CursorUp,
    CursorDown,
    PlaySelected,
    RemoveSelected,
    Help,
    Quit,
}

/// Handles a single input event.
pub fn handle_input(app: &mut App) -> io::Result<()> {
    // Poll for events with short timeout
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
            }
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.ui_mode() == UiMode::Help {
        // Any key closes help
        app.set_ui_mode(UiMode::Normal);
        return;
    }

    let Some(name) = key_name(&key) else {
        return;
    };
    if name == "Ctrl+c" {
        app.quit();
        return;
    }

    let action = action_for(&app.config().keys, &name);
    match action {
        Some(Action::PlayPause) => app.toggle_play_pause(),
        Some(Action::Next) => app.next_track(),
        Some(Action::Previous) => app.previous_track(),
        Some(Action::SeekForward) => app.seek_forward(),
        Some(Action::SeekBack) => app.seek_backward(),
        Some(Action::Shuffle) => app.toggle_shuffle(),
        Some(Action::Repeat) => app.cycle_repeat(),
        Some(Action::CursorUp) => app.cursor_up(),
        Some(Action::CursorDown) => app.cursor_down(),
        Some(Action::PlaySelected) => app.play_selected(),
        Some(Action::RemoveSelected) => app.remove_selected(),
        Some(Action::Help) => app.set_ui_mode(UiMode::Help),
        Some(Action::Quit) => app.quit(),
        None => {}
    }
}

/// Looks up the action bound to `key`.
pub fn action_for(keys: &KeyConfig, key: &str) -> Option<Action> {
    let bindings = [
        (&keys.play_pause, Action::PlayPause),
        (&keys.next, Action::Next),
        (&keys.prev, Action::Previous),
        (&keys.seek_forward, Action::SeekForward),
        (&keys.seek_back, Action::SeekBack),
        (&keys.shuffle, Action::Shuffle),
        (&keys.repeat, Action::Repeat),
        (&keys.cursor_up, Action::CursorUp),
        (&keys.cursor_down, Action::CursorDown),
        (&keys.play_selected, Action::PlaySelected),
        (&keys.remove_selected, Action::RemoveSelected),
        (&keys.help, Action::Help),
        (&keys.quit, Action::Quit),
    ];

    bindings
        .into_iter()
        .find(|(binding, _)| binding.contains(key))
        .map(|(_, action)| action)
}

/// Names a key event the way bindings are written in the config file,
/// e.g. `Space`, `n`, `S`, `Shift+Right`, `Ctrl+c`.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("Alt+");
    }
    // Characters already carry their case.
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        name.push_str("Shift+");
    }
    name.push_str(&base);
    Some(name)
}
