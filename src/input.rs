//! Key handling for the interactive report.

use crate::app::App;
use crate::constants::TRIAL_PAGE_STEP;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// Trial count changed; the report must be recomputed.
    SettingsChanged,
    Quit,
}

pub fn handle_input(key: KeyEvent, app: &mut App) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return InputResult::Continue;
    }

    let before = app.settings().trials();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Up | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.settings_mut().step_up()
        }
        KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => app.settings_mut().step_down(),
        KeyCode::PageUp => app.settings_mut().increase_by(TRIAL_PAGE_STEP),
        KeyCode::PageDown => app.settings_mut().decrease_by(TRIAL_PAGE_STEP),
        KeyCode::Home => app.settings_mut().to_min(),
        KeyCode::End => app.settings_mut().to_max(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reroll();
            return InputResult::Continue;
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.toggle_seed_pin();
            return InputResult::Continue;
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.show_help = true;
            return InputResult::Continue;
        }
        _ => return InputResult::Continue,
    }

    if app.settings().trials() == before {
        InputResult::Continue
    } else {
        InputResult::SettingsChanged
    }
}
