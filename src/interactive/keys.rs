use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Menu navigation
    MoveUp,
    MoveDown,

    // Trigger / menu
    Toggle,
    Confirm,
    Cancel,

    // Focus
    SwitchPanel,

    // General
    Quit,
    None,
}

/// Map a key press to an action, depending on whether the focused
/// dropdown's menu is open.
pub fn map_key(key: KeyEvent, menu_open: bool) -> Action {
    if menu_open {
        map_menu_key(key)
    } else {
        map_form_key(key)
    }
}

fn map_form_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchPanel,
        KeyCode::Char('j') | KeyCode::Down => Action::SwitchPanel,
        KeyCode::Char('k') | KeyCode::Up => Action::SwitchPanel,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Toggle,
        _ => Action::None,
    }
}

fn map_menu_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc | KeyCode::Char('q') => Action::Cancel,
        _ => Action::None,
    }
}
