use crate::hands::HandKind;
use crate::selection::PointerInput;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        let mut geometry = app.grid_geometry();
        terminal.draw(|f| {
            geometry = ui::grid_geometry(f.area());
            ui::draw(f, app);
        })?;
        app.set_grid_geometry(geometry);

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(input) = pointer_input(mouse) {
                        let _ = app.handle_input(InputAction::Pointer(input));
                    }
                }
                // focus lost mid-drag would otherwise leave the gesture open
                Event::FocusLost => {
                    let _ = app.handle_input(InputAction::Pointer(PointerInput::Up));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a terminal mouse event to pointer input. A button release anywhere
/// ends the gesture.
pub fn pointer_input(mouse: MouseEvent) -> Option<PointerInput> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerInput::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerInput::Drag { x, y }),
        MouseEventKind::Up(_) => Some(PointerInput::Up),
        MouseEventKind::Moved => Some(PointerInput::Hover { x, y }),
        _ => None,
    }
}

/// Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    let code = key.code;
    if app.entry_active() {
        let action = match code {
            KeyCode::Esc => InputAction::EntryCancel,
            KeyCode::Enter => InputAction::EntrySubmit,
            KeyCode::Backspace => InputAction::EntryBackspace,
            KeyCode::Char(c) => InputAction::EntryChar(c),
            _ => return false,
        };
        let _ = app.handle_input(action);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if code == KeyCode::Tab {
        let _ = app.handle_input(InputAction::NextScene);
        return false;
    }

    // Chat takes free text, so only control keys act there.
    if app.scene == Scene::Chat {
        let action = match code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::ChatClear
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Esc => {
                app.scene = Scene::Grid;
                return false;
            }
            KeyCode::Enter => InputAction::ChatSend,
            KeyCode::Backspace => InputAction::ChatBackspace,
            KeyCode::Char(c) => InputAction::ChatChar(c),
            _ => return false,
        };
        let _ = app.handle_input(action);
        return false;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('?') => {
            let _ = app.handle_input(InputAction::ToggleHelp);
            return false;
        }
        _ => {}
    }

    let action = match app.scene {
        Scene::Ranges => match code {
            KeyCode::Up | KeyCode::Char('k') => InputAction::ListUp,
            KeyCode::Down | KeyCode::Char('j') => InputAction::ListDown,
            KeyCode::Enter => InputAction::ListOpen,
            KeyCode::Char('n') => InputAction::NewRange,
            KeyCode::Char('r') => InputAction::RenameRange,
            KeyCode::Char('d') => InputAction::DeleteRange,
            KeyCode::Char('f') => InputAction::FavoriteRange,
            KeyCode::Char('c') => InputAction::CompareRange,
            KeyCode::Char('e') => InputAction::Export,
            KeyCode::Char('I') => InputAction::ImportOpen,
            KeyCode::Char('R') => InputAction::ResetPresets,
            KeyCode::Esc => {
                app.scene = Scene::Grid;
                return false;
            }
            _ => return false,
        },
        _ => match code {
            KeyCode::Up => InputAction::CursorUp,
            KeyCode::Down => InputAction::CursorDown,
            KeyCode::Left => InputAction::CursorLeft,
            KeyCode::Right => InputAction::CursorRight,
            KeyCode::Char(' ') | KeyCode::Enter => InputAction::ToggleCursor,
            KeyCode::Char('a') => InputAction::SelectAll,
            KeyCode::Char('x') => InputAction::ClearAll,
            KeyCode::Char('i') => InputAction::Invert,
            KeyCode::Char('p') => InputAction::ToggleKind(HandKind::Pair),
            KeyCode::Char('s') => InputAction::ToggleKind(HandKind::Suited),
            KeyCode::Char('o') => InputAction::ToggleKind(HandKind::Offsuit),
            KeyCode::Char('e') => InputAction::Export,
            _ => return false,
        },
    };
    let _ = app.handle_input(action);
    false
}
