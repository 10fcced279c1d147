use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use poker_ranges::range::{Range, RangeBook};
use poker_ranges::selection::{GridGeometry, PointerInput};
use poker_ranges::storage::{MemoryStore, RangeStore, StorageError};
use poker_ranges::tui::app::{AppState, InputAction, Scene};
use poker_ranges::tui::controller::{handle_key, pointer_input};
use std::path::PathBuf;
use std::sync::Arc;

fn grid_app() -> AppState {
    let mut app = AppState::default();
    app.set_grid_geometry(GridGeometry::new(1, 1, 5, 1));
    let _ = app.handle_input(InputAction::ClearAll);
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
}

#[test]
fn mouse_drag_paints_cells() {
    let mut app = grid_app();
    let events = [
        mouse(MouseEventKind::Down(MouseButton::Left), 1, 1),
        mouse(MouseEventKind::Drag(MouseButton::Left), 6, 1),
        mouse(MouseEventKind::Drag(MouseButton::Left), 11, 1),
        // release far outside the grid
        mouse(MouseEventKind::Up(MouseButton::Left), 150, 50),
    ];
    for ev in events {
        if let Some(input) = pointer_input(ev) {
            let _ = app.handle_input(InputAction::Pointer(input));
        }
    }
    let hands = app.current_hands();
    assert_eq!(hands.len(), 3);
    assert!(hands.contains("AA") && hands.contains("AKs") && hands.contains("AQs"));
    assert!(!app.selector().is_dragging());
}

#[test]
fn right_button_does_not_start_gesture() {
    let ev = mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
    assert_eq!(pointer_input(ev), None);
    assert_eq!(
        pointer_input(mouse(MouseEventKind::Up(MouseButton::Right), 0, 0)),
        Some(PointerInput::Up)
    );
}

#[test]
fn drag_is_saved_on_release() {
    let store = Arc::new(MemoryStore::new());
    let mut app = AppState::new(
        RangeBook::with_presets(),
        Box::new(SharedStore(Arc::clone(&store))),
        PathBuf::from("."),
        None,
    );
    app.set_grid_geometry(GridGeometry::new(0, 0, 5, 1));
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Down { x: 60, y: 12 }));
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Up));
    let saved = store.load().unwrap().unwrap();
    let current = app.current().unwrap();
    let stored = saved.iter().find(|r| r.id == current.id).unwrap();
    assert_eq!(stored.hands, current.hands);
}

struct SharedStore(Arc<MemoryStore>);

impl RangeStore for SharedStore {
    fn load(&self) -> Result<Option<Vec<Range>>, StorageError> {
        self.0.load()
    }

    fn save(&self, ranges: &[Range]) -> Result<(), StorageError> {
        self.0.save(ranges)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.0.clear()
    }
}

#[test]
fn keyboard_batch_actions() {
    let mut app = grid_app();
    assert!(!handle_key(&mut app, key(KeyCode::Char('p'))));
    assert_eq!(app.current_hands().len(), 13);
    let _ = handle_key(&mut app, key(KeyCode::Char('p')));
    assert!(app.current_hands().is_empty());
    let _ = handle_key(&mut app, key(KeyCode::Char('i')));
    assert_eq!(app.current_hands().len(), 169);
    let _ = handle_key(&mut app, key(KeyCode::Char('x')));
    assert!(app.current_hands().is_empty());
    let _ = handle_key(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.stats().combinations, 1326);
}

#[test]
fn tab_cycles_scenes_and_help_toggles() {
    let mut app = AppState::default();
    assert_eq!(app.scene, Scene::Grid);
    let _ = handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.scene, Scene::Ranges);
    let _ = handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.scene, Scene::Chat);
    // in chat, 'q' is text
    assert!(!handle_key(&mut app, key(KeyCode::Char('q'))));
    assert_eq!(app.chat_input(), "q");
    let _ = handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.scene, Scene::Grid);

    let _ = handle_key(&mut app, key(KeyCode::Char('?')));
    assert!(app.help_open());
    let _ = handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.help_open());
    assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
}

#[test]
fn ranges_list_opens_highlighted() {
    let mut app = AppState::default();
    app.scene = Scene::Ranges;
    let _ = handle_key(&mut app, key(KeyCode::Down));
    let target = app.highlighted_id().unwrap();
    let _ = handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.scene, Scene::Grid);
    assert_eq!(app.book.current_id(), Some(target.as_str()));
}

#[test]
fn compare_shows_partition() {
    let mut app = AppState::default();
    app.scene = Scene::Ranges;
    // highlight HJ and compare it against the current UTG range
    let _ = handle_key(&mut app, key(KeyCode::Down));
    let _ = handle_key(&mut app, key(KeyCode::Char('c')));
    let (a, b, cmp) = app.comparison().unwrap();
    assert_eq!(a.id, "preset-utg-open");
    assert_eq!(b.id, "preset-hj-open");
    assert!(cmp.a_only.is_empty());
    assert_eq!(cmp.intersection, a.hands);
    let _ = handle_key(&mut app, key(KeyCode::Char('c')));
    assert!(app.comparison().is_none());
}

#[test]
fn overlays_swallow_clicks_but_let_release_through() {
    let mut app = grid_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Down { x: 30, y: 8 }));
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Up));
    assert!(app.current_hands().is_empty());
    let _ = app.handle_input(InputAction::ToggleHelp);

    // a drag already under way still ends when the popup opens
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Down { x: 1, y: 1 }));
    assert!(app.selector().is_dragging());
    app.scene = Scene::Ranges;
    let _ = app.handle_input(InputAction::NewRange);
    assert!(app.entry_active());
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Drag { x: 6, y: 1 }));
    let _ = app.handle_input(InputAction::Pointer(PointerInput::Up));
    assert!(!app.selector().is_dragging());
    assert_eq!(app.current_hands().len(), 1);
    assert!(app.current_hands().contains("AA"));
}
