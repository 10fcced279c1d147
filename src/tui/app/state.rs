use crate::assistant::{Assistant, Conversation};
use crate::batch;
use crate::combos::{compare_sets, RangeComparison, Stats};
use crate::hands::{HandKind, HandSet, GRID_SIZE};
use crate::range::{Range, RangeBook};
use crate::selection::{
    GestureEvent, GridGeometry, PointerAdapter, PointerInput, SelectionController,
};
use crate::storage::{MemoryStore, RangeStore};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

use super::chat::{AssistantStatus, ChatUpdate, HealthUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Grid,
    Ranges,
    Chat,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    NextScene,
    ToggleHelp,
    // grid
    Pointer(PointerInput),
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ToggleCursor,
    SelectAll,
    ClearAll,
    Invert,
    ToggleKind(HandKind),
    // range list
    ListUp,
    ListDown,
    ListOpen,
    NewRange,
    RenameRange,
    DeleteRange,
    FavoriteRange,
    CompareRange,
    Export,
    ImportOpen,
    ResetPresets,
    // text entry popup
    EntryChar(char),
    EntryBackspace,
    EntrySubmit,
    EntryCancel,
    // chat
    ChatChar(char),
    ChatBackspace,
    ChatSend,
    ChatClear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPurpose {
    NewRange,
    Rename(String),
    ImportPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub purpose: EntryPurpose,
    pub buffer: String,
    pub error: Option<String>,
}

impl TextEntry {
    pub fn title(&self) -> &'static str {
        match self.purpose {
            EntryPurpose::NewRange => "New range name",
            EntryPurpose::Rename(_) => "Rename range",
            EntryPurpose::ImportPath => "Import file path",
        }
    }
}

/// Destructive action waiting for a second key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Confirm {
    Delete(String),
    ResetPresets,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    at: Instant,
}

pub struct AppState {
    pub scene: Scene,
    pub book: RangeBook,
    // Grid cursor for keyboard editing (row, col)
    pub cursor: (usize, usize),
    // Highlighted row in the sorted range list
    pub list_index: usize,
    pub(crate) selector: SelectionController,
    pub(crate) store: Box<dyn RangeStore>,
    pub(crate) export_dir: PathBuf,
    pub(crate) entry: Option<TextEntry>,
    pub(crate) confirm: Option<Confirm>,
    pub(crate) compare_with: Option<String>,
    pub(crate) assistant: Option<Arc<dyn Assistant>>,
    pub(crate) conversation: Conversation,
    pub(crate) chat_input: String,
    pub(crate) chat_rx: Option<Receiver<ChatUpdate>>,
    pub(crate) assistant_status: AssistantStatus,
    pub(crate) health_rx: Option<Receiver<HealthUpdate>>,
    grid_geometry: GridGeometry,
    help_open: bool,
    notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        let store = Box::new(MemoryStore::new());
        Self::new(RangeBook::with_presets(), store, PathBuf::from("."), None)
    }
}

impl AppState {
    const NOTICE_TTL: Duration = Duration::from_secs(3);

    pub fn new(
        book: RangeBook,
        store: Box<dyn RangeStore>,
        export_dir: PathBuf,
        assistant: Option<Arc<dyn Assistant>>,
    ) -> Self {
        Self {
            scene: Scene::Grid,
            book,
            cursor: (0, 0),
            list_index: 0,
            selector: SelectionController::new(),
            store,
            export_dir,
            entry: None,
            confirm: None,
            compare_with: None,
            assistant,
            conversation: Conversation::default(),
            chat_input: String::new(),
            chat_rx: None,
            assistant_status: AssistantStatus::Unchecked,
            health_rx: None,
            grid_geometry: GridGeometry::default(),
            help_open: false,
            notice: None,
        }
    }

    /// Open the saved collection, falling back to the presets when nothing is
    /// saved or the file cannot be read.
    pub fn load(
        store: Box<dyn RangeStore>,
        export_dir: PathBuf,
        assistant: Option<Arc<dyn Assistant>>,
    ) -> Self {
        let (book, notice) = match store.load() {
            Ok(Some(ranges)) if !ranges.is_empty() => (RangeBook::from_ranges(ranges), None),
            Ok(_) => (RangeBook::with_presets(), None),
            Err(err) => {
                warn!(%err, "could not load saved ranges");
                (RangeBook::with_presets(), Some(format!("Could not load ranges: {err}")))
            }
        };
        let mut app = Self::new(book, store, export_dir, assistant);
        if let Some(text) = notice {
            app.notify_error(text);
        }
        app
    }

    // --- read-only views for drawing ---

    pub fn current(&self) -> Option<&Range> {
        self.book.current()
    }

    pub fn current_hands(&self) -> HandSet {
        self.current().map(|r| r.hands.clone()).unwrap_or_default()
    }

    pub fn stats(&self) -> Stats {
        self.current().map(|r| Stats::of(&r.hands)).unwrap_or_default()
    }

    pub fn selector(&self) -> &SelectionController {
        &self.selector
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        self.grid_geometry
    }

    pub fn set_grid_geometry(&mut self, geometry: GridGeometry) {
        self.grid_geometry = geometry;
    }

    pub fn cursor_label(&self) -> Option<&str> {
        self.selector.label_at(self.cursor.0, self.cursor.1)
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn entry(&self) -> Option<&TextEntry> {
        self.entry.as_ref()
    }

    pub fn entry_active(&self) -> bool {
        self.entry.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn assistant_enabled(&self) -> bool {
        self.assistant.is_some()
    }

    pub fn assistant_status(&self) -> AssistantStatus {
        self.assistant_status
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    /// Current range compared against the range picked with `c`.
    pub fn comparison(&self) -> Option<(&Range, &Range, RangeComparison)> {
        let other = self.book.get(self.compare_with.as_deref()?)?;
        let current = self.current()?;
        Some((current, other, compare_sets(&current.hands, &other.hands)))
    }

    // --- notices ---

    pub(crate) fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { text: text.into(), is_error: false, at: Instant::now() });
    }

    pub(crate) fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { text: text.into(), is_error: true, at: Instant::now() });
    }

    /// Periodic housekeeping: expire notices and drain assistant updates.
    pub fn on_tick(&mut self) {
        if self.notice.as_ref().is_some_and(|n| n.at.elapsed() >= Self::NOTICE_TTL) {
            self.notice = None;
        }
        self.poll_health();
        self.poll_chat();
    }

    pub(crate) fn persist(&mut self) {
        if let Err(err) = self.store.save(self.book.ranges()) {
            warn!(%err, "saving ranges failed");
            self.notify_error(format!("Save failed: {err}"));
        }
    }

    // --- selection editing ---

    fn replace_selection(&mut self, next: HandSet) {
        self.book.set_current_hands(next);
    }

    fn pointer(&mut self, input: PointerInput) -> bool {
        // overlays cover the grid; only a release gets through to end a drag
        if (self.help_open || self.entry.is_some()) && input != PointerInput::Up {
            return false;
        }
        if self.current().is_none() {
            return false;
        }
        let Some(event) = PointerAdapter::new(&self.grid_geometry, &self.selector).translate(input)
        else {
            return false;
        };
        if event == GestureEvent::MoveOver(None) {
            self.selector.clear_hover();
        }
        let was_dragging = self.selector.is_dragging();
        let releasing = event == GestureEvent::Release;
        let pressing = matches!(event, GestureEvent::Press(_));
        let current = self.current_hands();
        let changed = match self.selector.handle(&current, event) {
            Some(next) => {
                self.replace_selection(next);
                true
            }
            None => false,
        };
        if pressing {
            self.scene = Scene::Grid;
        }
        if releasing && was_dragging {
            self.persist();
        }
        changed
    }

    fn toggle_cursor(&mut self) -> bool {
        let Some(label) = self.cursor_label().map(str::to_string) else {
            return false;
        };
        let current = self.current_hands();
        let next = self.selector.press(&current, &label);
        self.selector.release();
        match next {
            Some(next) if self.current().is_some() => {
                self.replace_selection(next);
                self.persist();
                true
            }
            _ => false,
        }
    }

    fn apply_batch(&mut self, f: impl FnOnce(&HandSet) -> HandSet) -> bool {
        if self.current().is_none() {
            return false;
        }
        let current = self.current_hands();
        let next = f(&current);
        if next == current {
            return false;
        }
        self.replace_selection(next);
        self.persist();
        true
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let n = GRID_SIZE as isize;
        let row = (self.cursor.0 as isize + d_row).rem_euclid(n) as usize;
        let col = (self.cursor.1 as isize + d_col).rem_euclid(n) as usize;
        self.cursor = (row, col);
    }

    /// Apply one input action. Returns true when the current range's hands
    /// changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if !matches!(action, InputAction::DeleteRange | InputAction::ResetPresets) {
            self.confirm = None;
        }
        match action {
            InputAction::NextScene => {
                self.scene = match self.scene {
                    Scene::Grid => Scene::Ranges,
                    Scene::Ranges => Scene::Chat,
                    _ => Scene::Grid,
                };
                false
            }
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::Pointer(input) => self.pointer(input),
            InputAction::CursorUp => {
                self.move_cursor(-1, 0);
                false
            }
            InputAction::CursorDown => {
                self.move_cursor(1, 0);
                false
            }
            InputAction::CursorLeft => {
                self.move_cursor(0, -1);
                false
            }
            InputAction::CursorRight => {
                self.move_cursor(0, 1);
                false
            }
            InputAction::ToggleCursor => self.toggle_cursor(),
            InputAction::SelectAll => self.apply_batch(|_| batch::select_all()),
            InputAction::ClearAll => self.apply_batch(|_| batch::clear()),
            InputAction::Invert => self.apply_batch(batch::invert),
            InputAction::ToggleKind(kind) => self.apply_batch(|s| batch::toggle_kind(s, kind)),
            InputAction::ListUp => {
                self.list_prev();
                false
            }
            InputAction::ListDown => {
                self.list_next();
                false
            }
            InputAction::ListOpen => {
                self.open_highlighted();
                false
            }
            InputAction::NewRange => {
                self.begin_entry(EntryPurpose::NewRange);
                false
            }
            InputAction::RenameRange => {
                self.begin_rename();
                false
            }
            InputAction::DeleteRange => {
                self.delete_highlighted();
                false
            }
            InputAction::FavoriteRange => {
                self.favorite_highlighted();
                false
            }
            InputAction::CompareRange => {
                self.toggle_compare();
                false
            }
            InputAction::Export => {
                self.export();
                false
            }
            InputAction::ImportOpen => {
                self.begin_entry(EntryPurpose::ImportPath);
                false
            }
            InputAction::ResetPresets => {
                self.reset_presets();
                false
            }
            InputAction::EntryChar(c) => {
                if let Some(entry) = self.entry.as_mut() {
                    if entry.buffer.chars().count() < 200 {
                        entry.buffer.push(c);
                    }
                    entry.error = None;
                }
                false
            }
            InputAction::EntryBackspace => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.buffer.pop();
                    entry.error = None;
                }
                false
            }
            InputAction::EntrySubmit => self.submit_entry(),
            InputAction::EntryCancel => {
                self.entry = None;
                false
            }
            InputAction::ChatChar(c) => {
                self.chat_input.push(c);
                false
            }
            InputAction::ChatBackspace => {
                self.chat_input.pop();
                false
            }
            InputAction::ChatSend => {
                self.send_chat();
                false
            }
            InputAction::ChatClear => {
                self.clear_chat();
                false
            }
        }
    }
}
