//! Drag-to-select over the hand grid.
//!
//! Every input device is reduced to three events: press on a cell, move over
//! a cell (or over nothing), and release. A press flips the pressed cell and
//! fixes the drag mode for the rest of the gesture: pressing an unselected
//! cell selects it and every cell dragged over afterwards; pressing a
//! selected cell deselects them instead.
//!
//! The controller never owns the selection. Callers pass in the current
//! [`HandSet`] and get back a new one whenever something changed.
//!
//! ```
//! use poker_ranges::hands::HandSet;
//! use poker_ranges::selection::{DragMode, SelectionController};
//!
//! let mut ctl = SelectionController::new();
//! let sel = HandSet::new();
//! let sel = ctl.press(&sel, "AA").unwrap();
//! assert_eq!(ctl.mode(), Some(DragMode::Select));
//! let sel = ctl.move_over(&sel, Some("KK")).unwrap();
//! ctl.release();
//! assert_eq!(sel.len(), 2);
//! ```

use crate::hands::{generate, lookup, HandCategory, HandSet, GRID_SIZE};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Select,
    Deselect,
}

impl DragMode {
    fn wants_selected(self) -> bool {
        matches!(self, DragMode::Select)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragMode),
}

/// Device-independent gesture input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEvent {
    Press(String),
    MoveOver(Option<String>),
    Release,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    grid: Vec<HandCategory>,
    state: GestureState,
    last_hovered: Option<String>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self { grid: generate(), state: GestureState::Idle, last_hovered: None }
    }

    pub fn grid(&self) -> &[HandCategory] {
        &self.grid
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn mode(&self) -> Option<DragMode> {
        match self.state {
            GestureState::Dragging(mode) => Some(mode),
            GestureState::Idle => None,
        }
    }

    pub fn last_hovered(&self) -> Option<&str> {
        self.last_hovered.as_deref()
    }

    /// Label of the cell at (row, col), if inside the grid.
    pub fn label_at(&self, row: usize, col: usize) -> Option<&str> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        self.grid.get(row * GRID_SIZE + col).map(|h| h.label.as_str())
    }

    fn known(&self, label: &str) -> bool {
        lookup(&self.grid, label).is_some()
    }

    /// Start a gesture on `label`. Returns the selection with the pressed
    /// cell flipped, or `None` if the label is not a grid cell.
    pub fn press(&mut self, selection: &HandSet, label: &str) -> Option<HandSet> {
        if !self.known(label) {
            return None;
        }
        if self.is_dragging() {
            self.release();
        }
        let mode = if selection.contains(label) { DragMode::Deselect } else { DragMode::Select };
        self.state = GestureState::Dragging(mode);
        self.last_hovered = Some(label.to_string());
        debug!(label, ?mode, "gesture started");

        let mut next = selection.clone();
        if !next.remove(label) {
            next.insert(label.to_string());
        }
        Some(next)
    }

    /// Pointer is over `label` (or over no cell). While dragging, brings the
    /// cell in line with the drag mode and returns the new selection; returns
    /// `None` when nothing changed.
    pub fn move_over(&mut self, selection: &HandSet, label: Option<&str>) -> Option<HandSet> {
        let label = label.filter(|l| self.known(l))?;
        self.last_hovered = Some(label.to_string());
        let GestureState::Dragging(mode) = self.state else {
            return None;
        };
        let want = mode.wants_selected();
        if selection.contains(label) == want {
            return None;
        }
        let mut next = selection.clone();
        if want {
            next.insert(label.to_string());
        } else {
            next.remove(label);
        }
        Some(next)
    }

    /// End the current gesture, wherever the pointer is.
    pub fn release(&mut self) {
        if self.is_dragging() {
            debug!("gesture ended");
        }
        self.state = GestureState::Idle;
    }

    /// Forget the hovered cell (pointer left the grid).
    pub fn clear_hover(&mut self) {
        self.last_hovered = None;
    }

    pub fn handle(&mut self, selection: &HandSet, event: GestureEvent) -> Option<HandSet> {
        match event {
            GestureEvent::Press(label) => self.press(selection, &label),
            GestureEvent::MoveOver(label) => self.move_over(selection, label.as_deref()),
            GestureEvent::Release => {
                self.release();
                None
            }
        }
    }
}

/// Resolves a screen point to a grid cell.
pub trait HitTest {
    fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)>;
}

/// Rectangular grid of equally sized cells starting at (`x`, `y`).
///
/// Only the `width` x `height` area from the origin is on screen. Points
/// past it hit nothing even when a cell would lie there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridGeometry {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
    pub width: u16,
    pub height: u16,
}

impl GridGeometry {
    /// Geometry with every cell of the grid visible.
    pub const fn new(x: u16, y: u16, cell_width: u16, cell_height: u16) -> Self {
        Self {
            x,
            y,
            cell_width,
            cell_height,
            width: cell_width * GRID_SIZE as u16,
            height: cell_height * GRID_SIZE as u16,
        }
    }

    /// Clip the visible area to at most `width` x `height`.
    pub fn clipped_to(self, width: u16, height: u16) -> Self {
        Self { width: self.width.min(width), height: self.height.min(height), ..self }
    }

    /// Top-left corner of the cell at (row, col).
    pub fn cell_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (self.x + col as u16 * self.cell_width, self.y + row as u16 * self.cell_height)
    }
}

impl HitTest for GridGeometry {
    fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if self.cell_width == 0 || self.cell_height == 0 || x < self.x || y < self.y {
            return None;
        }
        let (dx, dy) = (x - self.x, y - self.y);
        if dx >= self.width || dy >= self.height {
            return None;
        }
        let col = usize::from(dx / self.cell_width);
        let row = usize::from(dy / self.cell_height);
        (row < GRID_SIZE && col < GRID_SIZE).then_some((row, col))
    }
}

/// Raw pointer input at a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Down { x: u16, y: u16 },
    Drag { x: u16, y: u16 },
    Up,
    Hover { x: u16, y: u16 },
}

/// Turns point-based input into [`GestureEvent`]s by hit-testing.
pub struct PointerAdapter<'a, H: HitTest> {
    hit: &'a H,
    controller: &'a SelectionController,
}

impl<'a, H: HitTest> PointerAdapter<'a, H> {
    pub fn new(hit: &'a H, controller: &'a SelectionController) -> Self {
        Self { hit, controller }
    }

    fn label_under(&self, x: u16, y: u16) -> Option<String> {
        let (row, col) = self.hit.cell_at(x, y)?;
        self.controller.label_at(row, col).map(str::to_string)
    }

    /// `None` when the input maps to nothing (a press outside the grid).
    pub fn translate(&self, input: PointerInput) -> Option<GestureEvent> {
        match input {
            PointerInput::Down { x, y } => self.label_under(x, y).map(GestureEvent::Press),
            PointerInput::Drag { x, y } | PointerInput::Hover { x, y } => {
                Some(GestureEvent::MoveOver(self.label_under(x, y)))
            }
            PointerInput::Up => Some(GestureEvent::Release),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(xs: &[&str]) -> HandSet {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn press_on_selected_cell_deselects() {
        let mut ctl = SelectionController::new();
        let sel = ctl.press(&set(&["AA", "KK"]), "AA").unwrap();
        assert_eq!(ctl.mode(), Some(DragMode::Deselect));
        assert_eq!(sel, set(&["KK"]));
        let sel = ctl.move_over(&sel, Some("KK")).unwrap();
        assert!(sel.is_empty());
    }

    #[test]
    fn unknown_label_is_ignored() {
        let mut ctl = SelectionController::new();
        assert!(ctl.press(&HandSet::new(), "ZZ").is_none());
        assert_eq!(ctl.state(), GestureState::Idle);
        let _ = ctl.press(&HandSet::new(), "AA");
        assert!(ctl.move_over(&set(&["AA"]), Some("KAs")).is_none());
        assert_eq!(ctl.last_hovered(), Some("AA"));
    }

    #[test]
    fn move_while_idle_only_hovers() {
        let mut ctl = SelectionController::new();
        assert!(ctl.move_over(&HandSet::new(), Some("QQ")).is_none());
        assert_eq!(ctl.last_hovered(), Some("QQ"));
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn press_during_drag_restarts_gesture() {
        let mut ctl = SelectionController::new();
        let sel = ctl.press(&HandSet::new(), "AA").unwrap();
        let sel = ctl.press(&sel, "AA").unwrap();
        assert_eq!(ctl.mode(), Some(DragMode::Deselect));
        assert!(sel.is_empty());
    }

    #[test]
    fn release_when_idle_is_harmless() {
        let mut ctl = SelectionController::new();
        ctl.release();
        assert_eq!(ctl.state(), GestureState::Idle);
        assert!(ctl.handle(&HandSet::new(), GestureEvent::Release).is_none());
    }

    #[test]
    fn geometry_hit_test() {
        let g = GridGeometry::new(4, 2, 5, 1);
        assert_eq!(g.cell_at(4, 2), Some((0, 0)));
        assert_eq!(g.cell_at(8, 2), Some((0, 0)));
        assert_eq!(g.cell_at(9, 3), Some((1, 1)));
        assert_eq!(g.cell_at(3, 2), None);
        assert_eq!(g.cell_at(4 + 13 * 5, 2), None);
        assert_eq!(g.cell_at(4, 2 + 13), None);
        assert_eq!(g.cell_origin(1, 2), (14, 3));
    }

    #[test]
    fn clipped_geometry_hides_cut_off_cells() {
        // only the first 10 columns and 5 rows are on screen
        let g = GridGeometry::new(1, 1, 5, 1).clipped_to(50, 5);
        assert_eq!(g.cell_at(46, 1), Some((0, 9)));
        assert_eq!(g.cell_at(51, 1), None);
        assert_eq!(g.cell_at(1, 5), Some((4, 0)));
        assert_eq!(g.cell_at(1, 6), None);
        let same = GridGeometry::new(1, 1, 5, 1).clipped_to(500, 500);
        assert_eq!(same, GridGeometry::new(1, 1, 5, 1));
    }

    #[test]
    fn adapter_maps_points_to_events() {
        let ctl = SelectionController::new();
        let g = GridGeometry::new(0, 0, 4, 2);
        let a = PointerAdapter::new(&g, &ctl);
        let press = a.translate(PointerInput::Down { x: 5, y: 0 });
        assert_eq!(press, Some(GestureEvent::Press("AKs".into())));
        assert_eq!(a.translate(PointerInput::Down { x: 200, y: 0 }), None);
        let outside = a.translate(PointerInput::Drag { x: 200, y: 0 });
        assert_eq!(outside, Some(GestureEvent::MoveOver(None)));
        let below = a.translate(PointerInput::Drag { x: 0, y: 2 });
        assert_eq!(below, Some(GestureEvent::MoveOver(Some("AKo".into()))));
        assert_eq!(a.translate(PointerInput::Up), Some(GestureEvent::Release));
    }
}
