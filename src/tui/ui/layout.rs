use crate::hands::GRID_SIZE;
use crate::selection::GridGeometry;
use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

pub(super) const CELL_WIDTH: u16 = 5;
pub(super) const CELL_HEIGHT: u16 = 1;
const GRID_WIDTH: u16 = CELL_WIDTH * GRID_SIZE as u16 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * GRID_SIZE as u16 + 2;

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Screen regions of the editor.
pub(super) struct Panes {
    pub grid: Rect,
    pub stats: Rect,
    pub ranges: Rect,
    pub side: Rect,
    pub status: Rect,
}

pub(super) fn panes(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(GRID_HEIGHT), Constraint::Length(3)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_WIDTH), Constraint::Min(24)])
        .split(rows[0]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(GRID_HEIGHT), Constraint::Min(3)])
        .split(cols[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(cols[1]);
    Panes { grid: left[0], stats: left[1], ranges: right[0], side: right[1], status: rows[1] }
}

/// Where the 13x13 cells land for a frame of size `area`.
pub fn grid_geometry(area: Rect) -> GridGeometry {
    let cells = inner(panes(area).grid);
    GridGeometry::new(cells.x, cells.y, CELL_WIDTH, CELL_HEIGHT)
        .clipped_to(cells.width, cells.height)
}
