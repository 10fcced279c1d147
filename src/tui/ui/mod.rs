mod grid;
mod layout;
mod panels;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub use layout::grid_geometry;

pub fn draw(f: &mut Frame, app: &AppState) {
    let panes = layout::panes(f.area());
    grid::draw_grid(f, panes.grid, app);
    grid::draw_stats(f, panes.stats, app);
    panels::draw_ranges(f, panes.ranges, app);
    panels::draw_chat(f, panes.side, app);
    panels::draw_status(f, panes.status, app);

    if app.help_open() {
        panels::draw_help(f);
    } else if app.entry_active() {
        panels::draw_entry(f, app);
    }
}
