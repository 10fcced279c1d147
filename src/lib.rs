//! poker-ranges: Texas Hold'em starting-hand range editor
//!
//! Goals:
//! - One canonical taxonomy of the 169 hand categories on a 13x13 grid
//! - Exact combination counts and probabilities for any selection
//! - Click-and-drag editing that paints or erases consistently
//!
//! ## Quick start: measure a range
//! ```
//! use poker_ranges::batch;
//! use poker_ranges::combos::{probability_percent, total_combinations};
//! use poker_ranges::hands::{generate, HandKind};
//!
//! let grid = generate();
//! assert_eq!(grid.len(), 169);
//! assert_eq!(grid[1].label, "AKs");
//!
//! let pairs = batch::select_kind(&Default::default(), HandKind::Pair);
//! assert_eq!(total_combinations(&pairs), 78);
//! assert_eq!(probability_percent(&pairs), 5.88);
//! ```
//!
//! ## TUI
//! Run the interactive editor with:
//! ```sh
//! cargo run --bin poker-ranges
//! ```

pub mod assistant;
pub mod batch;
pub mod cards;
pub mod combos;
pub mod config;
pub mod hands;
pub mod logging;
pub mod presets;
pub mod range;
pub mod selection;
pub mod storage;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
