//! The 169 starting-hand categories laid out on a 13x13 grid.
//!
//! Row and column indices both address [`Rank::GRID`]. The diagonal holds the
//! pairs, cells above it the suited hands and cells below it the offsuit
//! hands, so `AKs` sits at (0, 1) and `AKo` at (1, 0).

use crate::cards::Rank;
use std::collections::BTreeSet;
use std::fmt;

/// Number of rows (and columns) in the hand grid.
pub const GRID_SIZE: usize = 13;

/// A selection of hand-category labels. Every selection change produces a
/// new value; sets are never edited in place once handed out.
pub type HandSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    Pair,
    Suited,
    Offsuit,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Pair, HandKind::Suited, HandKind::Offsuit];

    /// Card combinations of one category of this kind.
    pub const fn combinations(self) -> u32 {
        match self {
            HandKind::Pair => 6,
            HandKind::Suited => 4,
            HandKind::Offsuit => 12,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandKind::Pair => "Pairs",
            HandKind::Suited => "Suited",
            HandKind::Offsuit => "Offsuit",
        }
    }

    /// Kind of the cell at (row, col).
    pub const fn at(row: usize, col: usize) -> HandKind {
        if row == col {
            HandKind::Pair
        } else if row < col {
            HandKind::Suited
        } else {
            HandKind::Offsuit
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandCategory {
    pub row: usize,
    pub col: usize,
    pub label: String,
    pub kind: HandKind,
}

impl HandCategory {
    /// Higher and lower rank of the category.
    pub fn ranks(&self) -> (Rank, Rank) {
        let hi = self.row.min(self.col);
        let lo = self.row.max(self.col);
        (Rank::GRID[hi], Rank::GRID[lo])
    }
}

/// Label of the cell at (row, col). Both indices must be below [`GRID_SIZE`].
pub fn label_at(row: usize, col: usize) -> String {
    let hi = Rank::GRID[row.min(col)].to_char();
    let lo = Rank::GRID[row.max(col)].to_char();
    match HandKind::at(row, col) {
        HandKind::Pair => format!("{hi}{lo}"),
        HandKind::Suited => format!("{hi}{lo}s"),
        HandKind::Offsuit => format!("{hi}{lo}o"),
    }
}

/// Build the full grid, row-major.
///
/// ```
/// use poker_ranges::hands::{generate, HandKind};
///
/// let grid = generate();
/// assert_eq!(grid.len(), 169);
/// assert_eq!(grid[0].label, "AA");
/// assert_eq!(grid[1].label, "AKs");
/// assert_eq!(grid[13].label, "AKo");
/// assert_eq!(grid[13].kind, HandKind::Offsuit);
/// ```
pub fn generate() -> Vec<HandCategory> {
    let mut out = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let kind = HandKind::at(row, col);
            out.push(HandCategory { row, col, label: label_at(row, col), kind });
        }
    }
    out
}

/// Find a category by label.
pub fn lookup<'a>(grid: &'a [HandCategory], label: &str) -> Option<&'a HandCategory> {
    grid.iter().find(|h| h.label == label)
}

/// Labels of every category whose ranks both fall inside the inclusive block
/// `start..=end` of the grid, optionally restricted to one kind.
///
/// `start` must not come after `end` in grid order, otherwise the result is
/// empty.
///
/// ```
/// use poker_ranges::cards::Rank;
/// use poker_ranges::hands::{names_in_block, HandKind};
///
/// let broadway_pairs = names_in_block(Rank::Ace, Rank::Ten, Some(HandKind::Pair));
/// assert_eq!(broadway_pairs, vec!["AA", "KK", "QQ", "JJ", "TT"]);
/// ```
pub fn names_in_block(start: Rank, end: Rank, kind: Option<HandKind>) -> Vec<String> {
    let (s, e) = (start.grid_index(), end.grid_index());
    if s > e {
        return Vec::new();
    }
    let mut out = Vec::new();
    for row in s..=e {
        for col in s..=e {
            let k = HandKind::at(row, col);
            if kind.is_none_or(|want| want == k) {
                out.push(label_at(row, col));
            }
        }
    }
    out
}
