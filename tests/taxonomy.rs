use poker_ranges::cards::Rank;
use poker_ranges::combos::{combinations_for, total_combinations, TOTAL_COMBINATIONS};
use poker_ranges::hands::{generate, label_at, HandKind, HandSet, GRID_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn grid_has_169_distinct_labels() {
    let grid = generate();
    assert_eq!(grid.len(), 169);
    let labels: HashSet<&str> = grid.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels.len(), 169);
}

#[test]
fn kind_counts() {
    let grid = generate();
    let count = |k: HandKind| grid.iter().filter(|h| h.kind == k).count();
    assert_eq!(count(HandKind::Pair), 13);
    assert_eq!(count(HandKind::Suited), 78);
    assert_eq!(count(HandKind::Offsuit), 78);
}

#[test]
fn every_label_has_its_kind_constant() {
    for h in generate() {
        let expected = match h.kind {
            HandKind::Pair => 6,
            HandKind::Suited => 4,
            HandKind::Offsuit => 12,
        };
        assert_eq!(combinations_for(&h.label), expected, "{}", h.label);
        assert_eq!(h.kind.combinations(), expected);
    }
}

#[test]
fn whole_grid_is_1326_combinations() {
    let all: HandSet = generate().into_iter().map(|h| h.label).collect();
    assert_eq!(total_combinations(&all), TOTAL_COMBINATIONS);
    assert_eq!(TOTAL_COMBINATIONS, 1326);
}

#[test]
fn suited_above_diagonal_offsuit_below() {
    assert_eq!(label_at(0, 0), "AA");
    assert_eq!(label_at(0, 1), "AKs");
    assert_eq!(label_at(1, 0), "AKo");
    assert_eq!(label_at(7, 12), "72s");
    assert_eq!(label_at(12, 7), "72o");
    assert_eq!(label_at(4, 4), "TT");
}

proptest! {
    #[test]
    fn mirror_cells_share_ranks(row in 0usize..GRID_SIZE, col in 0usize..GRID_SIZE) {
        let a = label_at(row, col);
        let b = label_at(col, row);
        prop_assert_eq!(&a[..2], &b[..2]);
        prop_assert_eq!(a == b, row == col);
        prop_assert_eq!(HandKind::at(row, col), match row.cmp(&col) {
            std::cmp::Ordering::Equal => HandKind::Pair,
            std::cmp::Ordering::Less => HandKind::Suited,
            std::cmp::Ordering::Greater => HandKind::Offsuit,
        });
    }

    #[test]
    fn first_rank_is_never_lower(row in 0usize..GRID_SIZE, col in 0usize..GRID_SIZE) {
        let label = label_at(row, col);
        let mut chars = label.chars();
        let hi = chars.next().and_then(|c| Rank::try_from(c).ok());
        let lo = chars.next().and_then(|c| Rank::try_from(c).ok());
        prop_assert!(hi.is_some() && lo.is_some());
        prop_assert!(hi >= lo);
    }
}
