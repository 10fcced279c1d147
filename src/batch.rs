//! Whole-grid selection shortcuts. Each returns a fresh selection.

use crate::hands::{generate, HandKind, HandSet};

fn labels_of(kind: Option<HandKind>) -> impl Iterator<Item = String> {
    generate().into_iter().filter(move |h| kind.is_none_or(|k| k == h.kind)).map(|h| h.label)
}

pub fn select_all() -> HandSet {
    labels_of(None).collect()
}

pub fn clear() -> HandSet {
    HandSet::new()
}

pub fn select_kind(selection: &HandSet, kind: HandKind) -> HandSet {
    let mut next = selection.clone();
    next.extend(labels_of(Some(kind)));
    next
}

pub fn deselect_kind(selection: &HandSet, kind: HandKind) -> HandSet {
    let mut next = selection.clone();
    for label in labels_of(Some(kind)) {
        next.remove(&label);
    }
    next
}

/// Every grid label not in `selection`. Labels outside the grid are dropped.
pub fn invert(selection: &HandSet) -> HandSet {
    labels_of(None).filter(|l| !selection.contains(l)).collect()
}

pub fn kind_fully_selected(selection: &HandSet, kind: HandKind) -> bool {
    labels_of(Some(kind)).all(|l| selection.contains(&l))
}

/// Select the kind, or deselect it when it is already fully selected.
pub fn toggle_kind(selection: &HandSet, kind: HandKind) -> HandSet {
    if kind_fully_selected(selection, kind) {
        deselect_kind(selection, kind)
    } else {
        select_kind(selection, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_has_every_cell() {
        assert_eq!(select_all().len(), 169);
        assert!(clear().is_empty());
    }

    #[test]
    fn kind_selection_counts() {
        let pairs = select_kind(&HandSet::new(), HandKind::Pair);
        assert_eq!(pairs.len(), 13);
        assert!(kind_fully_selected(&pairs, HandKind::Pair));
        assert!(!kind_fully_selected(&pairs, HandKind::Suited));
        let none = deselect_kind(&pairs, HandKind::Pair);
        assert!(none.is_empty());
    }

    #[test]
    fn invert_twice_restores_grid_labels() {
        let sel: HandSet = ["AA", "72o", "junk"].iter().map(|s| s.to_string()).collect();
        let inv = invert(&sel);
        assert_eq!(inv.len(), 167);
        let back = invert(&inv);
        assert_eq!(back.len(), 2);
        assert!(back.contains("AA") && back.contains("72o"));
    }

    #[test]
    fn toggle_kind_flips() {
        let sel = toggle_kind(&HandSet::new(), HandKind::Offsuit);
        assert_eq!(sel.len(), 78);
        assert!(toggle_kind(&sel, HandKind::Offsuit).is_empty());
    }
}
