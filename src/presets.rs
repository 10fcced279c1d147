//! Built-in starting ranges. Later opening ranges extend the earlier ones.

use crate::hands::HandSet;
use crate::range::Range;

const UTG_OPEN: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", //
    "AKs", "AQs", "AJs", "ATs", "KQs", "KJs", "QJs", //
    "AKo", "AQo",
];

const HJ_OPEN_EXTRA: &[&str] = &[
    "88", "77", //
    "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KTs", "K9s", "QTs", "Q9s", "JTs",
    "J9s", "T9s", //
    "AJo", "ATo", "KQo",
];

const CO_OPEN_EXTRA: &[&str] = &[
    "66", "55", //
    "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s", "Q8s", "J8s", "T8s", "98s", "87s", //
    "A9o", "A8o", "KJo", "KTo",
];

const BTN_OPEN_EXTRA: &[&str] = &[
    "44", "33", "22", //
    "Q7s", "Q6s", "Q5s", "Q4s", "Q3s", "Q2s", "J7s", "J6s", "J5s", "J4s", "J3s", "J2s", "T7s",
    "T6s", "97s", "96s", "86s", "85s", "76s", "75s", "65s", //
    "A7o", "A6o", "A5o", "A4o", "A3o", "A2o", "K9o", "K8o", "QJo", "QTo", "Q9o", "JTo", "J9o",
    "T9o", "T8o", "98o",
];

const BB_DEFEND: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22", //
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs",
    "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "QJs", "QTs", "Q9s", "Q8s", "JTs", "J9s", "J8s",
    "T9s", "T8s", "T7s", "98s", "97s", "87s", "86s", "76s", "75s", "65s", //
    "AKo", "AQo", "AJo", "ATo", "A9o", "KQo", "KJo", "KTo", "QJo", "QTo", "JTo",
];

const CO_3BET_VS_HJ: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", //
    "AKs", "AQs", "AJs", "ATs", "A5s", "A4s", "KQs", "KJs", "QJs", //
    "AKo", "AQo",
];

const BTN_CALL_3BET: &[&str] = &[
    "QQ", "JJ", "TT", "99", "88", "77", //
    "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KQs", "KJs",
    "KTs", "QJs", "QTs", "JTs", "J9s", "T9s", "T8s", "98s", "87s", "76s", //
    "AQo", "AJo", "ATo", "KQo",
];

const FOUR_BET: &[&str] = &["AA", "KK", "QQ", "AKs", "AKo"];

const CALL_FOUR_BET: &[&str] = &["AA", "KK", "QQ", "AKs"];

const FLOP_CHECK: &[&str] = &[
    "99", "88", "77", "66", "55", "44", "33", "22", //
    "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s", "KJs", "KTs", "K9s",
    "QJs", "QTs", "Q9s", "JTs", "J9s", "T9s", "T8s", "98s", "87s", "76s", "65s", //
    "AJo", "ATo", "A9o", "KJo", "KTo", "QJo", "QTo", "JTo",
];

const FLOP_BET: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", //
    "AKs", "AQs", "AJs", "ATs", "KQs", "KJs", "KTs", "QJs", "QTs", "JTs", //
    "AKo", "AQo", "AJo", "KQo",
];

/// Prefix shared by every preset id.
pub const PRESET_PREFIX: &str = "preset-";

fn hand_set(parts: &[&[&str]]) -> HandSet {
    parts.iter().flat_map(|p| p.iter()).map(|s| s.to_string()).collect()
}

/// Fresh copies of all built-in ranges, stamped with `now`.
pub fn preset_ranges(now: u64) -> Vec<Range> {
    let utg = [UTG_OPEN];
    let hj = [UTG_OPEN, HJ_OPEN_EXTRA];
    let co = [UTG_OPEN, HJ_OPEN_EXTRA, CO_OPEN_EXTRA];
    let btn = [UTG_OPEN, HJ_OPEN_EXTRA, CO_OPEN_EXTRA, BTN_OPEN_EXTRA];

    let table: [(&str, &str, HandSet); 12] = [
        ("utg-open", "UTG Open (15-20%)", hand_set(&utg)),
        ("hj-open", "HJ Open (20-25%)", hand_set(&hj)),
        ("co-open", "CO Open (25-30%)", hand_set(&co)),
        ("btn-open", "BTN Open (40-50%)", hand_set(&btn)),
        ("sb-open", "SB Open (35-45%)", hand_set(&btn)),
        ("bb-defend", "BB vs BTN Open (30-40%)", hand_set(&[BB_DEFEND])),
        ("co-3bet", "CO 3-Bet vs HJ (8-12%)", hand_set(&[CO_3BET_VS_HJ])),
        ("btn-call-3bet", "BTN Call 3-Bet (15-20%)", hand_set(&[BTN_CALL_3BET])),
        ("4bet", "4-Bet Range (4-6%)", hand_set(&[FOUR_BET])),
        ("call-4bet", "Call 4-Bet (2-3%)", hand_set(&[CALL_FOUR_BET])),
        ("flop-check", "Flop Check Range", hand_set(&[FLOP_CHECK])),
        ("flop-bet", "Flop C-Bet Range", hand_set(&[FLOP_BET])),
    ];

    table
        .into_iter()
        .map(|(id, name, hands)| Range {
            id: format!("{PRESET_PREFIX}{id}"),
            name: name.to_string(),
            hands,
            is_preset: true,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hands::{generate, lookup};

    #[test]
    fn every_preset_label_is_on_the_grid() {
        let grid = generate();
        for r in preset_ranges(0) {
            for label in &r.hands {
                assert!(lookup(&grid, label).is_some(), "{} has unknown label {label}", r.id);
            }
        }
    }

    #[test]
    fn opening_ranges_widen() {
        let p = preset_ranges(0);
        assert!(p[0].hands.is_subset(&p[1].hands));
        assert!(p[1].hands.is_subset(&p[2].hands));
        assert!(p[2].hands.is_subset(&p[3].hands));
        assert_eq!(p[3].hands, p[4].hands);
    }

    #[test]
    fn ids_are_unique_and_prefixed() {
        let p = preset_ranges(0);
        let ids: std::collections::HashSet<_> = p.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert!(p.iter().all(|r| r.id.starts_with(PRESET_PREFIX) && r.is_preset));
    }
}
