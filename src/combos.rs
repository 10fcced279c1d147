//! Combination counts and probabilities for sets of hand categories.
//!
//! Counts are derived from the label text alone: two characters is a pair
//! (6 combos), a trailing `s` is suited (4) and a trailing `o` offsuit (12).
//! Anything else counts as zero.

use crate::cards::{Card, Rank, Suit};
use crate::hands::{HandKind, HandSet};

/// Distinct two-card combinations in a 52-card deck.
pub const TOTAL_COMBINATIONS: u32 = 1326;

const SUITED_MARKER: char = 's';
const OFFSUIT_MARKER: char = 'o';

/// Combinations of a single label; 0 when the label is not recognised.
///
/// ```
/// use poker_ranges::combos::combinations_for;
///
/// assert_eq!(combinations_for("QQ"), 6);
/// assert_eq!(combinations_for("AKs"), 4);
/// assert_eq!(combinations_for("AKo"), 12);
/// assert_eq!(combinations_for("bogus"), 0);
/// ```
pub fn combinations_for(label: &str) -> u32 {
    if label.chars().count() == 2 {
        HandKind::Pair.combinations()
    } else if label.ends_with(SUITED_MARKER) {
        HandKind::Suited.combinations()
    } else if label.ends_with(OFFSUIT_MARKER) {
        HandKind::Offsuit.combinations()
    } else {
        0
    }
}

/// Sum of [`combinations_for`] over every label.
pub fn total_combinations<'a, I>(labels: I) -> u32
where
    I: IntoIterator<Item = &'a String>,
{
    labels.into_iter().map(|l| combinations_for(l)).sum()
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of all 1326 combinations covered by `labels`, in percent, rounded to
/// two decimals.
///
/// ```
/// use poker_ranges::combos::probability_percent;
/// use poker_ranges::hands::HandSet;
///
/// let aces: HandSet = ["AA".to_string()].into_iter().collect();
/// assert_eq!(probability_percent(&aces), 0.45);
/// assert_eq!(probability_percent(&HandSet::new()), 0.0);
/// ```
pub fn probability_percent<'a, I>(labels: I) -> f64
where
    I: IntoIterator<Item = &'a String>,
{
    let total = total_combinations(labels);
    if total == 0 {
        return 0.0;
    }
    round2(f64::from(total) / f64::from(TOTAL_COMBINATIONS) * 100.0)
}

/// Two decimals and a percent sign, e.g. `12.50%`.
pub fn format_probability(probability: f64) -> String {
    format!("{probability:.2}%")
}

/// Size, combinations and probability of one selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub hands: usize,
    pub combinations: u32,
    pub probability: f64,
}

impl Stats {
    pub fn of(set: &HandSet) -> Self {
        Self {
            hands: set.len(),
            combinations: total_combinations(set),
            probability: probability_percent(set),
        }
    }

    /// Stats restricted to one kind of hand.
    pub fn of_kind(set: &HandSet, kind: HandKind) -> Self {
        let part: HandSet = set.iter().filter(|l| kind_of(l) == Some(kind)).cloned().collect();
        Self::of(&part)
    }
}

fn kind_of(label: &str) -> Option<HandKind> {
    match combinations_for(label) {
        6 => Some(HandKind::Pair),
        4 => Some(HandKind::Suited),
        12 => Some(HandKind::Offsuit),
        _ => None,
    }
}

/// Which side of a comparison a label landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Both,
    AOnly,
    BOnly,
}

/// Partition of `A ∪ B` into three disjoint sets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeComparison {
    pub intersection: HandSet,
    pub a_only: HandSet,
    pub b_only: HandSet,
}

impl RangeComparison {
    pub fn part(&self, part: Part) -> &HandSet {
        match part {
            Part::Both => &self.intersection,
            Part::AOnly => &self.a_only,
            Part::BOnly => &self.b_only,
        }
    }

    pub fn summary(&self, part: Part) -> Stats {
        Stats::of(self.part(part))
    }

    /// Number of distinct labels across all three parts.
    pub fn union_len(&self) -> usize {
        self.intersection.len() + self.a_only.len() + self.b_only.len()
    }
}

/// Split two selections into shared, A-only and B-only labels.
///
/// ```
/// use poker_ranges::combos::compare_sets;
/// use poker_ranges::hands::HandSet;
///
/// let a: HandSet = ["AA", "KK"].iter().map(|s| s.to_string()).collect();
/// let b: HandSet = ["KK", "QQ"].iter().map(|s| s.to_string()).collect();
/// let cmp = compare_sets(&a, &b);
/// assert!(cmp.intersection.contains("KK"));
/// assert!(cmp.a_only.contains("AA"));
/// assert!(cmp.b_only.contains("QQ"));
/// ```
pub fn compare_sets(a: &HandSet, b: &HandSet) -> RangeComparison {
    RangeComparison {
        intersection: a.intersection(b).cloned().collect(),
        a_only: a.difference(b).cloned().collect(),
        b_only: b.difference(a).cloned().collect(),
    }
}

fn parse_label(label: &str) -> Option<(Rank, Rank, HandKind)> {
    let mut chars = label.chars();
    let hi = Rank::try_from(chars.next()?).ok()?;
    let lo = Rank::try_from(chars.next()?).ok()?;
    let kind = match (chars.next(), chars.next()) {
        (None, None) if hi == lo => HandKind::Pair,
        (Some(SUITED_MARKER), None) if hi > lo => HandKind::Suited,
        (Some(OFFSUIT_MARKER), None) if hi > lo => HandKind::Offsuit,
        _ => return None,
    };
    Some((hi, lo, kind))
}

/// Every concrete two-card combination of a canonical label (`"AKs"` gives
/// `AcKc, AdKd, AhKh, AsKs`). Unrecognised labels give an empty list.
pub fn expand(label: &str) -> Vec<(Card, Card)> {
    let Some((hi, lo, kind)) = parse_label(label) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(kind.combinations() as usize);
    match kind {
        HandKind::Pair => {
            for (i, &a) in Suit::ALL.iter().enumerate() {
                for &b in &Suit::ALL[i + 1..] {
                    out.push((Card::new(hi, a), Card::new(lo, b)));
                }
            }
        }
        HandKind::Suited => {
            for &s in &Suit::ALL {
                out.push((Card::new(hi, s), Card::new(lo, s)));
            }
        }
        HandKind::Offsuit => {
            for &a in &Suit::ALL {
                for &b in Suit::ALL.iter().filter(|&&b| b != a) {
                    out.push((Card::new(hi, a), Card::new(lo, b)));
                }
            }
        }
    }
    out
}
