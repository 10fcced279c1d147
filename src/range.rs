//! Named ranges and the collection the editor works on.

use crate::assistant::RangeContext;
use crate::combos::{probability_percent, total_combinations};
use crate::hands::HandSet;
use crate::presets::preset_ranges;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

/// A named set of hand categories.
///
/// Serialized with camelCase keys; `hands` is a JSON array of labels and
/// duplicate labels collapse when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub id: String,
    pub name: String,
    pub hands: HandSet,
    #[serde(default)]
    pub is_preset: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub updated_at: u64,
}

impl Range {
    /// Read-only snapshot handed to the assistant.
    pub fn context(&self) -> RangeContext {
        RangeContext {
            name: self.name.clone(),
            hands: self.hands.iter().cloned().collect(),
            total_combinations: total_combinations(&self.hands),
            probability: probability_percent(&self.hands),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("range name is empty")]
    EmptyName,
    #[error("a range named '{0}' already exists")]
    DuplicateName(String),
    #[error("preset range '{0}' cannot be changed that way")]
    PresetLocked(String),
    #[error("no range with id '{0}'")]
    NotFound(String),
}

/// All ranges plus the id of the one being edited.
#[derive(Debug, Clone)]
pub struct RangeBook {
    ranges: Vec<Range>,
    current: Option<String>,
    rng: ChaCha8Rng,
}

impl RangeBook {
    /// Book holding the built-in presets, first one current.
    pub fn with_presets() -> Self {
        Self::from_ranges(preset_ranges(now_ms()))
    }

    /// Current range is the first favorite, else the first range.
    pub fn from_ranges(ranges: Vec<Range>) -> Self {
        let current =
            ranges.iter().find(|r| r.is_favorite).or(ranges.first()).map(|r| r.id.clone());
        Self { ranges, current, rng: ChaCha8Rng::from_os_rng() }
    }

    /// Fixed RNG seed for reproducible import ids.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Range> {
        self.ranges.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Range, RangeError> {
        self.ranges
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RangeError::NotFound(id.to_string()))
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&Range> {
        self.current.as_deref().and_then(|id| self.get(id))
    }

    pub fn select(&mut self, id: &str) -> Result<(), RangeError> {
        if self.get(id).is_none() {
            return Err(RangeError::NotFound(id.to_string()));
        }
        self.current = Some(id.to_string());
        Ok(())
    }

    /// Favorites first, then newest first.
    pub fn sorted(&self) -> Vec<&Range> {
        let mut out: Vec<&Range> = self.ranges.iter().collect();
        out.sort_by(|a, b| b.is_favorite.cmp(&a.is_favorite).then(b.created_at.cmp(&a.created_at)));
        out
    }

    fn validate_name(&self, name: &str, except: Option<&str>) -> Result<String, RangeError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RangeError::EmptyName);
        }
        if self.ranges.iter().any(|r| Some(r.id.as_str()) != except && r.name == trimmed) {
            return Err(RangeError::DuplicateName(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }

    fn unique_id(&self, base: String) -> String {
        let mut id = base.clone();
        let mut n = 1;
        while self.get(&id).is_some() {
            id = format!("{base}-{n}");
            n += 1;
        }
        id
    }

    /// New empty range; it becomes the current one.
    pub fn create(&mut self, name: &str) -> Result<&Range, RangeError> {
        let name = self.validate_name(name, None)?;
        let now = now_ms();
        let id = self.unique_id(format!("custom-{now}"));
        info!(%id, %name, "range created");
        self.ranges.push(Range {
            id: id.clone(),
            name,
            hands: HandSet::new(),
            is_preset: false,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        });
        self.current = Some(id);
        Ok(&self.ranges[self.ranges.len() - 1])
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<(), RangeError> {
        let name = self.validate_name(name, Some(id))?;
        let range = self.get_mut(id)?;
        if range.is_preset {
            return Err(RangeError::PresetLocked(range.name.clone()));
        }
        info!(%id, from = %range.name, to = %name, "range renamed");
        range.name = name;
        range.updated_at = now_ms();
        Ok(())
    }

    /// Remove a custom range. Deleting the current range moves the cursor to
    /// the first remaining one.
    pub fn delete(&mut self, id: &str) -> Result<Range, RangeError> {
        let idx = self
            .ranges
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RangeError::NotFound(id.to_string()))?;
        if self.ranges[idx].is_preset {
            return Err(RangeError::PresetLocked(self.ranges[idx].name.clone()));
        }
        let removed = self.ranges.remove(idx);
        if self.current.as_deref() == Some(id) {
            self.current = self.ranges.first().map(|r| r.id.clone());
        }
        info!(%id, "range deleted");
        Ok(removed)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, RangeError> {
        let range = self.get_mut(id)?;
        range.is_favorite = !range.is_favorite;
        range.updated_at = now_ms();
        Ok(range.is_favorite)
    }

    /// Replace the range's hands wholesale.
    pub fn set_hands(&mut self, id: &str, hands: HandSet) -> Result<(), RangeError> {
        let range = self.get_mut(id)?;
        range.hands = hands;
        range.updated_at = now_ms();
        Ok(())
    }

    /// Replace the current range's hands; no-op without a current range.
    pub fn set_current_hands(&mut self, hands: HandSet) {
        if let Some(id) = self.current.clone() {
            let _ = self.set_hands(&id, hands);
        }
    }

    /// Restore presets to their built-in contents, keeping custom ranges and
    /// which presets were favorites.
    pub fn reset_presets(&mut self) {
        let favorites: Vec<String> = self
            .ranges
            .iter()
            .filter(|r| r.is_preset && r.is_favorite)
            .map(|r| r.id.clone())
            .collect();
        let mut next = preset_ranges(now_ms());
        for preset in &mut next {
            preset.is_favorite = favorites.contains(&preset.id);
        }
        next.extend(self.ranges.drain(..).filter(|r| !r.is_preset));
        self.ranges = next;
        if self.current().is_none() {
            self.current = self.ranges.first().map(|r| r.id.clone());
        }
        info!("presets reset");
    }

    /// Append imported ranges under fresh ids, never as presets.
    pub fn merge_imported(&mut self, imported: Vec<Range>) -> usize {
        let count = imported.len();
        for mut range in imported {
            let suffix: u32 = self.rng.random();
            range.id = self.unique_id(format!("imported-{}-{suffix:08x}", now_ms()));
            range.is_preset = false;
            self.ranges.push(range);
        }
        if self.current.is_none() {
            self.current = self.ranges.first().map(|r| r.id.clone());
        }
        info!(count, "ranges imported");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_start_with_first_current() {
        let book = RangeBook::with_presets();
        assert_eq!(book.len(), 12);
        assert_eq!(book.current_id(), Some("preset-utg-open"));
    }

    #[test]
    fn favorite_becomes_initial_current() {
        let mut ranges = preset_ranges(1);
        ranges[3].is_favorite = true;
        let book = RangeBook::from_ranges(ranges);
        assert_eq!(book.current_id(), Some("preset-btn-open"));
    }

    #[test]
    fn unique_id_suffixes() {
        let mut book = RangeBook::from_ranges(Vec::new());
        book.ranges.push(Range {
            id: "x".into(),
            name: "x".into(),
            hands: HandSet::new(),
            is_preset: false,
            is_favorite: false,
            created_at: 0,
            updated_at: 0,
        });
        assert_eq!(book.unique_id("x".into()), "x-1");
        assert_eq!(book.unique_id("y".into()), "y");
    }

    #[test]
    fn context_carries_stats() {
        let book = RangeBook::with_presets();
        let ctx = book.get("preset-4bet").unwrap().context();
        assert_eq!(ctx.total_combinations, 6 * 3 + 4 + 12);
        assert_eq!(ctx.hands.len(), 5);
        assert_eq!(ctx.probability, 2.56);
    }
}
