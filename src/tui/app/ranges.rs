use std::path::PathBuf;

use crate::storage::{export_to_dir, import_from_path};

use super::{AppState, Confirm, EntryPurpose, Scene, TextEntry};

impl AppState {
    /// Id of the highlighted row in the sorted list.
    pub fn highlighted_id(&self) -> Option<String> {
        let sorted = self.book.sorted();
        sorted.get(self.list_index.min(sorted.len().saturating_sub(1))).map(|r| r.id.clone())
    }

    pub fn list_next(&mut self) {
        let n = self.book.len();
        if n > 0 {
            self.list_index = (self.list_index + 1) % n;
        }
    }

    pub fn list_prev(&mut self) {
        let n = self.book.len();
        if n > 0 {
            self.list_index = (self.list_index + n - 1) % n;
        }
    }

    /// Keep the highlight on `id` after the sort order changed.
    fn follow(&mut self, id: &str) {
        if let Some(pos) = self.book.sorted().iter().position(|r| r.id == id) {
            self.list_index = pos;
        }
    }

    fn clamp_list(&mut self) {
        self.list_index = self.list_index.min(self.book.len().saturating_sub(1));
    }

    pub fn open_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else { return };
        if self.book.select(&id).is_ok() {
            self.selector.release();
            self.scene = Scene::Grid;
        }
    }

    pub(crate) fn begin_entry(&mut self, purpose: EntryPurpose) {
        self.entry = Some(TextEntry { purpose, buffer: String::new(), error: None });
    }

    pub(crate) fn begin_rename(&mut self) {
        let Some(id) = self.highlighted_id() else { return };
        match self.book.get(&id) {
            Some(range) if range.is_preset => {
                self.notify_error(format!("'{}' is a preset and cannot be renamed", range.name));
            }
            Some(range) => {
                let buffer = range.name.clone();
                let purpose = EntryPurpose::Rename(id);
                self.entry = Some(TextEntry { purpose, buffer, error: None });
            }
            None => {}
        }
    }

    /// Apply the open text entry. Validation errors keep the popup open.
    pub(crate) fn submit_entry(&mut self) -> bool {
        let Some(entry) = self.entry.take() else { return false };
        let result = match &entry.purpose {
            EntryPurpose::NewRange => {
                self.book.create(&entry.buffer).map(|r| r.id.clone()).map_err(|e| e.to_string())
            }
            EntryPurpose::Rename(id) => {
                self.book.rename(id, &entry.buffer).map(|()| id.clone()).map_err(|e| e.to_string())
            }
            EntryPurpose::ImportPath => self.import(&entry.buffer),
        };
        match result {
            Ok(id) => {
                self.persist();
                self.follow(&id);
                matches!(entry.purpose, EntryPurpose::NewRange)
            }
            Err(error) => {
                self.entry = Some(TextEntry { error: Some(error), ..entry });
                false
            }
        }
    }

    fn import(&mut self, path: &str) -> Result<String, String> {
        let path = PathBuf::from(path.trim());
        let ranges = import_from_path(&path).map_err(|e| e.to_string())?;
        let count = self.book.merge_imported(ranges);
        self.notify(format!("Imported {count} ranges"));
        Ok(self.book.current_id().unwrap_or_default().to_string())
    }

    /// First press arms the delete, a second press on the same range does it.
    pub(crate) fn delete_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else { return };
        if self.confirm.as_ref() != Some(&Confirm::Delete(id.clone())) {
            let name = self.book.get(&id).map(|r| r.name.clone()).unwrap_or_default();
            self.confirm = Some(Confirm::Delete(id));
            self.notify(format!("Press d again to delete '{name}'"));
            return;
        }
        self.confirm = None;
        match self.book.delete(&id) {
            Ok(removed) => {
                if self.compare_with.as_deref() == Some(id.as_str()) {
                    self.compare_with = None;
                }
                self.clamp_list();
                self.persist();
                self.notify(format!("Deleted '{}'", removed.name));
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    pub(crate) fn favorite_highlighted(&mut self) {
        let Some(id) = self.highlighted_id() else { return };
        if self.book.toggle_favorite(&id).is_ok() {
            self.follow(&id);
            self.persist();
        }
    }

    /// Pick the highlighted range as the comparison target, or clear it.
    pub(crate) fn toggle_compare(&mut self) {
        let id = self.highlighted_id();
        self.compare_with = if self.compare_with == id { None } else { id };
    }

    pub(crate) fn export(&mut self) {
        match export_to_dir(&self.export_dir, self.book.ranges()) {
            Ok(path) => self.notify(format!("Exported to {}", path.display())),
            Err(err) => self.notify_error(format!("Export failed: {err}")),
        }
    }

    pub(crate) fn reset_presets(&mut self) {
        if self.confirm != Some(Confirm::ResetPresets) {
            self.confirm = Some(Confirm::ResetPresets);
            self.notify("Press R again to restore the built-in presets");
            return;
        }
        self.confirm = None;
        self.book.reset_presets();
        self.clamp_list();
        self.persist();
        self.notify("Presets restored");
    }
}
