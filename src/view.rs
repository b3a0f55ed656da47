use std::sync::{Mutex, MutexGuard};

use crate::render::entry_html;
use crate::types::{Entry, EntryType};

/// One rendered row of the directory list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub entry_type: EntryType,
    /// Raw name as sent by the server
    pub name: String,
    pub path: String,
    /// Icon plus escaped name, safe to insert as markup
    pub html: String,
}

impl From<&Entry> for ListingRow {
    fn from(entry: &Entry) -> Self {
        Self {
            entry_type: entry.entry_type,
            name: entry.name.clone(),
            path: entry.path.clone(),
            html: entry_html(entry),
        }
    }
}

/// UI surface driven by the controller
///
/// The surface has three regions: the path label, the directory list and
/// the status line. They are disjoint, so writes to one never disturb another.
pub trait View: Send + Sync {
    /// Show the directory currently listed
    fn set_path(&self, path: &str);

    /// Replace the whole list with `rows`, in order
    fn render_listing(&self, rows: &[ListingRow]);

    /// Replace the status line text
    fn set_status(&self, text: &str);
}

/// Snapshot of what a [`MemoryView`] currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub path: Option<String>,
    pub rows: Vec<ListingRow>,
    pub status: String,
    pub path_writes: usize,
    pub listing_writes: usize,
    pub status_writes: usize,
}

/// In-memory view that records every write
#[derive(Default)]
pub struct MemoryView {
    state: Mutex<ViewState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn path(&self) -> Option<String> {
        self.lock().path.clone()
    }

    pub fn rows(&self) -> Vec<ListingRow> {
        self.lock().rows.clone()
    }

    pub fn status(&self) -> String {
        self.lock().status.clone()
    }

    pub fn status_writes(&self) -> usize {
        self.lock().status_writes
    }
}

impl View for MemoryView {
    fn set_path(&self, path: &str) {
        let mut state = self.lock();
        state.path = Some(path.to_string());
        state.path_writes += 1;
    }

    fn render_listing(&self, rows: &[ListingRow]) {
        let mut state = self.lock();
        state.rows = rows.to_vec();
        state.listing_writes += 1;
    }

    fn set_status(&self, text: &str) {
        let mut state = self.lock();
        state.status = text.to_string();
        state.status_writes += 1;
    }
}
