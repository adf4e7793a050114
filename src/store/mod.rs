mod persist;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};

use crate::models::ClipboardItem;

pub use persist::RecordError;

/// Fixed name of the backing file, created next to the executable unless
/// overridden on the command line.
pub const DATA_FILE_NAME: &str = "clipboard_data.txt";

struct StoreInner {
    /// Insertion/promotion order, newest first. Pinned and unpinned items
    /// interleave here; [`ItemStore::get_items`] partitions the view.
    items: Vec<ClipboardItem>,
    /// Always greater than every id ever assigned, never decreases.
    next_id: u64,
}

/// Ordered, de-duplicated clipboard history backed by a flat file.
///
/// The handle is cheap to clone and shared across request handlers. Reads
/// take the shared side of the lock, mutations the exclusive side. The
/// in-memory sequence is authoritative; the file is a best-effort snapshot
/// for restart recovery, rewritten whole after each mutation.
#[derive(Clone)]
pub struct ItemStore {
    inner: Arc<RwLock<StoreInner>>,
    data_path: Arc<PathBuf>,
}

impl ItemStore {
    /// Open a store backed by `path`, loading any existing history.
    /// A missing file is an empty history, not an error.
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let inner = load_history(&path)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(inner)),
            data_path: Arc::new(path),
        })
    }

    /// Open the store at its default location: `clipboard_data.txt` next to
    /// the running executable, or in the current directory if the executable
    /// path cannot be determined.
    pub fn open_default() -> Result<Self> {
        Self::open(default_data_path())
    }

    /// Path of the backing file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    // ============================================================
    // Item operations
    // ============================================================

    /// Add clipboard text, deduplicating by content.
    ///
    /// Returns the stored item and whether it already existed. An existing
    /// unpinned item is moved to the front of the sequence (most recent
    /// first), keeping its id; an existing pinned item is left exactly where
    /// it is. New items go to the front with a freshly allocated id.
    pub fn add_item(&self, content: String) -> (ClipboardItem, bool) {
        let mut inner = self.inner.write().expect("store lock poisoned");

        if let Some(pos) = inner.items.iter().position(|i| i.content == content) {
            if inner.items[pos].pinned {
                return (inner.items[pos].clone(), true);
            }
            let item = inner.items.remove(pos);
            inner.items.insert(0, item.clone());
            return (item, true);
        }

        let item = ClipboardItem {
            id: inner.next_id,
            content,
            pinned: false,
        };
        inner.next_id += 1;
        inner.items.insert(0, item.clone());
        (item, false)
    }

    /// All items in display order: pinned items first, then unpinned, each
    /// group keeping its relative sequence order (stable partition).
    pub fn get_items(&self) -> Vec<ClipboardItem> {
        let inner = self.inner.read().expect("store lock poisoned");
        let (pinned, normal): (Vec<_>, Vec<_>) =
            inner.items.iter().cloned().partition(|i| i.pinned);
        pinned.into_iter().chain(normal).collect()
    }

    /// Remove the item with the given id. Returns false for an unknown id.
    pub fn delete_item(&self, id: u64) -> bool {
        let mut inner = self.inner.write().expect("store lock poisoned");
        match inner.items.iter().position(|i| i.id == id) {
            Some(pos) => {
                inner.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Flip the pin flag of the item with the given id, leaving its position
    /// in the underlying sequence untouched. Returns false for an unknown id.
    pub fn toggle_pin(&self, id: u64) -> bool {
        let mut inner = self.inner.write().expect("store lock poisoned");
        match inner.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.pinned = !item.pinned;
                true
            }
            None => false,
        }
    }

    // ============================================================
    // Persistence
    // ============================================================

    /// Rewrite the backing file with the full sequence, one record per line,
    /// in sequence order (not display order).
    pub fn save(&self) -> Result<()> {
        let inner = self.inner.read().expect("store lock poisoned");
        let lines: Vec<String> = inner.items.iter().map(persist::encode_line).collect();
        fs::write(self.data_path.as_ref(), lines.join("\n"))
            .with_context(|| format!("Failed to write {}", self.data_path.display()))
    }
}

/// Read the history file into a fresh sequence. Malformed lines are skipped
/// with a warning; the remaining records load in file order.
fn load_history(path: &Path) -> Result<StoreInner> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(StoreInner {
                items: Vec::new(),
                next_id: 1,
            })
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let mut items = Vec::new();
    let mut max_id = 0u64;

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match persist::parse_line(line) {
            Ok(item) => {
                max_id = max_id.max(item.id);
                items.push(item);
            }
            Err(e) => tracing::warn!("Skipping malformed history record {:?}: {}", line, e),
        }
    }

    tracing::info!("Loaded {} clipboard records", items.len());
    Ok(StoreInner {
        items,
        next_id: max_id + 1,
    })
}

fn default_data_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}
