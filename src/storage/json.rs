//! JSON file-based item store.
//!
//! The collection lives under a single fixed key in a small JSON document.
//! Every replace rewrites the whole document through a temporary file that is
//! renamed over the target, so a crash mid-write leaves the previous
//! collection intact.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "updated_at": 1760812345,
//!   "checklist_items": [
//!     { "id": "1", "name": "Arroz", "completed": false, "quantity": 1, "priority": 0 },
//!     { "id": "2", "name": "Huevos", "completed": false, "quantity": 1, "priority": 2 }
//!   ]
//! }
//! ```
//!
//! Item fields other than `id` and `name` may be omitted; they load as their
//! defaults.

use crate::domain::error::{KeylistError, Result};
use crate::domain::Item;
use crate::storage::backend::ItemStore;
use crate::storage::collection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Key under which the ordered item array is stored.
pub const STORAGE_KEY: &str = "checklist_items";

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

const fn format_version() -> u32 {
    FORMAT_VERSION
}

/// On-disk document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    #[serde(default = "format_version")]
    version: u32,

    /// Unix timestamp of the last write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<i64>,

    /// Must match [`STORAGE_KEY`].
    #[serde(rename = "checklist_items", default)]
    items: Vec<Item>,
}

/// JSON file item store.
///
/// The collection is cached in memory; reads never touch the disk after
/// [`open`](Self::open). Writes go straight through.
#[derive(Debug)]
pub struct JsonStore {
    file_path: PathBuf,
    items: Vec<Item>,
}

impl JsonStore {
    /// Opens the store at `file_path`, falling back to `seed` when the file
    /// does not exist yet.
    ///
    /// A document without the items key loads as an empty collection. The
    /// seed is not written until the first mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the parent directory cannot be created
    /// - the file exists but cannot be read
    /// - the file contains malformed JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use keylist::storage::{ItemStore, JsonStore};
    /// use keylist::seed_items;
    ///
    /// let store = JsonStore::open("/tmp/keylist/items.json", seed_items())?;
    /// println!("{} items", store.list()?.len());
    /// # Ok::<(), keylist::KeylistError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>, seed: Vec<Item>) -> Result<Self> {
        let file_path = file_path.into();
        let _span = tracing::debug_span!("json_store_open", path = ?file_path).entered();

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let items = if file_path.exists() {
            let data = Self::load_from_file(&file_path)?;
            collection::normalize(data.items)
        } else {
            tracing::debug!(seed_count = seed.len(), "no stored items, using seed list");
            seed
        };

        tracing::debug!(item_count = items.len(), "json store opened");

        Ok(Self { file_path, items })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;

        if contents.trim().is_empty() {
            tracing::debug!("storage file is empty");
            return Ok(StorageData {
                version: FORMAT_VERSION,
                updated_at: None,
                items: Vec::new(),
            });
        }

        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| KeylistError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            items = data.items.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    fn save_to_file(&self, items: &[Item]) -> Result<()> {
        let data = StorageData {
            version: FORMAT_VERSION,
            updated_at: Some(chrono::Utc::now().timestamp()),
            items: items.to_vec(),
        };

        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| KeylistError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(count = items.len(), "items saved");
        Ok(())
    }
}

impl ItemStore for JsonStore {
    fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn replace(&mut self, items: Vec<Item>) -> Result<()> {
        let _span = tracing::debug_span!("json_store_replace", count = items.len()).entered();

        self.save_to_file(&items)?;
        self.items = items;
        Ok(())
    }
}
