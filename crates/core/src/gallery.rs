//! Durable gallery storage for generation results.
//!
//! Past results are kept as JSON arrays of data-URI entries, one store
//! per payload kind, most-recent-first. The stores are a sink for the
//! pipeline: the surrounding CLI writes and lists them, the pipeline
//! itself never reads them back.

use crate::data_uri;
use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Which gallery store to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Generated MP4 videos
    Videos,
    /// Converted GIFs
    Gifs,
}

impl StoreKind {
    /// File name of the store under the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreKind::Videos => "saved_videos.json",
            StoreKind::Gifs => "saved_gifs.json",
        }
    }

    /// MIME type entries in this store must carry.
    pub fn mime_type(&self) -> &'static str {
        match self {
            StoreKind::Videos => "video/mp4",
            StoreKind::Gifs => "image/gif",
        }
    }

    /// File extension used when exporting an entry.
    pub fn extension(&self) -> &'static str {
        match self {
            StoreKind::Videos => "mp4",
            StoreKind::Gifs => "gif",
        }
    }
}

/// One persisted gallery record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    /// Millisecond timestamp identifier
    pub id: u64,
    /// Payload as a MIME-tagged data URI
    pub url: String,
    /// Creation time (ISO-8601)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl GalleryEntry {
    /// Decode the entry payload back into raw bytes.
    pub fn payload(&self) -> Result<Vec<u8>> {
        let (_, bytes) = data_uri::decode(&self.url)?;
        Ok(bytes)
    }
}

/// A gallery store bound to one JSON file.
#[derive(Debug, Clone)]
pub struct Gallery {
    path: PathBuf,
    kind: StoreKind,
}

impl Gallery {
    /// Open a store in the default data directory.
    ///
    /// Honors `LIVELOOP_DATA_DIR`, falling back to the platform data dir
    /// (e.g. `~/.local/share/liveloop`).
    pub fn open_default(kind: StoreKind) -> Result<Self> {
        let dir = match std::env::var_os("LIVELOOP_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or_else(|| CoreError::storage("could not determine data directory"))?
                .join("liveloop"),
        };
        Ok(Self::open_at(dir, kind))
    }

    /// Open a store rooted at a specific directory.
    pub fn open_at(dir: impl Into<PathBuf>, kind: StoreKind) -> Self {
        Self {
            path: dir.into().join(kind.file_name()),
            kind,
        }
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode raw bytes and prepend them to the store, returning the new
    /// entry.
    pub fn save(&self, payload: &[u8]) -> Result<GalleryEntry> {
        let mut entries = self.read_all();

        let mut id = Utc::now().timestamp_millis() as u64;
        // Two saves can land in the same millisecond; ids must stay unique.
        while entries.iter().any(|e| e.id == id) {
            id += 1;
        }

        let entry = GalleryEntry {
            id,
            url: data_uri::encode(self.kind.mime_type(), payload),
            created_at: Utc::now(),
        };

        entries.insert(0, entry.clone());
        self.write_all(&entries)?;
        Ok(entry)
    }

    /// Load all entries, most recent first.
    ///
    /// Entries whose `url` does not carry this store's data-URI prefix
    /// are filtered out; an unreadable or corrupt store loads as empty.
    pub fn load(&self) -> Result<Vec<GalleryEntry>> {
        let mut entries = self.read_all();
        entries.retain(|e| data_uri::has_prefix(&e.url, self.kind.mime_type()));
        Ok(entries)
    }

    /// Remove the entry with the given id. Removing an absent id is a
    /// no-op.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut entries = self.read_all();
        entries.retain(|e| e.id != id);
        self.write_all(&entries)
    }

    /// Write the payload of the entry with the given id to `dest`.
    pub fn export(&self, id: u64, dest: &Path) -> Result<u64> {
        let entries = self.load()?;
        let entry = entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(CoreError::EntryNotFound(id))?;

        let bytes = entry.payload()?;
        std::fs::write(dest, &bytes)?;
        Ok(bytes.len() as u64)
    }

    fn read_all(&self) -> Vec<GalleryEntry> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "gallery store unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_all(&self, entries: &[GalleryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
