use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::domain::Draft;

/// Fixed storage key: the single draft slot per owner session.
pub const DRAFT_FILE_NAME: &str = "listing-draft.json";

/// Storage abstraction so the controller can be exercised in isolation.
///
/// `load` never surfaces a malformed record: anything that does not
/// deserialize back into a [`Draft`] is reported as absent, trading strictness
/// for availability.
pub trait DraftStore {
    fn load(&self) -> Result<Option<Draft>, DraftStoreError>;
    fn save(&self, draft: &Draft) -> Result<(), DraftStoreError>;
    fn clear(&self) -> Result<(), DraftStoreError>;
}

/// Stores are often shared between the controller and an observer (tests,
/// the session shell), so `Arc`-wrapped stores work directly.
impl<S: DraftStore> DraftStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Draft>, DraftStoreError> {
        (**self).load()
    }

    fn save(&self, draft: &Draft) -> Result<(), DraftStoreError> {
        (**self).save(draft)
    }

    fn clear(&self) -> Result<(), DraftStoreError> {
        (**self).clear()
    }
}

/// Error enumeration for draft storage failures.
#[derive(Debug, thiserror::Error)]
pub enum DraftStoreError {
    #[error("draft storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("draft could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// In-memory store holding the serialized record, so round-trips exercise the
/// same serde path as the file-backed store.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slot: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with a raw payload, bypassing serialization. Lets tests
    /// stage corrupt records.
    pub fn with_raw(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<Draft>, DraftStoreError> {
        let slot = self.lock();
        let Some(raw) = slot.as_deref() else {
            return Ok(None);
        };
        match serde_json::from_str(raw) {
            Ok(draft) => Ok(Some(draft)),
            Err(error) => {
                warn!(%error, "discarding malformed in-memory draft record");
                Ok(None)
            }
        }
    }

    fn save(&self, draft: &Draft) -> Result<(), DraftStoreError> {
        let raw = serde_json::to_string(draft)?;
        *self.lock() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftStoreError> {
        *self.lock() = None;
        Ok(())
    }
}

/// File-backed store keeping the draft as one JSON document under the
/// configured storage directory. Writes go through a sibling temp file and a
/// rename so a crash mid-write cannot leave a torn record.
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            path: storage_dir.as_ref().join(DRAFT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Result<Option<Draft>, DraftStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(draft) => Ok(Some(draft)),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "discarding malformed draft record, starting fresh"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, draft: &Draft) -> Result<(), DraftStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(draft)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, raw)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), DraftStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
