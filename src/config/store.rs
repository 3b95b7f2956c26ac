//! Persisted enabled/disabled switch with read-through semantics.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{
    AtomicBool,
    Ordering,
};

use super::types::{
    ConfigError,
    ConfigRecord,
};

/// On-disk boolean switch controlling whether translations are served.
///
/// The backing file is the sole source of truth: [`read`](Self::read)
/// re-reads it on every call, so an operator can flip the flag by editing
/// the file while the server runs. The in-memory mirror only records the
/// last value observed and must never be trusted where correctness matters.
///
/// Writes are not synchronized against concurrent reads or other writes; a
/// read racing a write may observe a stale or torn record (a torn record
/// parses as absent and falls back to the default). The flag is toggled
/// rarely, so this is accepted rather than locked around.
#[derive(Debug)]
pub struct ConfigStore {
    /// Path to the backing JSON file.
    path: PathBuf,
    /// Last observed value, for non-authoritative callers.
    mirror: AtomicBool,
}

impl ConfigStore {
    /// Create a store over `path`, seeding the mirror with one read.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let store =
            Self { path: path.into(), mirror: AtomicBool::new(ConfigRecord::default().translation_enabled) };
        store.read();
        store
    }

    /// Read the current record from disk.
    ///
    /// An absent or unparsable backing file yields the default record
    /// (enabled); both are normal conditions, not errors.
    pub fn read(&self) -> ConfigRecord {
        let record = match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        %error,
                        "Config file is unparsable, using defaults"
                    );
                    ConfigRecord::default()
                }
            },
            Err(error) => {
                tracing::debug!(
                    path = %self.path.display(),
                    %error,
                    "Config file not readable, using defaults"
                );
                ConfigRecord::default()
            }
        };

        self.mirror.store(record.translation_enabled, Ordering::Relaxed);
        record
    }

    /// Persist a new enabled state.
    ///
    /// The record is written pretty-printed; `serde_json` leaves non-ASCII
    /// text unescaped, so the file stays hand-editable.
    ///
    /// # Errors
    /// - [`ConfigError::Io`] when the backing file cannot be written
    /// - [`ConfigError::Serialize`] when the record cannot be serialized
    pub fn write(&self, enabled: bool) -> Result<(), ConfigError> {
        let record = ConfigRecord { translation_enabled: enabled };
        let content = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, content)?;

        self.mirror.store(enabled, Ordering::Relaxed);
        tracing::debug!(path = %self.path.display(), enabled, "Config persisted");
        Ok(())
    }

    /// The last value observed by this store instance.
    ///
    /// Best-effort only: another process (or another store over the same
    /// file) may have written since. Use [`read`](Self::read) whenever the
    /// answer matters.
    #[must_use]
    pub fn cached_enabled(&self) -> bool {
        self.mirror.load(Ordering::Relaxed)
    }
}
