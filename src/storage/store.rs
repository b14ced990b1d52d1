use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::Ledger;

use super::{decode, encode};

/// Default store file name.
pub const DEFAULT_STORE_PATH: &str = "expenses.dat";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Stored expenses could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Expenses could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// What to do when the store cannot be read or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Report the problem and continue with an empty ledger.
    #[default]
    Lenient,
    /// Propagate the error to the caller.
    Strict,
}

/// Whole-ledger persistence. Loads everything up front and overwrites
/// everything on save; there is no incremental write.
pub trait Store {
    /// Human-readable location, used in log messages.
    fn location(&self) -> String;

    fn load(&self) -> Result<Ledger, StoreError>;

    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError>;

    /// Load according to `policy`. With [`LoadPolicy::Lenient`] a failure is
    /// logged and an empty ledger is returned instead.
    fn load_with(&self, policy: LoadPolicy) -> Result<Ledger, StoreError> {
        match self.load() {
            Ok(ledger) => Ok(ledger),
            Err(err) if policy == LoadPolicy::Lenient => {
                warn!(location = %self.location(), error = %err, "continuing with an empty ledger");
                Ok(Ledger::new())
            }
            Err(err) => Err(err),
        }
    }
}

/// Store backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: io::Error) -> StoreError {
        StoreError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl Store for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads the whole file. A missing file is created empty as a side effect.
    fn load(&self) -> Result<Ledger, StoreError> {
        match fs::metadata(&self.path) {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "creating empty store file");
                fs::File::create(&self.path).map_err(|e| self.unavailable(e))?;
                return Ok(Ledger::new());
            }
            Err(err) => return Err(self.unavailable(err)),
        }

        let bytes = fs::read(&self.path).map_err(|e| self.unavailable(e))?;
        let ledger = decode(&bytes)?;
        debug!(path = %self.path.display(), count = ledger.len(), "loaded expenses");
        Ok(ledger)
    }

    /// Truncates and rewrites the file. A failure mid-write can leave it truncated.
    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        let bytes = encode(ledger)?;
        fs::write(&self.path, bytes).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), count = ledger.len(), "saved expenses");
        Ok(())
    }
}

/// Store kept entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bytes: Vec<u8>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored bytes, e.g. to simulate a corrupt store.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            unavailable: false,
        }
    }

    /// A store on which every load and save fails with `StorageUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            bytes: Vec::new(),
            unavailable: true,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::StorageUnavailable {
                path: PathBuf::from(self.location()),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is unavailable"),
            });
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<Ledger, StoreError> {
        self.check_available()?;
        decode(&self.bytes)
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        self.check_available()?;
        self.bytes = encode(ledger)?;
        Ok(())
    }
}
