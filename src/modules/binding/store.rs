use crate::api::types::UserId;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, warn};

pub const BINDINGS_FILE: &str = "bindings.json";

pub type Bindings = BTreeMap<UserId, String>;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to acquire binding lock")]
    LockPoisoned,
}

pub type BindingResult<T> = Result<T, BindingError>;

/// Maps a chat user to the character name they bound.
#[cfg_attr(test, mockall::automock)]
pub trait BindingStore: Send + Sync {
    fn get(&self, user_id: &str) -> BindingResult<Option<String>>;
    fn set(&self, user_id: &str, character_name: &str) -> BindingResult<()>;
    /// Binds only when the user has no binding yet, under a single lock.
    /// Returns the existing binding when there was one, leaving it unchanged.
    fn insert_if_absent(&self, user_id: &str, character_name: &str) -> BindingResult<Option<String>>;
    /// Returns the removed binding, if there was one.
    fn remove(&self, user_id: &str) -> BindingResult<Option<String>>;
    fn load_all(&self) -> BindingResult<Bindings>;
}

fn lock(bindings: &Mutex<Bindings>) -> BindingResult<MutexGuard<'_, Bindings>> {
    bindings.lock().map_err(|_| BindingError::LockPoisoned)
}

#[derive(Debug, Default)]
pub struct InMemoryBindingStore {
    bindings: Mutex<Bindings>,
}

impl InMemoryBindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Bindings) -> Self {
        Self {
            bindings: Mutex::new(bindings),
        }
    }
}

impl BindingStore for InMemoryBindingStore {
    fn get(&self, user_id: &str) -> BindingResult<Option<String>> {
        Ok(lock(&self.bindings)?.get(user_id).cloned())
    }

    fn set(&self, user_id: &str, character_name: &str) -> BindingResult<()> {
        lock(&self.bindings)?.insert(user_id.to_string(), character_name.to_string());
        Ok(())
    }

    fn insert_if_absent(&self, user_id: &str, character_name: &str) -> BindingResult<Option<String>> {
        let mut bindings = lock(&self.bindings)?;
        if let Some(current) = bindings.get(user_id) {
            return Ok(Some(current.clone()));
        }
        bindings.insert(user_id.to_string(), character_name.to_string());
        Ok(None)
    }

    fn remove(&self, user_id: &str) -> BindingResult<Option<String>> {
        Ok(lock(&self.bindings)?.remove(user_id))
    }

    fn load_all(&self) -> BindingResult<Bindings> {
        Ok(lock(&self.bindings)?.clone())
    }
}

/// Keeps the whole map in memory and rewrites `bindings.json` after each change.
#[derive(Debug)]
pub struct JsonFileBindingStore {
    path: PathBuf,
    bindings: Mutex<Bindings>,
}

impl JsonFileBindingStore {
    pub fn open<P: AsRef<Path>>(data_dir: P) -> BindingResult<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;

        let path = data_dir.join(BINDINGS_FILE);
        let bindings = Self::read_file(&path);
        debug!(path = %path.display(), count = bindings.len(), "Loaded bindings");

        Ok(Self {
            path,
            bindings: Mutex::new(bindings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Bindings {
        if !path.exists() {
            return Bindings::new();
        }

        let parsed = fs::read_to_string(path)
            .map_err(BindingError::from)
            .and_then(|content| serde_json::from_str(&content).map_err(BindingError::from));

        match parsed {
            Ok(bindings) => bindings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read bindings, starting empty");
                Bindings::new()
            }
        }
    }

    fn save(&self, bindings: &Bindings) -> BindingResult<()> {
        let json = serde_json::to_string_pretty(bindings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl BindingStore for JsonFileBindingStore {
    fn get(&self, user_id: &str) -> BindingResult<Option<String>> {
        Ok(lock(&self.bindings)?.get(user_id).cloned())
    }

    fn set(&self, user_id: &str, character_name: &str) -> BindingResult<()> {
        let mut bindings = lock(&self.bindings)?;
        bindings.insert(user_id.to_string(), character_name.to_string());
        self.save(&bindings)
    }

    fn insert_if_absent(&self, user_id: &str, character_name: &str) -> BindingResult<Option<String>> {
        let mut bindings = lock(&self.bindings)?;
        if let Some(current) = bindings.get(user_id) {
            return Ok(Some(current.clone()));
        }
        bindings.insert(user_id.to_string(), character_name.to_string());
        if let Err(e) = self.save(&bindings) {
            bindings.remove(user_id);
            return Err(e);
        }
        Ok(None)
    }

    fn remove(&self, user_id: &str) -> BindingResult<Option<String>> {
        let mut bindings = lock(&self.bindings)?;
        let removed = bindings.remove(user_id);
        if removed.is_some() {
            self.save(&bindings)?;
        }
        Ok(removed)
    }

    fn load_all(&self) -> BindingResult<Bindings> {
        Ok(lock(&self.bindings)?.clone())
    }
}
