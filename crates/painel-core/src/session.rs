//! Session persistence
//!
//! The only persisted state is the logged-in user's identifier, stored under
//! a single key. A `Session` value is created on successful authentication
//! and destroyed on sign-out; commands receive it explicitly.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::api::FinanceApi;
use crate::error::{Error, Result};

/// Key under which the user identifier is stored
pub const SESSION_KEY: &str = "usuarioId";

/// Single-slot key-value string store
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// JSON-file-backed store
///
/// Writes go through a temp file in the same directory that is renamed into
/// place.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::Session(format!(
                "Corrupt session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serde_json::to_string_pretty(map)?.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        debug!("Wrote session file {}", self.path.display());
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| Error::Session("Failed to acquire session store lock".into()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// A logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Restore a persisted session, if any. An empty stored id counts as absent.
    pub fn restore(store: &dyn SessionStore) -> Result<Option<Self>> {
        Ok(store
            .get(SESSION_KEY)?
            .filter(|id| !id.trim().is_empty())
            .map(Self::new))
    }

    /// Like `restore`, but a missing session is `Error::NotLoggedIn`
    pub fn require(store: &dyn SessionStore) -> Result<Self> {
        Self::restore(store)?.ok_or(Error::NotLoggedIn)
    }

    /// Authenticate and persist the returned identifier
    pub async fn sign_in(
        api: &dyn FinanceApi,
        store: &dyn SessionStore,
        email: &str,
        senha: &str,
    ) -> Result<Self> {
        let user_id = api.authenticate(email, senha).await?;
        Self::establish(store, user_id)
    }

    /// Authenticate through the legacy query-string endpoint
    pub async fn sign_in_legacy(
        api: &dyn FinanceApi,
        store: &dyn SessionStore,
        email: &str,
        senha: &str,
    ) -> Result<Self> {
        let user_id = api.authenticate_legacy(email, senha).await?;
        Self::establish(store, user_id)
    }

    fn establish(store: &dyn SessionStore, user_id: String) -> Result<Self> {
        store.set(SESSION_KEY, &user_id)?;
        info!("Signed in as user {}", user_id);
        Ok(Self::new(user_id))
    }

    /// Remove the persisted identifier, ending the session
    pub fn sign_out(self, store: &dyn SessionStore) -> Result<()> {
        store.remove(SESSION_KEY)?;
        info!("Signed out user {}", self.user_id);
        Ok(())
    }
}
