use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

pub const AUTH_KEY: &str = "isAuthenticated";
pub const USER_KEY: &str = "user";

/// String key-value storage standing in for the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}

/// Keeps all keys in one JSON object on disk. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(self.io_error(err)),
        }
    }

    /// Starting point for a write. A file that no longer parses is replaced
    /// rather than blocking every later login or logout.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_all() {
            Err(StoreError::Json(err)) => {
                tracing::warn!(
                    error = %err,
                    path = %self.path.display(),
                    "overwriting unreadable session file"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, raw).map_err(|e| self.io_error(e))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.read_for_write()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.read_for_write()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl UserProfile {
    pub fn guest() -> Self {
        Self {
            name: "User".to_string(),
            email: "user@example.com".to_string(),
            role: default_role(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }

    /// Protected views render only for an authenticated session.
    pub fn can_access_protected(&self) -> bool {
        self.authenticated
    }

    /// The profile to display; the guest record when none is stored.
    pub fn display_user(&self) -> UserProfile {
        self.user.clone().unwrap_or_else(UserProfile::guest)
    }
}

/// Load/save boundary for the session flag and the user profile.
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Never fails: an unreadable store means "not authenticated" and an
    /// unreadable profile means the guest profile.
    pub fn load(&self) -> AuthState {
        let authenticated = match self.store.get(AUTH_KEY) {
            Ok(flag) => flag.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, "unable to read session flag, treating as signed out");
                return AuthState::anonymous();
            }
        };

        let user = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    tracing::warn!(error = %err, "stored profile is corrupt, using guest profile");
                    Some(UserProfile::guest())
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "unable to read stored profile, using guest profile");
                Some(UserProfile::guest())
            }
        };

        AuthState {
            authenticated,
            user,
        }
    }

    pub fn login(&self, profile: &UserProfile) -> Result<AuthState, StoreError> {
        self.store.set(AUTH_KEY, "true")?;
        self.save_profile(profile)?;
        tracing::info!(email = %profile.email, "signed in");
        Ok(AuthState {
            authenticated: true,
            user: Some(profile.clone()),
        })
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(USER_KEY, &raw)
    }

    pub fn logout(&self) -> Result<AuthState, StoreError> {
        self.store.remove(AUTH_KEY)?;
        self.store.remove(USER_KEY)?;
        tracing::info!("signed out");
        Ok(AuthState::anonymous())
    }
}
