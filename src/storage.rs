use crate::models::DashboardState;
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::{error, info, warn};

/// Fixed key the whole dashboard document is stored under.
pub const STATE_KEY: &str = "vitaltrack-dashboard";

/// Key-value text store. The file backend keeps one `<key>.json` per key.
#[derive(Clone, Debug)]
pub enum StateStore {
    File { dir: PathBuf },
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl StateStore {
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        StateStore::File { dir: dir.into() }
    }

    pub fn memory() -> Self {
        StateStore::Memory(Arc::default())
    }

    pub fn path_for(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    pub async fn read(&self, key: &str) -> io::Result<Option<String>> {
        match self {
            StateStore::File { dir } => match fs::read_to_string(Self::path_for(dir, key)).await {
                Ok(text) => Ok(Some(text)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            },
            StateStore::Memory(map) => Ok(map.lock().await.get(key).cloned()),
        }
    }

    pub async fn write(&self, key: &str, text: &str) -> io::Result<()> {
        match self {
            StateStore::File { dir } => {
                let path = Self::path_for(dir, key);
                let staging = path.with_extension("json.tmp");
                fs::write(&staging, text).await?;
                fs::rename(&staging, &path).await
            }
            StateStore::Memory(map) => {
                map.lock().await.insert(key.to_string(), text.to_string());
                Ok(())
            }
        }
    }
}

/// Reads the persisted dashboard. Absent, blank, unreadable or unparsable
/// state all fall back to an empty dashboard.
pub async fn load_state(store: &StateStore) -> DashboardState {
    match store.read(STATE_KEY).await {
        Ok(Some(text)) if !text.trim().is_empty() => match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse stored state under {STATE_KEY}: {err}");
                DashboardState::default()
            }
        },
        Ok(_) => {
            info!("no stored state under {STATE_KEY}, starting empty");
            DashboardState::default()
        }
        Err(err) => {
            warn!("failed to read stored state under {STATE_KEY}: {err}");
            DashboardState::default()
        }
    }
}

/// Writes the whole dashboard. Failure is logged and reported, never fatal.
pub async fn persist_state(store: &StateStore, data: &DashboardState) -> bool {
    let payload = match serde_json::to_string_pretty(data) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("failed to encode state: {err}");
            return false;
        }
    };
    match store.write(STATE_KEY, &payload).await {
        Ok(()) => true,
        Err(err) => {
            warn!("failed to write stored state under {STATE_KEY}: {err}");
            false
        }
    }
}
