use crate::ids::{IdGenerator, RandomIds};
use crate::models::DashboardState;
use crate::storage::StateStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: StateStore,
    pub data: Arc<Mutex<DashboardState>>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(store: StateStore, data: DashboardState) -> Self {
        Self::with_ids(store, data, Arc::new(RandomIds))
    }

    pub fn with_ids(store: StateStore, data: DashboardState, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            data: Arc::new(Mutex::new(data)),
            ids,
        }
    }
}
