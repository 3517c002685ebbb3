use crate::session::DaySelection;
use crate::store::UserStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub selection: Arc<Mutex<DaySelection>>,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(store),
            selection: Arc::new(Mutex::new(DaySelection::default())),
        }
    }
}
