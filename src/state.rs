use crate::ai::AskClient;
use crate::goal_store::GoalStore;
use crate::storage::JsonFileStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub goals: Arc<GoalStore<JsonFileStore>>,
    /// Held across load-then-write sequences on the goal list.
    pub goals_write: Arc<Mutex<()>>,
    pub assistant: AskClient,
}

impl AppState {
    pub fn new(store: JsonFileStore, assistant: AskClient) -> Self {
        Self {
            goals: Arc::new(GoalStore::new(store)),
            goals_write: Arc::new(Mutex::new(())),
            assistant,
        }
    }
}
