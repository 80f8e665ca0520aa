pub mod ai;
pub mod app;
pub mod config;
pub mod errors;
pub mod goal_store;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;

pub use app::router;
pub use config::AppConfig;
pub use goal_store::GoalStore;
pub use state::AppState;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
