pub mod app;
pub mod board;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{JsonFileStore, MemoryStore, TaskStore, resolve_data_path};
