use crate::errors::AppError;
use crate::models::{StoredPayload, Task};
use crate::schedule::{day_key, today};
use chrono::NaiveDate;
use serde::Serialize;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::{debug, error};

pub const STORAGE_KEY: &str = "grindticks_tasks_v1";

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(format!("data/{STORAGE_KEY}.json"))
}

pub trait TaskStore: Clone + Send + Sync + 'static {
    fn load_at(&self, today: NaiveDate) -> impl Future<Output = Vec<Task>> + Send;

    fn save_at(
        &self,
        today: NaiveDate,
        tasks: &[Task],
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    fn load(&self) -> impl Future<Output = Vec<Task>> + Send {
        self.load_at(today())
    }

    fn save(&self, tasks: &[Task]) -> impl Future<Output = Result<(), AppError>> + Send {
        self.save_at(today(), tasks)
    }
}

#[derive(Serialize)]
struct PayloadRef<'a> {
    date: String,
    tasks: &'a [Task],
}

pub fn encode_tasks(today: NaiveDate, tasks: &[Task]) -> Result<String, AppError> {
    let payload = PayloadRef {
        date: day_key(today),
        tasks,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn decode_tasks(raw: &str, today: NaiveDate) -> Vec<Task> {
    let payload: StoredPayload = match serde_json::from_str(raw) {
        Ok(payload) => payload,
        Err(err) => {
            error!("failed to parse stored tasks: {err}");
            return Vec::new();
        }
    };

    let mut tasks = payload.tasks;
    if payload.date != day_key(today) {
        debug!(stored = %payload.date, "stored tasks are from another day, resetting counts");
        for task in &mut tasks {
            task.count = 0;
        }
    }
    tasks
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskStore for JsonFileStore {
    async fn load_at(&self, today: NaiveDate) -> Vec<Task> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => decode_tasks(&raw, today),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                error!("failed to read data file: {err}");
                Vec::new()
            }
        }
    }

    async fn save_at(&self, today: NaiveDate, tasks: &[Task]) -> Result<(), AppError> {
        let payload = encode_tasks(today, tasks)?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TaskStore for MemoryStore {
    async fn load_at(&self, today: NaiveDate) -> Vec<Task> {
        match self.raw() {
            Some(raw) => decode_tasks(&raw, today),
            None => Vec::new(),
        }
    }

    async fn save_at(&self, today: NaiveDate, tasks: &[Task]) -> Result<(), AppError> {
        let payload = encode_tasks(today, tasks)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(payload);
        Ok(())
    }
}
