use crate::board::Board;
use crate::errors::AppError;
use crate::models::BoardResponse;
use crate::schedule::{self, MidnightReset, day_key, until_next_midnight};
use crate::storage::TaskStore;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info};

// Mutations are saved before the lock is released.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    board: Arc<Mutex<Board>>,
}

impl<S: TaskStore> AppState<S> {
    /// Loads today's tasks and writes them straight back, restamping the day.
    pub async fn load(store: S) -> Result<Self, AppError> {
        let today = schedule::today();
        let tasks = store.load_at(today).await;
        store.save_at(today, &tasks).await?;
        info!(tasks = tasks.len(), day = %day_key(today), "tasks loaded");

        Ok(Self::from_board(store, Board::new(today, tasks)))
    }

    fn from_board(store: S, board: Board) -> Self {
        Self {
            store,
            board: Arc::new(Mutex::new(board)),
        }
    }

    pub async fn snapshot(&self) -> Result<BoardResponse, AppError> {
        let board = self.current_board().await?;
        Ok(BoardResponse::from(&*board))
    }

    pub async fn add_task(&self, name: &str, description: Option<&str>) -> Result<bool, AppError> {
        let mut board = self.current_board().await?;
        let Some(task) = board.add_task(name, description) else {
            return Ok(false);
        };
        info!(id = %task.id, name = %task.name, "task added");
        self.persist(&board).await?;
        Ok(true)
    }

    pub async fn change_count(&self, id: &str, delta: i64) -> Result<(), AppError> {
        let mut board = self.current_board().await?;
        if board.change_count(id, delta) {
            self.persist(&board).await?;
        }
        Ok(())
    }

    pub async fn clear_all(&self, confirmed: bool) -> Result<(), AppError> {
        let mut board = self.current_board().await?;
        if board.clear_all(|| confirmed) {
            info!("all tasks cleared");
            self.persist(&board).await?;
        }
        Ok(())
    }

    pub async fn reset_counts(&self) -> Result<(), AppError> {
        let today = schedule::today();
        let mut board = self.board.lock().await;
        if !board.roll_over(today) {
            debug!(day = %day_key(today), "reset fired before the day changed, skipping");
            return Ok(());
        }
        info!(tasks = board.tasks().len(), "counts reset for the new day");
        self.persist(&board).await
    }

    pub fn arm_midnight_reset(&self) -> MidnightReset {
        self.arm_reset_after(until_next_midnight(&Local::now()))
    }

    pub fn arm_reset_after(&self, delay: Duration) -> MidnightReset {
        let state = self.clone();
        MidnightReset::arm(delay, async move {
            if let Err(err) = state.reset_counts().await {
                error!("midnight reset failed to persist: {err}");
            }
        })
    }

    async fn current_board(&self) -> Result<MutexGuard<'_, Board>, AppError> {
        let today = schedule::today();
        let mut board = self.board.lock().await;
        if board.roll_over(today) {
            info!(day = %day_key(today), "day changed, counts reset");
            self.persist(&board).await?;
        }
        Ok(board)
    }

    async fn persist(&self, board: &Board) -> Result<(), AppError> {
        self.store.save_at(board.day(), board.tasks()).await
    }
}
