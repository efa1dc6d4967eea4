use crate::board::Board;
use crate::schedule::day_key;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub count: u64,
}

impl Task {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description,
            count: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StoredPayload {
    // missing in hand-edited files; treated as a stale day
    #[serde(default)]
    pub date: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeCountRequest {
    pub delta: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClearRequest {
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub overlay: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResponse {
    pub date: String,
    pub tasks: Vec<Task>,
    pub total_ticks: u64,
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            date: day_key(board.day()),
            tasks: board.tasks().to_vec(),
            total_ticks: board.total_ticks(),
        }
    }
}
