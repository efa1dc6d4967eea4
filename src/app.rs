use crate::handlers;
use crate::state::AppState;
use crate::storage::TaskStore;
use axum::{routing::{get, post}, Router};

pub fn router<S: TaskStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(handlers::index::<S>))
        .route("/tasks", post(handlers::add_task_form::<S>))
        .route("/tasks/clear", post(handlers::clear_form::<S>))
        .route("/tasks/:id/count", post(handlers::change_count_form::<S>))
        .route("/api/tasks", get(handlers::get_tasks::<S>).post(handlers::add_task::<S>))
        .route("/api/tasks/clear", post(handlers::clear::<S>))
        .route("/api/tasks/:id/count", post(handlers::change_count::<S>))
        .with_state(state)
}
