use crate::errors::AppError;
use crate::models::{AddTaskRequest, BoardResponse, ChangeCountRequest, ClearRequest, IndexQuery};
use crate::schedule::until_next_midnight;
use crate::state::AppState;
use crate::storage::TaskStore;
use crate::ui::{Overlay, render_index};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use chrono::Local;

pub async fn index<S: TaskStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let board = state.snapshot().await?;
    let overlay = Overlay::from_query(query.overlay.as_deref(), board.tasks.is_empty());
    let reload_in = until_next_midnight(&Local::now());
    Ok(Html(render_index(&board, overlay, reload_in)))
}

pub async fn add_task_form<S: TaskStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<AddTaskRequest>,
) -> Result<Redirect, AppError> {
    if state.add_task(&form.name, form.description.as_deref()).await? {
        Ok(Redirect::to("/"))
    } else {
        Ok(Redirect::to("/?overlay=add"))
    }
}

pub async fn change_count_form<S: TaskStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Form(form): Form<ChangeCountRequest>,
) -> Result<Redirect, AppError> {
    state.change_count(&id, form.delta).await?;
    Ok(Redirect::to("/"))
}

pub async fn clear_form<S: TaskStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<ClearRequest>,
) -> Result<Redirect, AppError> {
    state.clear_all(form.confirmed).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_tasks<S: TaskStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<BoardResponse>, AppError> {
    Ok(Json(state.snapshot().await?))
}

pub async fn add_task<S: TaskStore>(
    State(state): State<AppState<S>>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    state
        .add_task(&payload.name, payload.description.as_deref())
        .await?;
    Ok(Json(state.snapshot().await?))
}

pub async fn change_count<S: TaskStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<ChangeCountRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    state.change_count(&id, payload.delta).await?;
    Ok(Json(state.snapshot().await?))
}

pub async fn clear<S: TaskStore>(
    State(state): State<AppState<S>>,
    Json(payload): Json<ClearRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    state.clear_all(payload.confirmed).await?;
    Ok(Json(state.snapshot().await?))
}
