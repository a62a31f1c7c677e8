use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{Category, CreateCategory},
    AppState,
};

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Category>>)> {
    let start = Instant::now();
    let categories = db::fetch_all_categories(&state.db).await?;

    info!(
        count = categories.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed categories"
    );

    Ok((StatusCode::OK, Json(categories)))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let category = db::insert_category(&state.db, &payload).await?;

    info!(id = %category.id, name = %category.name, "Created category");

    Ok((StatusCode::CREATED, Json(category)))
}
