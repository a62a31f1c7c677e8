use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateInventoryItem, InventoryFilters, InventoryItemRecord},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_inventory(
    State(state): State<AppState>,
    Query(filters): Query<InventoryFilters>,
) -> AppResult<(StatusCode, Json<Vec<InventoryItemRecord>>)> {
    let start = Instant::now();
    let items = db::fetch_all_items(&state.db, &filters).await?;
    let elapsed = start.elapsed();

    info!(
        count = items.len(),
        is_active = ?filters.is_active,
        elapsed_ms = elapsed.as_millis(),
        "Listed inventory items"
    );

    Ok((StatusCode::OK, Json(items)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_inventory_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<InventoryItemRecord>)> {
    let item = payload.into_validated().map_err(AppError::Validation)?;

    let start = Instant::now();
    let record = db::insert_item(&state.db, &item).await?;
    let elapsed = start.elapsed();

    info!(
        id = %record.id,
        name = %record.name,
        category = %record.category.name,
        elapsed_ms = elapsed.as_millis(),
        "Created inventory item"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
