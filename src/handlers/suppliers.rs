use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateSupplier, Supplier},
    AppState,
};

pub async fn list_suppliers(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Supplier>>)> {
    let start = Instant::now();
    let suppliers = db::fetch_all_suppliers(&state.db).await?;

    info!(
        count = suppliers.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed suppliers"
    );

    Ok((StatusCode::OK, Json(suppliers)))
}

pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplier>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let supplier = db::insert_supplier(&state.db, &payload).await?;

    info!(id = %supplier.id, name = %supplier.name, "Created supplier");

    Ok((StatusCode::CREATED, Json(supplier)))
}
