use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::*;

/// Shared SELECT for item reads: category is always present (FK NOT NULL),
/// supplier may be missing, hence the LEFT JOIN and nullable aliases.
const ITEM_SELECT: &str = r#"
    SELECT i.id, i.name, i.description, i.category_id, i.current_stock,
           i.cost_per_unit, i.unit, i.minimum_stock, i.supplier_id, i.is_active,
           i.created_at, i.updated_at,
           c.name        AS category_name,
           c.description AS category_description,
           c.created_at  AS category_created_at,
           c.updated_at  AS category_updated_at,
           s.name          AS supplier_name,
           s.contact_email AS supplier_contact_email,
           s.phone         AS supplier_phone,
           s.created_at    AS supplier_created_at,
           s.updated_at    AS supplier_updated_at
    FROM inventory_items i
    JOIN categories c ON c.id = i.category_id
    LEFT JOIN suppliers s ON s.id = i.supplier_id
"#;

// ── Inventory items ──────────────────────────────────────────────────────────

pub async fn fetch_all_items(
    pool: &PgPool,
    filters: &InventoryFilters,
) -> AppResult<Vec<InventoryItemRecord>> {
    // NULL filter means "no filter": both active and inactive come back
    let query = format!(
        "{ITEM_SELECT} WHERE ($1::boolean IS NULL OR i.is_active = $1)
         ORDER BY i.created_at DESC"
    );

    let rows = sqlx::query_as::<_, InventoryItemRow>(&query)
        .bind(filters.is_active)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(InventoryItemRecord::from).collect())
}

async fn fetch_item_record(pool: &PgPool, id: Uuid) -> AppResult<InventoryItemRecord> {
    let query = format!("{ITEM_SELECT} WHERE i.id = $1");

    let row = sqlx::query_as::<_, InventoryItemRow>(&query)
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(row.into())
}

pub async fn insert_item(pool: &PgPool, item: &NewInventoryItem) -> AppResult<InventoryItemRecord> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO inventory_items
            (name, description, category_id, current_stock, cost_per_unit,
             unit, minimum_stock, supplier_id, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
        RETURNING id
        "#,
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(item.category_id)
    .bind(item.current_stock)
    .bind(item.cost_per_unit)
    .bind(&item.unit)
    .bind(item.minimum_stock)
    .bind(item.supplier_id)
    .fetch_one(pool)
    .await?;

    // Re-read through the join so the response carries resolved relations
    fetch_item_record(pool, id).await
}

// ── Categories ───────────────────────────────────────────────────────────────

pub async fn fetch_all_categories(pool: &PgPool) -> AppResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, description, created_at, updated_at
         FROM categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn insert_category(pool: &PgPool, payload: &CreateCategory) -> AppResult<Category> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name, description)
        VALUES ($1, $2)
        RETURNING id, name, description, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

// ── Suppliers ────────────────────────────────────────────────────────────────

pub async fn fetch_all_suppliers(pool: &PgPool) -> AppResult<Vec<Supplier>> {
    let suppliers = sqlx::query_as::<_, Supplier>(
        "SELECT id, name, contact_email, phone, created_at, updated_at
         FROM suppliers ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(suppliers)
}

pub async fn insert_supplier(pool: &PgPool, payload: &CreateSupplier) -> AppResult<Supplier> {
    let supplier = sqlx::query_as::<_, Supplier>(
        r#"
        INSERT INTO suppliers (name, contact_email, phone)
        VALUES ($1, $2, $3)
        RETURNING id, name, contact_email, phone, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.contact_email)
    .bind(&payload.phone)
    .fetch_one(pool)
    .await?;

    Ok(supplier)
}
