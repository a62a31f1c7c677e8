use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{coerce, Category, Supplier};

/// Unit assigned when the payload omits (or blanks) `unit`.
pub const DEFAULT_UNIT: &str = "pieces";
/// Low-stock threshold assigned when `minimumStock` is absent or non-numeric.
pub const DEFAULT_MINIMUM_STOCK: i32 = 30;

/// An inventory item with its category and supplier resolved, as served to
/// clients. `cost_per_unit` is a [`Decimal`], which serializes as a string
/// (e.g. `"12.50"`) so no precision is lost across the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub current_stock: i32,
    pub cost_per_unit: Decimal,
    pub unit: String,
    pub minimum_stock: i32,
    pub supplier_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Category,
    pub supplier: Option<Supplier>,
}

/// Flat row produced by the item queries, which join categories and
/// (optionally) suppliers with aliased columns. Nested into an
/// [`InventoryItemRecord`] via `From`.
#[derive(Debug, sqlx::FromRow)]
pub struct InventoryItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub current_stock: i32,
    pub cost_per_unit: Decimal,
    pub unit: String,
    pub minimum_stock: i32,
    pub supplier_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: String,
    pub category_description: Option<String>,
    pub category_created_at: DateTime<Utc>,
    pub category_updated_at: DateTime<Utc>,
    pub supplier_name: Option<String>,
    pub supplier_contact_email: Option<String>,
    pub supplier_phone: Option<String>,
    pub supplier_created_at: Option<DateTime<Utc>>,
    pub supplier_updated_at: Option<DateTime<Utc>>,
}

impl From<InventoryItemRow> for InventoryItemRecord {
    fn from(row: InventoryItemRow) -> Self {
        let supplier = match (row.supplier_id, row.supplier_name) {
            (Some(id), Some(name)) => Some(Supplier {
                id,
                name,
                contact_email: row.supplier_contact_email,
                phone: row.supplier_phone,
                created_at: row.supplier_created_at.unwrap_or(row.created_at),
                updated_at: row.supplier_updated_at.unwrap_or(row.updated_at),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category_id: row.category_id,
            current_stock: row.current_stock,
            cost_per_unit: row.cost_per_unit,
            unit: row.unit,
            minimum_stock: row.minimum_stock,
            supplier_id: row.supplier_id,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category: Category {
                id: row.category_id,
                name: row.category_name,
                description: row.category_description,
                created_at: row.category_created_at,
                updated_at: row.category_updated_at,
            },
            supplier,
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Raw creation payload. The numeric fields stay as `Value` so that a present
/// `0` is distinguishable from an absent field (missingness is checked by
/// presence, not truthiness) and so that form-submitted numeric strings still
/// coerce.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub current_stock: Option<Value>,
    pub cost_per_unit: Option<Value>,
    pub unit: Option<String>,
    pub minimum_stock: Option<Value>,
    pub supplier_id: Option<Uuid>,
}

/// A validated, coerced, defaults-applied item ready for insertion.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub current_stock: i32,
    pub cost_per_unit: Decimal,
    pub unit: String,
    pub minimum_stock: i32,
    pub supplier_id: Option<Uuid>,
}

impl CreateInventoryItem {
    /// Check required fields, coerce numerics, and apply defaults.
    /// Errors carry the short message sent back in the 400 body.
    pub fn into_validated(self) -> Result<NewInventoryItem, String> {
        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err("name is required".to_string()),
        };

        let category_id = self
            .category_id
            .ok_or_else(|| "categoryId is required".to_string())?;

        let current_stock = match &self.current_stock {
            None => return Err("currentStock is required".to_string()),
            Some(v) => {
                coerce::as_int(v).ok_or_else(|| "currentStock must be an integer".to_string())?
            }
        };

        let cost_per_unit = match &self.cost_per_unit {
            None => return Err("costPerUnit is required".to_string()),
            Some(v) => coerce::as_decimal(v)
                .ok_or_else(|| "costPerUnit must be a decimal number".to_string())?,
        };

        // Non-numeric minimumStock falls back to the default rather than
        // failing, matching the dashboard's submit behavior.
        let minimum_stock = self
            .minimum_stock
            .as_ref()
            .and_then(coerce::as_int)
            .unwrap_or(DEFAULT_MINIMUM_STOCK);

        let unit = match self.unit.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => DEFAULT_UNIT.to_string(),
        };

        let description = self.description.filter(|d| !d.trim().is_empty());

        Ok(NewInventoryItem {
            name,
            description,
            category_id,
            current_stock,
            cost_per_unit,
            unit,
            minimum_stock,
            supplier_id: self.supplier_id,
        })
    }
}

// ── Query parameters ─────────────────────────────────────────────────────────

/// `GET /inventory` filter. When `isActive` is not provided at all, no
/// filter applies and both active and inactive items are returned.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilters {
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> CreateInventoryItem {
        serde_json::from_value(value).unwrap()
    }

    fn base() -> Value {
        json!({
            "name": "Flour",
            "categoryId": "00000000-0000-0000-0000-000000000001",
            "currentStock": 10,
            "costPerUnit": "3.75"
        })
    }

    // ── Required-field presence ───────────────────────────────────────────────

    #[test]
    fn valid_payload_passes() {
        let item = payload(base()).into_validated().unwrap();
        assert_eq!(item.name, "Flour");
        assert_eq!(item.current_stock, 10);
        assert_eq!(item.cost_per_unit.to_string(), "3.75");
    }

    #[test]
    fn zero_stock_and_zero_cost_are_present_not_missing() {
        let mut v = base();
        v["currentStock"] = json!(0);
        v["costPerUnit"] = json!(0);
        let item = payload(v).into_validated().unwrap();
        assert_eq!(item.current_stock, 0);
        assert_eq!(item.cost_per_unit, Decimal::ZERO);
    }

    #[test]
    fn each_missing_required_field_is_rejected() {
        for field in ["name", "categoryId", "currentStock", "costPerUnit"] {
            let mut v = base();
            v.as_object_mut().unwrap().remove(field);
            let err = payload(v).into_validated().unwrap_err();
            assert!(err.contains(field), "error {:?} should name {}", err, field);
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut v = base();
        v["name"] = json!("   ");
        assert!(payload(v).into_validated().is_err());
    }

    // ── Coercion ──────────────────────────────────────────────────────────────

    #[test]
    fn stock_coerces_from_numeric_string() {
        let mut v = base();
        v["currentStock"] = json!("42");
        assert_eq!(payload(v).into_validated().unwrap().current_stock, 42);
    }

    #[test]
    fn non_numeric_stock_is_rejected() {
        let mut v = base();
        v["currentStock"] = json!("plenty");
        let err = payload(v).into_validated().unwrap_err();
        assert!(err.contains("currentStock"));
    }

    #[test]
    fn cost_keeps_exact_scale_from_json_number() {
        // Raw text so the number literal reaches the parser untouched
        let v: Value = serde_json::from_str(
            r#"{
                "name": "Sugar",
                "categoryId": "00000000-0000-0000-0000-000000000001",
                "currentStock": 5,
                "costPerUnit": 12.50
            }"#,
        )
        .unwrap();
        let item = payload(v).into_validated().unwrap();
        assert_eq!(item.cost_per_unit.to_string(), "12.50");
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn unit_defaults_to_pieces() {
        assert_eq!(payload(base()).into_validated().unwrap().unit, "pieces");

        let mut v = base();
        v["unit"] = json!("");
        assert_eq!(payload(v).into_validated().unwrap().unit, "pieces");
    }

    #[test]
    fn minimum_stock_defaults_when_absent_or_non_numeric() {
        assert_eq!(payload(base()).into_validated().unwrap().minimum_stock, 30);

        let mut v = base();
        v["minimumStock"] = json!("lots");
        assert_eq!(payload(v).into_validated().unwrap().minimum_stock, 30);

        let mut v = base();
        v["minimumStock"] = json!("50");
        assert_eq!(payload(v).into_validated().unwrap().minimum_stock, 50);
    }

    #[test]
    fn empty_description_becomes_absent() {
        let mut v = base();
        v["description"] = json!("");
        assert_eq!(payload(v).into_validated().unwrap().description, None);
    }

    // ── Serialization ─────────────────────────────────────────────────────────

    fn record() -> InventoryItemRecord {
        let now = Utc::now();
        InventoryItemRecord {
            id: Uuid::new_v4(),
            name: "Flour".to_string(),
            description: None,
            category_id: Uuid::new_v4(),
            current_stock: 10,
            cost_per_unit: "12.50".parse().unwrap(),
            unit: "pieces".to_string(),
            minimum_stock: 30,
            supplier_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
            category: Category {
                id: Uuid::new_v4(),
                name: "Baking".to_string(),
                description: None,
                created_at: now,
                updated_at: now,
            },
            supplier: None,
        }
    }

    #[test]
    fn record_serializes_camel_case_with_relations() {
        let v = serde_json::to_value(record()).unwrap();
        assert!(v.get("currentStock").is_some());
        assert!(v.get("minimumStock").is_some());
        assert_eq!(v["category"]["name"], "Baking");
        assert!(v["supplier"].is_null());
    }

    #[test]
    fn cost_serializes_as_exact_string() {
        let v = serde_json::to_value(record()).unwrap();
        assert_eq!(v["costPerUnit"], json!("12.50"));
    }

    // ── Filters ───────────────────────────────────────────────────────────────

    #[test]
    fn absent_is_active_means_no_filter() {
        let f: InventoryFilters = serde_json::from_str("{}").unwrap();
        assert_eq!(f.is_active, None);
    }

    #[test]
    fn is_active_filter_parses_both_values() {
        let f: InventoryFilters = serde_json::from_value(json!({"isActive": true})).unwrap();
        assert_eq!(f.is_active, Some(true));
        let f: InventoryFilters = serde_json::from_value(json!({"isActive": false})).unwrap();
        assert_eq!(f.is_active, Some(false));
    }
}
