// src/models/inventory.rs

use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

// --- 1. Categorias ---
// Dados de referência globais (únicos por nome na loja inteira).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub icon: Option<&'a str>,
    pub color: Option<&'a str>,
    pub display_order: i64,
    pub is_active: bool,
}

// --- 2. Unidades de Medida ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Uuid,
    pub name: String,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUnit<'a> {
    pub name: &'a str,
    pub display_order: i64,
    pub is_active: bool,
}

// --- 3. Produtos ---
// Pertence a exatamente um tenant e uma categoria. Único por (tenant_id, sku).
// `is_service` separa mercadoria física de linhas do tipo "taxa".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    #[sqlx(try_from = "f64")]
    pub base_cost: Decimal,
    #[sqlx(try_from = "f64")]
    pub selling_price: Decimal,
    pub quantity: i64,
    pub unit: String,
    pub reorder_level: i64,
    pub is_available: bool,
    pub is_service: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct<'a> {
    pub tenant_id: Uuid,
    pub category_id: Uuid,
    pub name: &'a str,
    pub sku: &'a str,
    pub description: Option<&'a str>,
    pub base_cost: Decimal,
    pub selling_price: Decimal,
    pub quantity: i64,
    pub unit: &'a str,
    pub reorder_level: i64,
    pub is_available: bool,
    pub is_service: bool,
}

// --- 4. Movimentações de Estoque ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "UPPERCASE")] // Banco: "IN", "OUT", "ADJUSTMENT"
#[serde(rename_all = "UPPERCASE")]
pub enum StockMovementType {
    In,
    Out,
    Adjustment,
}

// --- STOCK MOVEMENT (Histórico) ---
// Registro de auditoria imutável.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub movement_type: StockMovementType,
    pub quantity: i64,
    pub previous_stock: i64,
    pub new_stock: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStockMovement<'a> {
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub movement_type: StockMovementType,
    pub quantity: i64,
    pub previous_stock: i64,
    pub new_stock: i64,
    pub notes: Option<&'a str>,
}
