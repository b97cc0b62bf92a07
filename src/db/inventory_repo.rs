// src/db/inventory_repo.rs

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{Executor, Sqlite};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::inventory::{
        Category, NewCategory, NewProduct, NewStockMovement, NewUnit, Product, StockMovement, Unit,
    },
};

// Todas as funções recebem um 'Executor' genérico: podem rodar na pool
// ou dentro da transação do seed (`&mut *tx`).
#[derive(Clone, Default)]
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn new() -> Self {
        Self
    }

    // ---
    // Categorias (globais, únicas por nome)
    // ---

    pub async fn find_category_by_name<'e, E>(
        &self,
        executor: E,
        name: &str,
    ) -> Result<Option<Category>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE name = ?")
            .bind(name)
            .fetch_optional(executor)
            .await?;
        Ok(category)
    }

    pub async fn create_category<'e, E>(
        &self,
        executor: E,
        new: &NewCategory<'_>,
    ) -> Result<Category, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, icon, color, display_order, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(new.name)
            .bind(new.icon)
            .bind(new.color)
            .bind(new.display_order)
            .bind(new.is_active)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(category)
    }

    pub async fn count_categories<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    // ---
    // Unidades (globais, únicas por nome)
    // ---

    pub async fn find_unit_by_name<'e, E>(
        &self,
        executor: E,
        name: &str,
    ) -> Result<Option<Unit>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let unit = sqlx::query_as::<_, Unit>("SELECT * FROM units WHERE name = ?")
            .bind(name)
            .fetch_optional(executor)
            .await?;
        Ok(unit)
    }

    pub async fn create_unit<'e, E>(
        &self,
        executor: E,
        new: &NewUnit<'_>,
    ) -> Result<Unit, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let unit = sqlx::query_as::<_, Unit>(
            r#"
            INSERT INTO units (id, name, display_order, is_active, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(new.name)
            .bind(new.display_order)
            .bind(new.is_active)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(unit)
    }

    pub async fn count_units<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM units")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    // ---
    // Produtos (escopo: tenant)
    // ---

    pub async fn count_products<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn count_products_for_tenant<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
    ) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE tenant_id = ?",
        )
            .bind(tenant_id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn find_product_by_sku<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        sku: &str,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE tenant_id = ? AND sku = ?",
        )
            .bind(tenant_id)
            .bind(sku)
            .fetch_optional(executor)
            .await?;
        Ok(product)
    }

    pub async fn get_products_for_tenant<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
    ) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE tenant_id = ? ORDER BY sku ASC",
        )
            .bind(tenant_id)
            .fetch_all(executor)
            .await?;
        Ok(products)
    }

    pub async fn create_product<'e, E>(
        &self,
        executor: E,
        new: &NewProduct<'_>,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        // SQLite não tem DECIMAL: os valores vão como REAL
        let base_cost = decimal_to_f64(new.base_cost, "base_cost")?;
        let selling_price = decimal_to_f64(new.selling_price, "selling_price")?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (
                id, tenant_id, category_id, name, sku, description,
                base_cost, selling_price, quantity, unit, reorder_level,
                is_available, is_service, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(new.tenant_id)
            .bind(new.category_id)
            .bind(new.name)
            .bind(new.sku)
            .bind(new.description)
            .bind(base_cost)
            .bind(selling_price)
            .bind(new.quantity)
            .bind(new.unit)
            .bind(new.reorder_level)
            .bind(new.is_available)
            .bind(new.is_service)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(product)
    }

    // ---
    // Movimentações (livro-razão de auditoria, só INSERT)
    // ---

    pub async fn record_stock_movement<'e, E>(
        &self,
        executor: E,
        new: &NewStockMovement<'_>,
    ) -> Result<StockMovement, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let movement = sqlx::query_as::<_, StockMovement>(
            r#"
            INSERT INTO stock_movements (
                id, product_id, user_id, movement_type, quantity,
                previous_stock, new_stock, notes, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(new.product_id)
            .bind(new.user_id)
            .bind(new.movement_type)
            .bind(new.quantity)
            .bind(new.previous_stock)
            .bind(new.new_stock)
            .bind(new.notes)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(movement)
    }

    pub async fn get_movements_for_product<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
    ) -> Result<Vec<StockMovement>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let movements = sqlx::query_as::<_, StockMovement>(
            "SELECT * FROM stock_movements WHERE product_id = ? ORDER BY created_at ASC",
        )
            .bind(product_id)
            .fetch_all(executor)
            .await?;
        Ok(movements)
    }
}

fn decimal_to_f64(value: rust_decimal::Decimal, field: &str) -> Result<f64, AppError> {
    value
        .to_f64()
        .ok_or_else(|| AppError::InternalError(format!("{} fora do intervalo: {}", field, value)))
}
