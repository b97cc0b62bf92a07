// src/db/store.rs

use async_trait::async_trait;
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::{
        auth::User,
        inventory::{
            Category, NewCategory, NewProduct, NewStockMovement, NewUnit, Product, StockMovement, Unit,
        },
        tenancy::Tenant,
    },
};

/// Porta de acesso ao armazenamento usada pelo seed.
///
/// Todas as operações rodam dentro da mesma unidade de trabalho até o
/// `commit` (ou `rollback`). Os inserts devolvem a linha já persistida,
/// então não existe um passo de "flush" separado.
#[async_trait]
pub trait SeedStore: Send {
    // --- Contagens ---
    async fn count_tenants(&mut self) -> Result<i64, AppError>;
    async fn count_sales(&mut self) -> Result<i64, AppError>;
    async fn count_products(&mut self) -> Result<i64, AppError>;
    async fn count_tenant_products(&mut self, tenant_id: Uuid) -> Result<i64, AppError>;

    // --- Buscas ---
    async fn find_tenant_by_subdomain(&mut self, subdomain: &str) -> Result<Option<Tenant>, AppError>;
    async fn find_user_by_username(&mut self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>, AppError>;
    async fn find_unit_by_name(&mut self, name: &str) -> Result<Option<Unit>, AppError>;
    async fn find_product_by_sku(&mut self, tenant_id: Uuid, sku: &str) -> Result<Option<Product>, AppError>;

    // --- Escritas ---
    async fn insert_category(&mut self, new: &NewCategory<'_>) -> Result<Category, AppError>;
    async fn insert_unit(&mut self, new: &NewUnit<'_>) -> Result<Unit, AppError>;
    async fn insert_product(&mut self, new: &NewProduct<'_>) -> Result<Product, AppError>;
    async fn insert_stock_movement(&mut self, new: &NewStockMovement<'_>) -> Result<StockMovement, AppError>;

    // --- Transação ---
    async fn commit(&mut self) -> Result<(), AppError>;
    async fn rollback(&mut self) -> Result<(), AppError>;
}
