// src/db/session.rs

use async_trait::async_trait;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use uuid::Uuid;
use crate::{
    common::error::AppError,
    db::{store::SeedStore, InventoryRepository, SalesRepository, TenantRepository, UserRepository},
    models::{
        auth::User,
        inventory::{
            Category, NewCategory, NewProduct, NewStockMovement, NewUnit, Product, StockMovement, Unit,
        },
        tenancy::Tenant,
    },
};

/// Sessão de seed sobre uma pool SQLite.
///
/// A transação é aberta na primeira operação e termina no `commit`/`rollback`;
/// a operação seguinte abre uma nova.
pub struct SqliteSession {
    pool: SqlitePool,
    tx: Option<Transaction<'static, Sqlite>>,
    tenant_repo: TenantRepository,
    user_repo: UserRepository,
    inventory_repo: InventoryRepository,
    sales_repo: SalesRepository,
}

impl SqliteSession {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            tx: None,
            tenant_repo: TenantRepository::new(),
            user_repo: UserRepository::new(),
            inventory_repo: InventoryRepository::new(),
            sales_repo: SalesRepository::new(),
        }
    }

    /// Desfaz qualquer transação ainda aberta e devolve a conexão à pool.
    pub async fn close(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        Ok(())
    }

    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }
}

// Recebe os campos separados para não emprestar `self` inteiro junto com os repositórios.
async fn transaction<'a>(
    pool: &SqlitePool,
    tx: &'a mut Option<Transaction<'static, Sqlite>>,
) -> Result<&'a mut SqliteConnection, AppError> {
    let current = match tx.take() {
        Some(current) => current,
        None => pool.begin().await?,
    };
    Ok(&mut **tx.insert(current))
}

#[async_trait]
impl SeedStore for SqliteSession {
    async fn count_tenants(&mut self) -> Result<i64, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.tenant_repo.count_all(conn).await
    }

    async fn count_sales(&mut self) -> Result<i64, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.sales_repo.count_all(conn).await
    }

    async fn count_products(&mut self) -> Result<i64, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.count_products(conn).await
    }

    async fn count_tenant_products(&mut self, tenant_id: Uuid) -> Result<i64, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.count_products_for_tenant(conn, tenant_id).await
    }

    async fn find_tenant_by_subdomain(&mut self, subdomain: &str) -> Result<Option<Tenant>, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.tenant_repo.find_by_subdomain(conn, subdomain).await
    }

    async fn find_user_by_username(&mut self, username: &str) -> Result<Option<User>, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.user_repo.find_by_username(conn, username).await
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.find_category_by_name(conn, name).await
    }

    async fn find_unit_by_name(&mut self, name: &str) -> Result<Option<Unit>, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.find_unit_by_name(conn, name).await
    }

    async fn find_product_by_sku(&mut self, tenant_id: Uuid, sku: &str) -> Result<Option<Product>, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.find_product_by_sku(conn, tenant_id, sku).await
    }

    async fn insert_category(&mut self, new: &NewCategory<'_>) -> Result<Category, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.create_category(conn, new).await
    }

    async fn insert_unit(&mut self, new: &NewUnit<'_>) -> Result<Unit, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.create_unit(conn, new).await
    }

    async fn insert_product(&mut self, new: &NewProduct<'_>) -> Result<Product, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.create_product(conn, new).await
    }

    async fn insert_stock_movement(&mut self, new: &NewStockMovement<'_>) -> Result<StockMovement, AppError> {
        let conn = transaction(&self.pool, &mut self.tx).await?;
        self.inventory_repo.record_stock_movement(conn, new).await
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        Ok(())
    }
}
