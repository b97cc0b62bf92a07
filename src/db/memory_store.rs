// src/db/memory_store.rs

// Implementação em memória do SeedStore, usada pelos testes unitários.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use crate::{
    common::error::AppError,
    db::store::SeedStore,
    models::{
        auth::{User, UserRole},
        inventory::{
            Category, NewCategory, NewProduct, NewStockMovement, NewUnit, Product, StockMovement, Unit,
        },
        tenancy::Tenant,
    },
};

#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub tenants: Vec<Tenant>,
    pub users: Vec<User>,
    pub sales: Vec<Uuid>, // tenant_id de cada venda
    pub categories: Vec<Category>,
    pub units: Vec<Unit>,
    pub products: Vec<Product>,
    pub movements: Vec<StockMovement>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub data: Tables,
    // Cópia do estado antes da primeira escrita não confirmada
    checkpoint: Option<Tables>,
    pub writes: usize,
    pub commits: usize,
    pub rollbacks: usize,
    pub fail_on_sku: Option<&'static str>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tenant(&mut self, name: &str, subdomain: &str) -> Tenant {
        let tenant = Tenant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            subdomain: subdomain.to_string(),
            is_active: true,
            created_at: Utc::now(),
        };
        self.data.tenants.push(tenant.clone());
        tenant
    }

    pub fn add_user(&mut self, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@demo.local", username),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::Admin,
            is_active: true,
            created_at: Utc::now(),
        };
        self.data.users.push(user.clone());
        user
    }

    pub fn add_sale(&mut self, tenant_id: Uuid) {
        self.data.sales.push(tenant_id);
    }

    pub fn add_category(&mut self, name: &str) -> Category {
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon: None,
            color: None,
            display_order: 99,
            is_active: true,
            created_at: Utc::now(),
        };
        self.data.categories.push(category.clone());
        category
    }

    pub fn add_product(&mut self, tenant_id: Uuid, sku: &str) -> Product {
        let category_id = match self.data.categories.first() {
            Some(category) => category.id,
            None => self.add_category("Misc").id,
        };
        let product = Product {
            id: Uuid::new_v4(),
            tenant_id,
            category_id,
            name: format!("Product {}", sku),
            sku: sku.to_string(),
            description: None,
            base_cost: Default::default(),
            selling_price: Default::default(),
            quantity: 1,
            unit: "pc".to_string(),
            reorder_level: 0,
            is_available: true,
            is_service: false,
            created_at: Utc::now(),
        };
        self.data.products.push(product.clone());
        product
    }

    fn before_write(&mut self) {
        if self.checkpoint.is_none() {
            self.checkpoint = Some(self.data.clone());
        }
        self.writes += 1;
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn count_tenants(&mut self) -> Result<i64, AppError> {
        Ok(self.data.tenants.len() as i64)
    }

    async fn count_sales(&mut self) -> Result<i64, AppError> {
        Ok(self.data.sales.len() as i64)
    }

    async fn count_products(&mut self) -> Result<i64, AppError> {
        Ok(self.data.products.len() as i64)
    }

    async fn count_tenant_products(&mut self, tenant_id: Uuid) -> Result<i64, AppError> {
        Ok(self.data.products.iter().filter(|p| p.tenant_id == tenant_id).count() as i64)
    }

    async fn find_tenant_by_subdomain(&mut self, subdomain: &str) -> Result<Option<Tenant>, AppError> {
        Ok(self.data.tenants.iter().find(|t| t.subdomain == subdomain).cloned())
    }

    async fn find_user_by_username(&mut self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.data.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>, AppError> {
        Ok(self.data.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn find_unit_by_name(&mut self, name: &str) -> Result<Option<Unit>, AppError> {
        Ok(self.data.units.iter().find(|u| u.name == name).cloned())
    }

    async fn find_product_by_sku(&mut self, tenant_id: Uuid, sku: &str) -> Result<Option<Product>, AppError> {
        Ok(self
            .data
            .products
            .iter()
            .find(|p| p.tenant_id == tenant_id && p.sku == sku)
            .cloned())
    }

    async fn insert_category(&mut self, new: &NewCategory<'_>) -> Result<Category, AppError> {
        self.before_write();
        let category = Category {
            id: Uuid::new_v4(),
            name: new.name.to_string(),
            icon: new.icon.map(str::to_string),
            color: new.color.map(str::to_string),
            display_order: new.display_order,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.data.categories.push(category.clone());
        Ok(category)
    }

    async fn insert_unit(&mut self, new: &NewUnit<'_>) -> Result<Unit, AppError> {
        self.before_write();
        let unit = Unit {
            id: Uuid::new_v4(),
            name: new.name.to_string(),
            display_order: new.display_order,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.data.units.push(unit.clone());
        Ok(unit)
    }

    async fn insert_product(&mut self, new: &NewProduct<'_>) -> Result<Product, AppError> {
        self.before_write();
        if self.fail_on_sku == Some(new.sku) {
            return Err(AppError::DatabaseError(sqlx::Error::Protocol(format!(
                "falha simulada no sku {}",
                new.sku
            ))));
        }
        let product = Product {
            id: Uuid::new_v4(),
            tenant_id: new.tenant_id,
            category_id: new.category_id,
            name: new.name.to_string(),
            sku: new.sku.to_string(),
            description: new.description.map(str::to_string),
            base_cost: new.base_cost,
            selling_price: new.selling_price,
            quantity: new.quantity,
            unit: new.unit.to_string(),
            reorder_level: new.reorder_level,
            is_available: new.is_available,
            is_service: new.is_service,
            created_at: Utc::now(),
        };
        self.data.products.push(product.clone());
        Ok(product)
    }

    async fn insert_stock_movement(&mut self, new: &NewStockMovement<'_>) -> Result<StockMovement, AppError> {
        self.before_write();
        let movement = StockMovement {
            id: Uuid::new_v4(),
            product_id: new.product_id,
            user_id: new.user_id,
            movement_type: new.movement_type,
            quantity: new.quantity,
            previous_stock: new.previous_stock,
            new_stock: new.new_stock,
            notes: new.notes.map(str::to_string),
            created_at: Utc::now(),
        };
        self.data.movements.push(movement.clone());
        Ok(movement)
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        self.checkpoint = None;
        self.commits += 1;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), AppError> {
        if let Some(previous) = self.checkpoint.take() {
            self.data = previous;
        }
        self.rollbacks += 1;
        Ok(())
    }
}
