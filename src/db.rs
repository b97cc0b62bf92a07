pub mod user_repo;
pub use user_repo::UserRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod tenancy_repo;
pub use tenancy_repo::TenantRepository;
pub mod sales_repo;
pub use sales_repo::SalesRepository;
pub mod store;
pub use store::SeedStore;
pub mod session;
pub use session::SqliteSession;
#[cfg(test)]
pub(crate) mod memory_store;

use sqlx::SqlitePool;
use crate::common::error::AppError;

/// Aplica as migrações embutidas em `migrations/`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
