//src/main.rs

use anyhow::Context;
use sqlx::SqlitePool;
use tracing_subscriber::EnvFilter;

use demo_seeder::{
    common::error::AppError,
    config::{AppState, Config},
    db::{self, InventoryRepository, SqliteSession, TenantRepository},
    services::{seed_demo_data_on_startup, BootstrapService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carrega o .env antes do logger para que RUST_LOG possa vir de lá
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new(config)
        .await
        .context("Falha ao inicializar o estado da aplicação.")?;

    db::run_migrations(&app_state.db_pool)
        .await
        .context("Falha ao rodar as migrações do banco de dados.")?;

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // O tenant demo e o admin precisam existir antes do seed
    let bootstrap = BootstrapService::new(app_state.db_pool.clone())
        .ensure_demo_tenant_and_admin(&app_state.config.seed)
        .await
        .context("Falha ao preparar o tenant demo.")?;
    tracing::info!("🔧 Bootstrap: {}", serde_json::to_string(&bootstrap)?);

    let mut session = SqliteSession::new(app_state.db_pool.clone());
    let outcome = seed_demo_data_on_startup(&mut session, &app_state.config.seed)
        .await
        .context("Falha no seed de dados demo.")?;
    session.close().await?;

    tracing::info!("📦 Resultado do seed: {}", serde_json::to_string(&outcome)?);

    log_store_summary(&app_state.db_pool).await?;

    app_state.db_pool.close().await;
    Ok(())
}

async fn log_store_summary(pool: &SqlitePool) -> Result<(), AppError> {
    let inventory_repo = InventoryRepository::new();
    let tenant_repo = TenantRepository::new();

    let tenants = tenant_repo.count_all(pool).await?;
    let categories = inventory_repo.count_categories(pool).await?;
    let units = inventory_repo.count_units(pool).await?;
    let products = inventory_repo.count_products(pool).await?;

    tracing::info!(
        "📊 Tenants: {} | Categorias: {} | Unidades: {} | Produtos: {}",
        tenants, categories, units, products
    );
    Ok(())
}
