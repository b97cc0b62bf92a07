// src/services/demo_seed_service.rs

//! Seed automático e idempotente dos dados demo.
//!
//! - Só roda se o banco estiver "vazio" (sem dados de clientes)
//! - Pode ser desligado via `SEED_DEMO_DATA`
//! - Seguro para rodar várias vezes (nunca sobrescreve nada)

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::SeedSettings,
    db::SeedStore,
    models::{
        auth::User,
        inventory::{NewCategory, NewProduct, NewStockMovement, NewUnit, StockMovementType},
        tenancy::Tenant,
    },
    services::demo_catalog::{
        ADMIN_USERNAME, DEMO_CATEGORIES, DEMO_PRODUCTS, DEMO_TENANT_SUBDOMAIN, DEMO_UNITS,
        INITIAL_STOCK_NOTE,
    },
};

/// O que o seed de um tenant fez.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// Tenant já tinha produtos: nada foi escrito.
    pub skipped: bool,
    pub existing_products: i64,
    pub categories_created: usize,
    pub categories_reused: usize,
    pub units_created: usize,
    pub units_skipped: usize,
    pub products_created: usize,
    pub products_skipped: usize,
    pub stock_movements_created: usize,
}

impl SeedReport {
    fn skipped(existing_products: i64) -> Self {
        Self { skipped: true, existing_products, ..Self::default() }
    }
}

/// Resultado da chamada de startup. Só `Seeded` escreve no banco.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    Disabled,
    StoreNotEmpty,
    MissingDemoTenant,
    MissingAdminUser,
    Seeded(SeedReport),
}

/// Verdadeiro só se for seguro semear: nenhum tenant, ou exatamente um
/// tenant sem vendas e sem produtos. Somente leitura.
pub async fn is_database_empty<S>(store: &mut S) -> Result<bool, AppError>
where
    S: SeedStore + ?Sized,
{
    let tenant_count = store.count_tenants().await?;

    // Mais de 1 tenant: já existem dados de clientes
    if tenant_count > 1 {
        return Ok(false);
    }

    // 1 tenant: só pode ser o demo criado na inicialização, e ainda sem movimento
    if tenant_count == 1 {
        let sales_count = store.count_sales().await?;
        if sales_count > 0 {
            return Ok(false);
        }

        let product_count = store.count_products().await?;
        if product_count > 0 {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Semeia categorias, unidades e produtos demo para um tenant e faz um único commit.
///
/// Se o tenant já tem qualquer produto, não faz nada. Categorias e unidades
/// são deduplicadas pelo nome na loja inteira; produtos por (tenant, sku).
pub async fn seed_demo_tenant_data<S>(
    store: &mut S,
    tenant: &Tenant,
    admin_user: &User,
) -> Result<SeedReport, AppError>
where
    S: SeedStore + ?Sized,
{
    tracing::info!("🌱 Semeando dados demo para o tenant: {}", tenant.name);

    let existing_products = store.count_tenant_products(tenant.id).await?;
    if existing_products > 0 {
        tracing::info!(
            "✓ Tenant já possui {} produtos - pulando o seed",
            existing_products
        );
        return Ok(SeedReport::skipped(existing_products));
    }

    let mut report = SeedReport::default();

    // 1. Categorias (reaproveita as que já existem)
    let mut categories: HashMap<&'static str, Uuid> = HashMap::new();
    for seed in DEMO_CATEGORIES {
        let category = match store.find_category_by_name(seed.name).await? {
            Some(existing) => {
                tracing::info!("  ✓ Categoria já existe: {}", seed.name);
                report.categories_reused += 1;
                existing
            }
            None => {
                let created = store
                    .insert_category(&NewCategory {
                        name: seed.name,
                        icon: Some(seed.icon),
                        color: Some(seed.color),
                        display_order: seed.display_order,
                        is_active: true,
                    })
                    .await?;
                tracing::info!("  ✓ Categoria criada: {}", seed.name);
                report.categories_created += 1;
                created
            }
        };
        categories.insert(seed.name, category.id);
    }

    // 2. Unidades
    for seed in DEMO_UNITS {
        if store.find_unit_by_name(seed.name).await?.is_some() {
            report.units_skipped += 1;
            continue;
        }
        store
            .insert_unit(&NewUnit {
                name: seed.name,
                display_order: seed.display_order,
                is_active: true,
            })
            .await?;
        tracing::info!("  ✓ Unidade criada: {}", seed.name);
        report.units_created += 1;
    }

    // 3. Produtos + movimentação inicial de estoque
    for seed in DEMO_PRODUCTS {
        if store.find_product_by_sku(tenant.id, seed.sku).await?.is_some() {
            report.products_skipped += 1;
            continue;
        }

        let category_id = *categories.get(seed.category).ok_or_else(|| {
            AppError::UnknownCategory(seed.category.to_string(), seed.sku.to_string())
        })?;

        let product = store
            .insert_product(&NewProduct {
                tenant_id: tenant.id,
                category_id,
                name: seed.name,
                sku: seed.sku,
                description: Some(seed.description),
                base_cost: Decimal::from(seed.base_cost),
                selling_price: Decimal::from(seed.selling_price),
                quantity: seed.quantity,
                unit: seed.unit,
                reorder_level: seed.reorder_level,
                is_available: true,
                is_service: false,
            })
            .await?;

        store
            .insert_stock_movement(&NewStockMovement {
                product_id: product.id,
                user_id: admin_user.id,
                movement_type: StockMovementType::In,
                quantity: product.quantity,
                previous_stock: 0,
                new_stock: product.quantity,
                notes: Some(INITIAL_STOCK_NOTE),
            })
            .await?;

        tracing::info!("  ✓ Produto criado: {}", product.name);
        report.products_created += 1;
        report.stock_movements_created += 1;
    }

    // 4. Um único commit no final
    store.commit().await?;
    tracing::info!("✅ Dados demo semeados com sucesso para {}", tenant.name);

    Ok(report)
}

/// Ponto de entrada chamado na inicialização da aplicação.
///
/// Situações "não aplicáveis" (seed desligado, banco com dados, tenant demo ou
/// admin ausentes) são registradas e devolvidas como `SeedOutcome`, nunca como erro.
/// Uma falha durante o seed desfaz a transação e o erro é devolvido ao chamador.
pub async fn seed_demo_data_on_startup<S>(
    store: &mut S,
    settings: &SeedSettings,
) -> Result<SeedOutcome, AppError>
where
    S: SeedStore + ?Sized,
{
    if !settings.enabled {
        tracing::info!("Seed de dados demo desativado via SEED_DEMO_DATA=false");
        return Ok(SeedOutcome::Disabled);
    }

    if !is_database_empty(store).await? {
        tracing::info!("Banco contém dados de clientes - pulando o seed de dados demo");
        return Ok(SeedOutcome::StoreNotEmpty);
    }

    tracing::info!("Banco vazio - semeando dados demo...");

    let Some(demo_tenant) = store.find_tenant_by_subdomain(DEMO_TENANT_SUBDOMAIN).await? else {
        tracing::warn!("Tenant demo não encontrado - ele deveria ter sido criado na inicialização");
        return Ok(SeedOutcome::MissingDemoTenant);
    };

    let Some(admin_user) = store.find_user_by_username(ADMIN_USERNAME).await? else {
        tracing::warn!("Usuário admin não encontrado - ele deveria ter sido criado na inicialização");
        return Ok(SeedOutcome::MissingAdminUser);
    };

    match seed_demo_tenant_data(store, &demo_tenant, &admin_user).await {
        Ok(report) => {
            tracing::info!("✅ Seed de dados demo concluído!");
            Ok(SeedOutcome::Seeded(report))
        }
        Err(e) => {
            tracing::error!("❌ Erro ao semear dados demo: {}", e);
            if let Err(rollback_err) = store.rollback().await {
                tracing::error!("🔥 Falha no rollback do seed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_store::MemoryStore;

    fn demo_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_tenant("Demo School", DEMO_TENANT_SUBDOMAIN);
        store.add_user(ADMIN_USERNAME);
        store
    }

    // --- Guard ---

    #[tokio::test]
    async fn empty_store_is_empty() {
        let mut store = MemoryStore::new();
        assert!(is_database_empty(&mut store).await.unwrap());
    }

    #[tokio::test]
    async fn single_tenant_without_activity_is_empty() {
        let mut store = demo_store();
        assert!(is_database_empty(&mut store).await.unwrap());
    }

    #[tokio::test]
    async fn single_tenant_with_a_sale_is_not_empty() {
        let mut store = demo_store();
        let tenant_id = store.data.tenants[0].id;
        store.add_sale(tenant_id);

        assert!(!is_database_empty(&mut store).await.unwrap());
    }

    #[tokio::test]
    async fn single_tenant_with_a_product_is_not_empty() {
        let mut store = demo_store();
        let tenant_id = store.data.tenants[0].id;
        store.add_product(tenant_id, "X-1");

        assert!(!is_database_empty(&mut store).await.unwrap());
    }

    #[tokio::test]
    async fn two_tenants_are_never_empty() {
        let mut store = demo_store();
        store.add_tenant("Green Hills Academy", "greenhills");

        assert!(!is_database_empty(&mut store).await.unwrap());
        assert_eq!(store.writes, 0);
    }

    // --- Seeder do tenant ---

    #[tokio::test]
    async fn seeds_full_catalog_with_one_commit() {
        let mut store = demo_store();
        let tenant = store.data.tenants[0].clone();
        let admin = store.data.users[0].clone();

        let report = seed_demo_tenant_data(&mut store, &tenant, &admin).await.unwrap();

        assert!(!report.skipped);
        assert_eq!(report.categories_created, 5);
        assert_eq!(report.units_created, 14);
        assert_eq!(report.products_created, 8);
        assert_eq!(report.stock_movements_created, 8);
        assert_eq!(store.data.categories.len(), 5);
        assert_eq!(store.data.units.len(), 14);
        assert_eq!(store.data.products.len(), 8);
        assert_eq!(store.commits, 1);
    }

    #[tokio::test]
    async fn every_product_gets_exactly_one_initial_movement() {
        let mut store = demo_store();
        let tenant = store.data.tenants[0].clone();
        let admin = store.data.users[0].clone();

        seed_demo_tenant_data(&mut store, &tenant, &admin).await.unwrap();

        for product in &store.data.products {
            let movements: Vec<_> = store
                .data
                .movements
                .iter()
                .filter(|m| m.product_id == product.id)
                .collect();
            assert_eq!(movements.len(), 1, "{}", product.sku);

            let movement = movements[0];
            assert_eq!(movement.movement_type, StockMovementType::In);
            assert_eq!(movement.previous_stock, 0);
            assert_eq!(movement.new_stock, product.quantity);
            assert_eq!(movement.quantity, product.quantity);
            assert_eq!(movement.user_id, admin.id);
            assert_eq!(movement.notes.as_deref(), Some(INITIAL_STOCK_NOTE));
        }
    }

    #[tokio::test]
    async fn second_run_changes_nothing() {
        let mut store = demo_store();
        let tenant = store.data.tenants[0].clone();
        let admin = store.data.users[0].clone();

        seed_demo_tenant_data(&mut store, &tenant, &admin).await.unwrap();
        let writes_after_first = store.writes;

        let report = seed_demo_tenant_data(&mut store, &tenant, &admin).await.unwrap();

        assert!(report.skipped);
        assert_eq!(report.existing_products, 8);
        assert_eq!(store.writes, writes_after_first);
        assert_eq!(store.data.categories.len(), 5);
        assert_eq!(store.data.units.len(), 14);
        assert_eq!(store.data.products.len(), 8);
        assert_eq!(store.data.movements.len(), 8);
    }

    #[tokio::test]
    async fn reuses_existing_categories_and_units() {
        let mut store = demo_store();
        let existing = store.add_category("Uniforms");
        store
            .insert_unit(&NewUnit { name: "kg", display_order: 2, is_active: true })
            .await
            .unwrap();
        store.commit().await.unwrap();
        let tenant = store.data.tenants[0].clone();
        let admin = store.data.users[0].clone();

        let report = seed_demo_tenant_data(&mut store, &tenant, &admin).await.unwrap();

        assert_eq!(report.categories_created, 4);
        assert_eq!(report.categories_reused, 1);
        assert_eq!(report.units_created, 13);
        assert_eq!(report.units_skipped, 1);
        assert_eq!(store.data.categories.iter().filter(|c| c.name == "Uniforms").count(), 1);

        let uniforms: Vec<_> = store
            .data
            .products
            .iter()
            .filter(|p| p.sku.starts_with("UNI-"))
            .collect();
        assert_eq!(uniforms.len(), 2);
        assert!(uniforms.iter().all(|p| p.category_id == existing.id));
    }

    #[tokio::test]
    async fn tenant_with_a_product_is_skipped() {
        let mut store = demo_store();
        let tenant = store.data.tenants[0].clone();
        let admin = store.data.users[0].clone();
        store.add_product(tenant.id, "OWN-1");

        let report = seed_demo_tenant_data(&mut store, &tenant, &admin).await.unwrap();

        assert!(report.skipped);
        assert_eq!(report.existing_products, 1);
        assert_eq!(store.writes, 0);
        assert_eq!(store.commits, 0);
    }

    // --- Startup ---

    #[tokio::test]
    async fn disabled_flag_writes_nothing() {
        let mut store = demo_store();
        let settings = SeedSettings { enabled: false, ..SeedSettings::default() };

        let outcome = seed_demo_data_on_startup(&mut store, &settings).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Disabled);
        assert_eq!(store.writes, 0);
        assert_eq!(store.commits, 0);
    }

    #[tokio::test]
    async fn startup_seeds_empty_store_once() {
        let mut store = demo_store();
        let settings = SeedSettings::default();

        let outcome = seed_demo_data_on_startup(&mut store, &settings).await.unwrap();
        assert!(matches!(outcome, SeedOutcome::Seeded(ref r) if r.products_created == 8));

        // Depois do seed o tenant tem produtos: o guard passa a recusar
        let outcome = seed_demo_data_on_startup(&mut store, &settings).await.unwrap();
        assert_eq!(outcome, SeedOutcome::StoreNotEmpty);
        assert_eq!(store.data.categories.len(), 5);
        assert_eq!(store.data.units.len(), 14);
        assert_eq!(store.data.products.len(), 8);
    }

    #[tokio::test]
    async fn second_tenant_with_products_blocks_startup() {
        let mut store = demo_store();
        let other = store.add_tenant("Green Hills Academy", "greenhills");
        store.add_product(other.id, "GH-1");

        let outcome = seed_demo_data_on_startup(&mut store, &SeedSettings::default()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::StoreNotEmpty);
        assert_eq!(store.writes, 0);
    }

    #[tokio::test]
    async fn missing_demo_tenant_is_not_an_error() {
        let mut store = MemoryStore::new();
        store.add_user(ADMIN_USERNAME);

        let outcome = seed_demo_data_on_startup(&mut store, &SeedSettings::default()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::MissingDemoTenant);
        assert_eq!(store.writes, 0);
    }

    #[tokio::test]
    async fn missing_admin_is_not_an_error() {
        let mut store = MemoryStore::new();
        store.add_tenant("Demo School", DEMO_TENANT_SUBDOMAIN);

        let outcome = seed_demo_data_on_startup(&mut store, &SeedSettings::default()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::MissingAdminUser);
        assert_eq!(store.writes, 0);
    }

    #[tokio::test]
    async fn failure_rolls_back_and_propagates() {
        let mut store = demo_store();
        store.fail_on_sku = Some("STA-001");

        let result = seed_demo_data_on_startup(&mut store, &SeedSettings::default()).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(store.rollbacks, 1);
        assert_eq!(store.commits, 0);
        assert!(store.data.categories.is_empty());
        assert!(store.data.units.is_empty());
        assert!(store.data.products.is_empty());
        assert!(store.data.movements.is_empty());
    }
}
