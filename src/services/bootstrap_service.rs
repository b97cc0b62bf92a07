// src/services/bootstrap_service.rs

use bcrypt::hash;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    config::SeedSettings,
    db::{TenantRepository, UserRepository},
    models::auth::UserRole,
    services::demo_catalog::{ADMIN_USERNAME, DEMO_TENANT_SUBDOMAIN},
};

pub const ADMIN_EMAIL: &str = "admin@demo.local";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapReport {
    pub tenant_created: bool,
    pub admin_created: bool,
    pub membership_created: bool,
}

/// Garante que o tenant demo e o usuário admin existem antes do seed.
/// Nunca altera linhas já existentes.
#[derive(Clone)]
pub struct BootstrapService {
    tenant_repo: TenantRepository,
    user_repo: UserRepository,
    pool: SqlitePool, // Usamos a pool para iniciar transações
    bcrypt_cost: u32,
}

impl BootstrapService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            tenant_repo: TenantRepository::new(),
            user_repo: UserRepository::new(),
            pool,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub async fn ensure_demo_tenant_and_admin(
        &self,
        settings: &SeedSettings,
    ) -> Result<BootstrapReport, AppError> {
        let mut report = BootstrapReport::default();

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // 1. Tenant demo
        let tenant = match self.tenant_repo.find_by_subdomain(&mut *tx, DEMO_TENANT_SUBDOMAIN).await? {
            Some(tenant) => tenant,
            None => {
                let tenant = self.tenant_repo
                    .create_tenant(&mut *tx, &settings.demo_tenant_name, DEMO_TENANT_SUBDOMAIN)
                    .await?;
                tracing::info!("🏫 Tenant demo criado: {}", tenant.name);
                report.tenant_created = true;
                tenant
            }
        };

        // 2. Usuário admin
        let admin = match self.user_repo.find_by_username(&mut *tx, ADMIN_USERNAME).await? {
            Some(user) => user,
            None => {
                let password_hash = self.hash_password(&settings.admin_password).await?;
                let user = self.user_repo
                    .create_user(&mut *tx, ADMIN_USERNAME, ADMIN_EMAIL, &password_hash, UserRole::Admin)
                    .await?;
                tracing::info!("👤 Usuário admin criado");
                report.admin_created = true;
                user
            }
        };

        // 3. Vínculo admin <-> tenant
        if !self.tenant_repo.is_member(&mut *tx, tenant.id, admin.id).await? {
            self.tenant_repo
                .assign_user_to_tenant(&mut *tx, tenant.id, admin.id, UserRole::Admin)
                .await?;
            report.membership_created = true;
        }

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        Ok(report)
    }

    // Hashing é CPU-bound: roda fora do executor assíncrono
    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.bcrypt_cost;
        let hashed = tokio::task::spawn_blocking(move || hash(&password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Falha na task de hashing: {}", e)))??;
        Ok(hashed)
    }
}
